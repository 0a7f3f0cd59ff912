//! # resultset-sql
//!
//! Turns a SQL `CREATE TABLE #name (...)` script, optionally followed by one
//! `INSERT INTO #name (...) VALUES (...)` statement, into an
//! [`ObjectDefinition`] (schema plus rows), and renders definitions as C#
//! class declarations and list initializers.
//!
//! ## Example
//!
//! ```rust
//! use resultset_sql::{parse_script, print, DataType, PrintKind};
//!
//! let definition = parse_script(
//!     "CREATE TABLE #T (Id INT, Name NVARCHAR(50));\n\
//!      INSERT INTO #T (Id, Name) VALUES (1, N'Test');",
//! )
//! .unwrap();
//!
//! assert_eq!(definition.name, "T");
//! assert_eq!(definition.columns[0].data_type, DataType::Int32);
//! assert_eq!(definition.value(0, "Name"), Some("Test"));
//!
//! let code = print(&definition, PrintKind::Data).unwrap();
//! assert!(code.contains("Name = \"Test\""));
//! ```

mod data_type;
mod definition;
mod error;
mod from_sheet;
mod literal;
mod parser;
mod printer;
mod tokenizer;

pub use data_type::{DataType, ValueSyntax};
pub use definition::{Column, ObjectDefinition, Row};
pub use error::{ParseError, ParseResult, PrintError, PrintResult};
pub use from_sheet::{definition_from_sheet, definitions_from_workbook};
pub use parser::{parse_script, InsertPolicy, ParseOptions, ScriptParser};
pub use printer::{class_definition, data_list, print, print_all, PrintKind};
