//! Script parsing and printing error types

use thiserror::Error;

/// Result type for script parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for printing
pub type PrintResult<T> = std::result::Result<T, PrintError>;

/// Ways a script can be malformed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// More than one CREATE TABLE or INSERT INTO statement
    #[error("Insert statement contains multiple table and/or insert definitions. Only one is allowed")]
    MultipleStatements,

    /// No usable CREATE TABLE statement
    #[error("Invalid table definition. Must start with CREATE TABLE #tableName (column1 datatype, column2 datatype);")]
    InvalidTableDefinition,

    /// CREATE TABLE with an empty column list
    #[error("Table definition must contain at least one column")]
    NoColumns,

    /// A column definition without a name and type
    #[error("Invalid column definition: '{0}'")]
    InvalidColumnDefinition(String),

    /// An INSERT region that does not match the expected statement
    #[error("Invalid insert statement. Must start with INSERT INTO #tableName (column1, column2) VALUES (value1, value2);")]
    InvalidInsertStatement,

    /// The INSERT column list names a column the table does not declare
    #[error("Insert statement references an undeclared column: '{0}'")]
    UndeclaredColumn(String),

    /// The INSERT column list names a column twice
    #[error("Insert statement lists column '{0}' more than once")]
    DuplicateInsertColumn(String),

    /// A value slot with nothing in it
    #[error("Value cannot be empty (row {row}, column '{column}')")]
    EmptyValue { row: usize, column: String },

    /// A row tuple whose value count differs from the INSERT column list
    #[error("Column/value count mismatch in row {row}: expected {expected} values, found {actual}")]
    ValueCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A quoted literal that never closes
    #[error("Unterminated string literal")]
    UnterminatedLiteral,
}

/// Inconsistencies found while rendering a definition
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrintError {
    /// A row does not hold exactly one value per declared column
    #[error("Row {row} has {actual} values but the definition declares {expected} columns")]
    RowShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
