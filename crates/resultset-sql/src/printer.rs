//! C# class and list-initializer rendering

use std::fmt;

use crate::data_type::{DataType, ValueSyntax};
use crate::definition::ObjectDefinition;
use crate::error::PrintResult;

/// Which blocks to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintKind {
    /// Class declaration only
    ClassDefinition,
    /// List initializer only
    Data,
    /// Class declaration, a blank line, then the list initializer
    #[default]
    ClassDefinitionAndData,
}

/// Render the class declaration block
///
/// A value-type property is declared nullable (`Int32?`) when some row has
/// no value for it, so the list initializer's `null` still type-checks.
///
/// ```text
/// public class Users {
/// public Int32 Id { get; set; }
/// }
/// ```
pub fn class_definition(definition: &ObjectDefinition) -> String {
    ClassBlock(definition).to_string()
}

/// Render the list initializer block
///
/// Fails when a row does not hold one value per column.
pub fn data_list(definition: &ObjectDefinition) -> PrintResult<String> {
    definition.check_rows()?;
    Ok(DataBlock(definition).to_string())
}

/// Render the blocks selected by `kind`
pub fn print(definition: &ObjectDefinition, kind: PrintKind) -> PrintResult<String> {
    match kind {
        PrintKind::ClassDefinition => Ok(class_definition(definition)),
        PrintKind::Data => data_list(definition),
        PrintKind::ClassDefinitionAndData => {
            let data = data_list(definition)?;
            Ok(format!("{}\n{}", class_definition(definition), data))
        }
    }
}

/// Render several definitions, separating them with a blank line
pub fn print_all(definitions: &[ObjectDefinition], kind: PrintKind) -> PrintResult<String> {
    let blocks = definitions
        .iter()
        .map(|definition| print(definition, kind))
        .collect::<PrintResult<Vec<_>>>()?;
    Ok(blocks.join("\n"))
}

struct ClassBlock<'a>(&'a ObjectDefinition);

impl fmt::Display for ClassBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "public class {} {{", self.0.name)?;
        for (index, column) in self.0.columns.iter().enumerate() {
            let nullable = column.data_type.is_value_type() && self.0.has_absent_values(index);
            writeln!(
                f,
                "public {}{} {} {{ get; set; }}",
                column.data_type.type_name(),
                if nullable { "?" } else { "" },
                column.name
            )?;
        }
        writeln!(f, "}}")
    }
}

struct DataBlock<'a>(&'a ObjectDefinition);

impl fmt::Display for DataBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.0.name;
        let columns = &self.0.columns;
        let rows = &self.0.rows;

        writeln!(f, "List<{0}> {0}List = new() {{", name)?;
        for (r, row) in rows.iter().enumerate() {
            writeln!(f, "new {}() {{", name)?;
            for (c, column) in columns.iter().enumerate() {
                let separator = if c + 1 < columns.len() { "," } else { "" };
                writeln!(
                    f,
                    "{} = {}{}",
                    column.name,
                    ValueLiteral(row.get(c), column.data_type),
                    separator
                )?;
            }
            let separator = if r + 1 < rows.len() { "," } else { "" };
            writeln!(f, "}}{}", separator)?;
        }
        writeln!(f, "}};")
    }
}

struct ValueLiteral<'a>(Option<&'a str>, DataType);

impl fmt::Display for ValueLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.0 {
            Some(value) => value,
            None => return f.write_str("null"),
        };
        match self.1.value_syntax() {
            ValueSyntax::Quoted => write!(f, "\"{}\"", value),
            ValueSyntax::ParseCall => write!(f, "DateTime.Parse(\"{}\")", value),
            ValueSyntax::Bare => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{Column, Row};
    use crate::error::PrintError;

    fn one_row() -> ObjectDefinition {
        let mut def = ObjectDefinition::with_columns(
            "T",
            vec![
                Column::new("Id", DataType::Int32),
                Column::new("Born", DataType::DateTime),
                Column::new("Note", DataType::String),
            ],
        );
        def.rows.push(Row::new(vec![
            Some("1".into()),
            Some("2020-01-02".into()),
            None,
        ]));
        def
    }

    #[test]
    fn test_value_literals() {
        let code = data_list(&one_row()).unwrap();
        assert_eq!(
            code,
            "List<T> TList = new() {\n\
             new T() {\n\
             Id = 1,\n\
             Born = DateTime.Parse(\"2020-01-02\"),\n\
             Note = null\n\
             }\n\
             };\n"
        );
    }

    #[test]
    fn test_absent_values_make_value_types_nullable() {
        assert_eq!(
            class_definition(&one_row()),
            "public class T {\n\
             public Int32 Id { get; set; }\n\
             public DateTime Born { get; set; }\n\
             public String Note { get; set; }\n\
             }\n"
        );

        let mut def = one_row();
        def.rows.push(Row::new(vec![Some("2".into()), None, Some("x".into())]));
        let code = class_definition(&def);
        assert!(code.contains("public Int32 Id { get; set; }"));
        assert!(code.contains("public DateTime? Born { get; set; }"));
        assert!(code.contains("public String Note { get; set; }"));
    }

    #[test]
    fn test_empty_rows() {
        let def = ObjectDefinition::with_columns("T", vec![Column::new("Id", DataType::Int32)]);
        assert_eq!(data_list(&def).unwrap(), "List<T> TList = new() {\n};\n");
    }

    #[test]
    fn test_shape_mismatch_is_reported() {
        let mut def = one_row();
        def.rows.push(Row::new(vec![Some("2".into())]));

        assert_eq!(
            print(&def, PrintKind::ClassDefinitionAndData),
            Err(PrintError::RowShapeMismatch {
                row: 1,
                expected: 3,
                actual: 1
            })
        );
        // The class block does not look at rows
        assert!(print(&def, PrintKind::ClassDefinition).is_ok());
    }

    #[test]
    fn test_print_all_separates_blocks() {
        let a = ObjectDefinition::with_columns("A", vec![Column::new("X", DataType::Bool)]);
        let b = ObjectDefinition::with_columns("B", vec![Column::new("Y", DataType::Guid)]);
        let code = print_all(&[a, b], PrintKind::ClassDefinition).unwrap();
        assert_eq!(
            code,
            "public class A {\npublic Boolean X { get; set; }\n}\n\npublic class B {\npublic Guid Y { get; set; }\n}\n"
        );
    }
}
