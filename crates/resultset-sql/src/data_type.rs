//! Column data types and the SQL type mapping

use std::fmt;

/// The output type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    Int32,
    Int64,
    Int16,
    Byte,
    Bool,
    String,
    DateTime,
    DateTimeOffset,
    Decimal,
    Double,
    Single,
    ByteArray,
    Guid,
    TimeSpan,
    Object,
}

/// How a raw value is written back as a literal of its column's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSyntax {
    /// Wrapped in double quotes
    Quoted,
    /// Wrapped in a `DateTime.Parse("...")` call
    ParseCall,
    /// Emitted as-is
    Bare,
}

/// SQL Server type names (lowercase, without length/precision) and their mapping.
/// Names not listed map to [`DataType::String`].
const SQL_TYPES: &[(&str, DataType)] = &[
    ("bigint", DataType::Int64),
    ("binary", DataType::ByteArray),
    ("bit", DataType::Bool),
    ("date", DataType::DateTime),
    ("datetime", DataType::DateTime),
    ("datetime2", DataType::DateTime),
    ("datetimeoffset", DataType::DateTimeOffset),
    ("decimal", DataType::Decimal),
    ("float", DataType::Double),
    ("image", DataType::ByteArray),
    ("int", DataType::Int32),
    ("money", DataType::Decimal),
    ("nchar", DataType::String),
    ("ntext", DataType::String),
    ("numeric", DataType::Decimal),
    ("nvarchar", DataType::String),
    ("real", DataType::Single),
    ("rowversion", DataType::ByteArray),
    ("smalldatetime", DataType::DateTime),
    ("smallint", DataType::Int16),
    ("smallmoney", DataType::Decimal),
    ("sql_variant", DataType::Object),
    ("text", DataType::String),
    ("time", DataType::TimeSpan),
    ("timestamp", DataType::ByteArray),
    ("tinyint", DataType::Byte),
    ("uniqueidentifier", DataType::Guid),
    ("varbinary", DataType::ByteArray),
    ("varchar", DataType::String),
    ("xml", DataType::String),
];

impl DataType {
    /// Map a SQL type token (e.g. `NVARCHAR(50)`, `decimal(10,2)`, `INT NOT NULL`)
    ///
    /// Only the first word is considered and any `(...)` suffix is dropped
    /// before a case-insensitive lookup. Unknown types map to `String`.
    pub fn from_sql(sql_type: &str) -> Self {
        Self::lookup(sql_type).unwrap_or(DataType::String)
    }

    /// Like [`DataType::from_sql`], but `None` for names not in the table
    pub fn lookup(sql_type: &str) -> Option<Self> {
        let word = sql_type.split_whitespace().next().unwrap_or("");
        let base = word.split('(').next().unwrap_or("").to_ascii_lowercase();

        SQL_TYPES
            .iter()
            .find(|(name, _)| *name == base)
            .map(|(_, data_type)| *data_type)
    }

    /// The C# type name used in declarations
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Int16 => "Int16",
            DataType::Byte => "Byte",
            DataType::Bool => "Boolean",
            DataType::String => "String",
            DataType::DateTime => "DateTime",
            DataType::DateTimeOffset => "DateTimeOffset",
            DataType::Decimal => "Decimal",
            DataType::Double => "Double",
            DataType::Single => "Single",
            DataType::ByteArray => "Byte[]",
            DataType::Guid => "Guid",
            DataType::TimeSpan => "TimeSpan",
            DataType::Object => "Object",
        }
    }

    /// How values of this type are rendered
    pub fn value_syntax(&self) -> ValueSyntax {
        match self {
            DataType::String => ValueSyntax::Quoted,
            DataType::DateTime => ValueSyntax::ParseCall,
            _ => ValueSyntax::Bare,
        }
    }

    /// Check if this is the text type
    pub fn is_string(&self) -> bool {
        matches!(self, DataType::String)
    }

    /// Check if the C# type is a struct, which needs `?` to hold `null`
    pub fn is_value_type(&self) -> bool {
        !matches!(self, DataType::String | DataType::ByteArray | DataType::Object)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sql_strips_length_and_case() {
        assert_eq!(DataType::from_sql("INT"), DataType::Int32);
        assert_eq!(DataType::from_sql("NVARCHAR(50)"), DataType::String);
        assert_eq!(DataType::from_sql("decimal(10,2)"), DataType::Decimal);
        assert_eq!(DataType::from_sql("VarBinary(MAX)"), DataType::ByteArray);
        assert_eq!(DataType::from_sql("int NOT NULL"), DataType::Int32);
    }

    #[test]
    fn test_from_sql_table() {
        let cases = [
            ("bigint", DataType::Int64),
            ("bit", DataType::Bool),
            ("smalldatetime", DataType::DateTime),
            ("datetimeoffset", DataType::DateTimeOffset),
            ("smallmoney", DataType::Decimal),
            ("float", DataType::Double),
            ("real", DataType::Single),
            ("smallint", DataType::Int16),
            ("tinyint", DataType::Byte),
            ("uniqueidentifier", DataType::Guid),
            ("time", DataType::TimeSpan),
            ("rowversion", DataType::ByteArray),
            ("sql_variant", DataType::Object),
            ("xml", DataType::String),
        ];
        for (sql, expected) in cases {
            assert_eq!(DataType::from_sql(sql), expected, "{sql}");
        }
    }

    #[test]
    fn test_unknown_defaults_to_string() {
        assert_eq!(DataType::from_sql("geography"), DataType::String);
        assert_eq!(DataType::from_sql(""), DataType::String);
        assert_eq!(DataType::lookup("geography"), None);
        assert_eq!(DataType::lookup("NVARCHAR(10)"), Some(DataType::String));
    }

    #[test]
    fn test_value_syntax() {
        assert_eq!(DataType::String.value_syntax(), ValueSyntax::Quoted);
        assert_eq!(DataType::DateTime.value_syntax(), ValueSyntax::ParseCall);
        assert_eq!(DataType::Int32.value_syntax(), ValueSyntax::Bare);
        assert_eq!(DataType::Guid.value_syntax(), ValueSyntax::Bare);
    }

    #[test]
    fn test_value_types() {
        assert!(DataType::Int32.is_value_type());
        assert!(DataType::DateTime.is_value_type());
        assert!(!DataType::String.is_value_type());
        assert!(!DataType::ByteArray.is_value_type());
    }
}
