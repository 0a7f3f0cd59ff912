//! `CREATE TABLE` / `INSERT INTO` script parser

use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::data_type::DataType;
use crate::definition::{Column, ObjectDefinition, Row};
use crate::error::{ParseError, ParseResult};
use crate::literal::{self, Literal};
use crate::tokenizer::{
    closing_paren, mask_literals, split_top_level, split_tuples, strip_comments,
};

static CREATE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bCREATE\s+TABLE\b").expect("valid regex"));

static INSERT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bINSERT\s+INTO\b").expect("valid regex"));

static CREATE_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CREATE\s+TABLE\s+#(?P<name>\w+)\s*\(").expect("valid regex"));

static COLUMN_DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:\[(?P<bracketed>[^\]]+)\]|(?P<bare>\w+))\s+(?P<type>.+)$")
        .expect("valid regex")
});

// A keyword alone is not enough: `Unique BIT` is a column
static TABLE_CONSTRAINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)^(?:
            CONSTRAINT\s+(?:\w+|\[[^\]]+\])\s+(?:PRIMARY|FOREIGN|UNIQUE|CHECK|DEFAULT)\b
            | PRIMARY\s+KEY\b
            | FOREIGN\s+KEY\b
            | (?:UNIQUE|CHECK)\s*(?:\(|(?:NON)?CLUSTERED\b|KEY\b)
            | INDEX\s+(?P<index>\w+|\[[^\]]+\])\s*(?:\(|(?:NON)?CLUSTERED\b|UNIQUE\b)
        )",
    )
    .expect("valid regex")
});

/// What to do with an INSERT statement that does not target the declared table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsertPolicy {
    /// Fail with [`ParseError::InvalidInsertStatement`]
    #[default]
    Strict,
    /// Log a warning and return the definition without rows
    Tolerant,
}

/// Options for script parsing
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    pub insert_policy: InsertPolicy,
}

impl ParseOptions {
    /// Options that accept an unmatched INSERT statement
    pub fn tolerant() -> Self {
        Self {
            insert_policy: InsertPolicy::Tolerant,
        }
    }
}

/// Parse a script with default options
pub fn parse_script(script: &str) -> ParseResult<ObjectDefinition> {
    ScriptParser::default().parse(script)
}

/// Script parser
#[derive(Debug, Clone, Default)]
pub struct ScriptParser {
    options: ParseOptions,
}

impl ScriptParser {
    /// Create a parser with options
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse one `CREATE TABLE #name (...)` statement, optionally followed
    /// by one `INSERT INTO #name (...) VALUES (...), ...` statement
    pub fn parse(&self, script: &str) -> ParseResult<ObjectDefinition> {
        let script = strip_comments(script);
        // Keywords inside literals and bracketed names are not statements
        let masked = mask_literals(&script);

        if CREATE_MARKER.find_iter(&masked).count() > 1
            || INSERT_MARKER.find_iter(&masked).count() > 1
        {
            return Err(ParseError::MultipleStatements);
        }

        let (table_region, insert_region) = match INSERT_MARKER.find(&masked) {
            Some(m) => (&script[..m.start()], Some(&script[m.start()..])),
            None => (script.as_str(), None),
        };

        let mut definition = Self::parse_table(table_region)?;
        debug!(
            table = %definition.name,
            columns = definition.columns.len(),
            "parsed table definition"
        );

        if let Some(region) = insert_region {
            definition.rows = self.parse_insert(&definition, region)?;
            debug!(rows = definition.rows.len(), "parsed insert statement");
        }

        Ok(definition)
    }

    fn parse_table(region: &str) -> ParseResult<ObjectDefinition> {
        let caps = CREATE_TABLE
            .captures(region)
            .ok_or(ParseError::InvalidTableDefinition)?;
        let name = caps["name"].to_string();
        // The match ends on the opening parenthesis
        let open = caps.get(0).map_or(0, |m| m.end() - 1);
        let close = closing_paren(region, open)?.ok_or(ParseError::InvalidTableDefinition)?;

        let mut columns = Vec::new();
        for piece in split_top_level(&region[open + 1..close], ',')? {
            let piece = piece.trim();
            if piece.is_empty() || Self::is_table_constraint(piece) {
                trace!(clause = piece, "skipping table constraint");
                continue;
            }
            columns.push(Self::parse_column(piece)?);
        }

        if columns.is_empty() {
            return Err(ParseError::NoColumns);
        }

        Ok(ObjectDefinition::with_columns(name, columns))
    }

    fn is_table_constraint(piece: &str) -> bool {
        match TABLE_CONSTRAINT.captures(piece) {
            // `Index NVARCHAR(10)` declares a column named Index
            Some(caps) => caps
                .name("index")
                .map_or(true, |name| DataType::lookup(name.as_str()).is_none()),
            None => false,
        }
    }

    fn parse_column(definition: &str) -> ParseResult<Column> {
        let caps = COLUMN_DEFINITION
            .captures(definition)
            .ok_or_else(|| ParseError::InvalidColumnDefinition(definition.to_string()))?;

        let name = caps
            .name("bracketed")
            .or_else(|| caps.name("bare"))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        let data_type = DataType::from_sql(caps["type"].trim());

        trace!(column = name, %data_type, "column");
        Ok(Column::new(name, data_type))
    }

    fn parse_insert(&self, definition: &ObjectDefinition, region: &str) -> ParseResult<Vec<Row>> {
        let pattern = format!(
            r"(?is)^\s*INSERT\s+INTO\s+#{}\s*\((?P<columns>[^)]*)\)\s*VALUES\s*(?P<values>.*)$",
            regex::escape(&definition.name)
        );
        let insert = Regex::new(&pattern).map_err(|_| ParseError::InvalidInsertStatement)?;

        let caps = match insert.captures(region) {
            Some(caps) => caps,
            None => return self.unmatched_insert(definition),
        };

        let targets = Self::resolve_columns(definition, &caps["columns"])?;
        split_tuples(&caps["values"])?
            .into_iter()
            .enumerate()
            .map(|(row, tuple)| Self::parse_row(definition, &targets, row, tuple))
            .collect()
    }

    fn unmatched_insert(&self, definition: &ObjectDefinition) -> ParseResult<Vec<Row>> {
        match self.options.insert_policy {
            InsertPolicy::Strict => Err(ParseError::InvalidInsertStatement),
            InsertPolicy::Tolerant => {
                warn!(
                    table = %definition.name,
                    "insert statement does not match the table definition, no rows parsed"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Map each INSERT column to its position in the definition
    fn resolve_columns(definition: &ObjectDefinition, list: &str) -> ParseResult<Vec<usize>> {
        let mut positions: AHashMap<&str, usize> = AHashMap::new();
        for (index, column) in definition.columns.iter().enumerate() {
            positions.entry(column.name.as_str()).or_insert(index);
        }

        let mut seen = AHashSet::new();
        let mut targets = Vec::new();
        for raw in split_top_level(list, ',')? {
            let name = raw
                .trim()
                .trim_start_matches('[')
                .trim_end_matches(']')
                .trim();
            let index = *positions
                .get(name)
                .ok_or_else(|| ParseError::UndeclaredColumn(name.to_string()))?;
            if !seen.insert(index) {
                return Err(ParseError::DuplicateInsertColumn(name.to_string()));
            }
            targets.push(index);
        }

        Ok(targets)
    }

    fn parse_row(
        definition: &ObjectDefinition,
        targets: &[usize],
        row: usize,
        tuple: &str,
    ) -> ParseResult<Row> {
        let raw_values = split_top_level(tuple, ',')?;
        if raw_values.len() != targets.len() {
            return Err(ParseError::ValueCountMismatch {
                row,
                expected: targets.len(),
                actual: raw_values.len(),
            });
        }

        let mut values = vec![None; definition.columns.len()];
        for (&index, raw) in targets.iter().zip(raw_values) {
            let column = &definition.columns[index];
            values[index] = match literal::clean(raw, column.data_type) {
                Literal::Missing => {
                    return Err(ParseError::EmptyValue {
                        row,
                        column: column.name.clone(),
                    })
                }
                Literal::Null => None,
                Literal::Value(value) => Some(value),
            };
        }

        Ok(Row::new(values))
    }
}
