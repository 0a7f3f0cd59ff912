//! Cleaning of raw value literals

use crate::data_type::DataType;

/// A cleaned value slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Literal {
    /// Nothing between the separators
    Missing,
    /// An unquoted `NULL`
    Null,
    Value(String),
}

/// Clean one raw value for a column of `data_type`
///
/// In order: trim, drop one wrapping pair of parentheses, recognise `NULL`,
/// drop a unicode `N` prefix (text columns only), then drop one wrapping
/// pair of single quotes and unescape `''`.
pub(crate) fn clean(raw: &str, data_type: DataType) -> Literal {
    let mut text = raw.trim();
    if let Some(inner) = unwrap_pair(text, '(', ')') {
        text = inner.trim();
    }
    if text.is_empty() {
        return Literal::Missing;
    }
    if text.eq_ignore_ascii_case("NULL") {
        return Literal::Null;
    }
    if data_type.is_string() {
        text = strip_unicode_prefix(text);
    }

    match unwrap_pair(text, '\'', '\'') {
        Some(inner) => Literal::Value(inner.replace("''", "'")),
        None => Literal::Value(text.to_string()),
    }
}

fn unwrap_pair(text: &str, open: char, close: char) -> Option<&str> {
    if text.len() >= 2 && text.starts_with(open) && text.ends_with(close) {
        Some(&text[open.len_utf8()..text.len() - close.len_utf8()])
    } else {
        None
    }
}

fn strip_unicode_prefix(text: &str) -> &str {
    match text.strip_prefix(['N', 'n']) {
        Some(rest) if rest.starts_with('\'') => rest,
        _ => text,
    }
}
