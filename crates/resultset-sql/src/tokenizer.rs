//! Quote-aware scanning helpers
//!
//! Every scan here treats text between single quotes and text between
//! square brackets as opaque: commas, parentheses, apostrophes and comment
//! markers inside a literal or a bracketed identifier are never structural.
//! A doubled quote (`''`) inside a literal toggles out and straight back in,
//! so it needs no special casing.

use crate::error::{ParseError, ParseResult};

/// Where a scan currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Code,
    Literal,
    Identifier,
}

impl Context {
    /// Advance past `c`; returns true when `c` is structural code
    fn advance(&mut self, c: char) -> bool {
        match (*self, c) {
            (Context::Code, '\'') => *self = Context::Literal,
            (Context::Code, '[') => *self = Context::Identifier,
            (Context::Code, _) => return true,
            (Context::Literal, '\'') | (Context::Identifier, ']') => *self = Context::Code,
            _ => {}
        }
        false
    }
}

/// Remove `-- line` and `/* block */` comments that sit outside literals
pub(crate) fn strip_comments(script: &str) -> String {
    let mut out = String::with_capacity(script.len());
    let mut chars = script.chars().peekable();
    let mut context = Context::Code;

    while let Some(c) = chars.next() {
        if !context.advance(c) {
            out.push(c);
            continue;
        }

        match c {
            '-' if chars.peek() == Some(&'-') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    previous = skipped;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Blank out literals and bracketed identifiers, keeping byte offsets
///
/// Quote and bracket delimiters stay in place, so keyword searches on the
/// result line up with the original text.
pub(crate) fn mask_literals(script: &str) -> String {
    let mut out = String::with_capacity(script.len());
    let mut context = Context::Code;

    for c in script.chars() {
        let before = context;
        context.advance(c);
        if before == Context::Code || context == Context::Code {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(' ').take(c.len_utf8()));
        }
    }

    out
}

/// Byte offset of the `)` closing the `(` at `open`
///
/// Returns `Ok(None)` when the parenthesis is never closed.
pub(crate) fn closing_paren(text: &str, open: usize) -> ParseResult<Option<usize>> {
    let mut depth = 0usize;
    let mut context = Context::Code;

    for (offset, c) in text[open..].char_indices() {
        if !context.advance(c) {
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(Some(open + offset));
                }
            }
            _ => {}
        }
    }

    if context == Context::Literal {
        Err(ParseError::UnterminatedLiteral)
    } else {
        Ok(None)
    }
}

/// Split on `separator` wherever it appears outside literals and parentheses
pub(crate) fn split_top_level(text: &str, separator: char) -> ParseResult<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut context = Context::Code;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !context.advance(c) {
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if context == Context::Literal {
        return Err(ParseError::UnterminatedLiteral);
    }
    parts.push(&text[start..]);
    Ok(parts)
}

/// Split a `VALUES` region into tuple bodies (the text between each tuple's parentheses)
///
/// Tuples are separated by commas. After the last tuple only an optional
/// `;` and an optional `GO` batch separator may follow.
pub(crate) fn split_tuples(values: &str) -> ParseResult<Vec<&str>> {
    let mut tuples = Vec::new();
    let mut rest = values.trim_start();

    loop {
        if !rest.starts_with('(') {
            return Err(ParseError::InvalidInsertStatement);
        }
        let close = closing_paren(rest, 0)?.ok_or(ParseError::InvalidInsertStatement)?;
        tuples.push(&rest[1..close]);

        rest = rest[close + 1..].trim_start();
        match rest.strip_prefix(',') {
            Some(next) => rest = next.trim_start(),
            None => break,
        }
    }

    let trailing = rest.strip_prefix(';').unwrap_or(rest).trim();
    if trailing.is_empty() || is_batch_separator(trailing) {
        Ok(tuples)
    } else {
        Err(ParseError::InvalidInsertStatement)
    }
}

/// `GO` on its own, optionally with a `;`
fn is_batch_separator(text: &str) -> bool {
    let word = text.strip_suffix(';').unwrap_or(text).trim_end();
    word.eq_ignore_ascii_case("go")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comments() {
        let script = "CREATE TABLE #T (Id INT) -- trailing\n/* block\n comment */INSERT";
        assert_eq!(strip_comments(script), "CREATE TABLE #T (Id INT) \n INSERT");
    }

    #[test]
    fn test_strip_comments_keeps_literals() {
        let script = "VALUES ('a -- b', 'it''s /* not */ a comment')";
        assert_eq!(strip_comments(script), script);
    }

    #[test]
    fn test_brackets_are_opaque() {
        let script = "([O'Brien] INT, [a--b] BIT, [x,(y] INT) -- gone";
        assert_eq!(strip_comments(script), "([O'Brien] INT, [a--b] BIT, [x,(y] INT) ");
        assert_eq!(closing_paren(script, 0).unwrap(), Some(38));
        assert_eq!(
            split_top_level(&script[1..38], ',').unwrap(),
            vec!["[O'Brien] INT", " [a--b] BIT", " [x,(y] INT"]
        );
    }

    #[test]
    fn test_mask_literals() {
        let script = "VALUES ('INSERT INTO', [CREATE TABLE], N'é')";
        let masked = mask_literals(script);
        assert_eq!(masked.len(), script.len());
        assert_eq!(masked, "VALUES ('           ', [            ], N'  ')");
    }

    #[test]
    fn test_closing_paren() {
        let text = "(a, (b), ')') tail";
        assert_eq!(closing_paren(text, 0).unwrap(), Some(12));
        assert_eq!(closing_paren("(a, (b)", 0).unwrap(), None);
        assert_eq!(
            closing_paren("('open", 0),
            Err(ParseError::UnterminatedLiteral)
        );
    }

    #[test]
    fn test_split_top_level() {
        let parts = split_top_level("1, 'a,b', DECIMAL(10,2), 'it''s'", ',').unwrap();
        assert_eq!(parts, vec!["1", " 'a,b'", " DECIMAL(10,2)", " 'it''s'"]);
        assert_eq!(split_top_level("", ',').unwrap(), vec![""]);
    }

    #[test]
    fn test_split_tuples() {
        let tuples = split_tuples(" (1, 'a'),\n(2, '(b)') ;  ").unwrap();
        assert_eq!(tuples, vec!["1, 'a'", "2, '(b)'"]);
    }

    #[test]
    fn test_split_tuples_rejects_trailing_text() {
        assert_eq!(
            split_tuples("(1) garbage"),
            Err(ParseError::InvalidInsertStatement)
        );
        assert_eq!(split_tuples(""), Err(ParseError::InvalidInsertStatement));
        assert_eq!(split_tuples("(1), "), Err(ParseError::InvalidInsertStatement));
        assert_eq!(split_tuples("(1"), Err(ParseError::InvalidInsertStatement));
        assert_eq!(
            split_tuples("(1);\nGO\nSELECT 1"),
            Err(ParseError::InvalidInsertStatement)
        );
    }

    #[test]
    fn test_split_tuples_accepts_batch_separator() {
        assert_eq!(split_tuples("(1), (2);\r\nGO\r\n").unwrap(), vec!["1", "2"]);
        assert_eq!(split_tuples("(1)\ngo;").unwrap(), vec!["1"]);
        assert_eq!(split_tuples("(1) GOTO"), Err(ParseError::InvalidInsertStatement));
    }
}
