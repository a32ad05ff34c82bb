//! Placeholder template parsing and substitution using winnow.
//!
//! Templates are plain text with `{{name}}` tokens, where a name is one or
//! more ASCII word characters (letters, digits, underscore). Anything that
//! does not form a complete token is literal text, stray braces included.
//! Substitution is a single left-to-right pass: substituted values are
//! never re-scanned for tokens.

use std::collections::HashMap;

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::error::RenderError;
use crate::types::Value;

/// One parsed piece of a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Literal text, emitted verbatim.
    Literal(String),

    /// A `{{name}}` token, replaced by the named placeholder's value.
    Placeholder(String),
}

/// Parse a template string into segments.
///
/// Parsing cannot fail: any character that does not start a complete
/// `{{name}}` token is consumed as a literal. A template like `{{{n}}}`
/// therefore parses as the literal `{`, the token `n`, and the literal `}`.
pub(crate) fn parse_template(input: &str) -> Vec<Segment> {
    let mut remaining = input;
    let segments: Vec<Segment> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .unwrap_or_default();
    merge_literals(segments)
}

/// Substitute placeholder values into a parsed template.
///
/// Lenient mode replaces a token with no value with the empty string;
/// strict mode reports the first such token instead, listing the
/// placeholder names that were supplied.
pub(crate) fn substitute(
    segments: &[Segment],
    placeholders: &HashMap<String, Value>,
    strict: bool,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match placeholders.get(name) {
                Some(value) => out.push_str(&value.to_string()),
                None if strict => {
                    let mut available: Vec<String> = placeholders.keys().cloned().collect();
                    available.sort();
                    return Err(RenderError::MissingPlaceholder {
                        name: name.clone(),
                        available,
                    });
                }
                None => {}
            },
        }
    }
    Ok(out)
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder token or literal character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a complete `{{name}}` token.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("{{", take_while(1.., is_word_char), "}}")
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Consume a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Check if a character can appear in a placeholder name.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
