//! Numeric coercion for loosely-typed record values
//!
//! Records arrive as JSON, so a numeric field may hold a number, a boolean
//! or a numeric-looking string. Everything else is a coercion failure.

use crate::error::{Error, Result};
use serde_json::Value;

/// Longest rendering of an offending value kept in an error message
const MAX_RENDERED_LEN: usize = 64;

/// Coerce a JSON value to `f64`
///
/// - numbers convert directly
/// - `true` / `false` become `1.0` / `0.0`
/// - strings are parsed with [`parse_numeric`]
/// - `null`, arrays and objects fail
pub fn to_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::coercion(render(value), "number out of f64 range")),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_numeric(s),
        Value::Null => Err(Error::coercion("null", "value is null")),
        Value::Array(_) => Err(Error::coercion(render(value), "arrays are not numeric")),
        Value::Object(_) => Err(Error::coercion(render(value), "objects are not numeric")),
    }
}

/// Parse a numeric-like string
///
/// Surrounding whitespace is ignored. Accepts an optional sign, decimal
/// digits with optional fraction and exponent, and `inf`, `infinity` or
/// `nan` in any case. A single underscore between two digits is a digit
/// separator.
pub fn parse_numeric(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::coercion(render_str(text), "empty string"));
    }

    let cleaned = strip_digit_separators(trimmed)
        .ok_or_else(|| Error::coercion(render_str(text), "misplaced underscore"))?;

    cleaned
        .parse::<f64>()
        .map_err(|e| Error::coercion(render_str(text), e.to_string()))
}

/// Remove `_` separators, or `None` when one is not flanked by digits
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(b as char);
    }
    Some(out)
}

fn render(value: &Value) -> String {
    truncate(value.to_string())
}

fn render_str(text: &str) -> String {
    truncate(format!("{:?}", text))
}

fn truncate(mut rendered: String) -> String {
    if rendered.chars().count() > MAX_RENDERED_LEN {
        rendered = rendered.chars().take(MAX_RENDERED_LEN).collect();
        rendered.push_str("...");
    }
    rendered
}
