//! Scalar type inference.
//!
//! Turns a raw value token (already separated from its key) into a typed
//! [`Element`]. Classification is ordered and total: every token becomes
//! exactly one of bool, int, double, or string, and the only failure mode
//! is numeric overflow.
//!
//! The boolean match is deliberately case-sensitive: `true` and `false`
//! classify as booleans, while `True` and `TRUE` stay strings. That
//! behavior is pinned by tests; do not widen it.

use crate::{Element, Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static DOUBLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?$").unwrap());

/// Classifies a raw scalar token into a typed element.
///
/// Order: comment strip + trim, exact `true`/`false`, integer pattern,
/// double pattern, quote strip, plain string. An empty token (after
/// trimming) becomes an empty string; callers upstream render that as an
/// explicit null.
///
/// # Errors
///
/// [`Error::Conversion`] when a token matches a numeric pattern but
/// overflows the target type.
pub(crate) fn parse_scalar(value: &str) -> Result<Element> {
    let clean = preprocess(value);

    if let Some(primitive) = try_parse_primitive(&clean)? {
        return Ok(primitive);
    }

    Ok(Element::String(strip_quotes(&clean).to_string()))
}

/// Removes a trailing comment and surrounding whitespace.
///
/// Quoted tokens are left intact: a `#` inside quotes is not a comment,
/// and the quotes themselves are handled later by [`strip_quotes`].
fn preprocess(value: &str) -> String {
    let s = value.trim_matches(|c: char| c == ' ' || c == '\t');
    if s.starts_with('\'') || s.starts_with('"') {
        return s.to_string();
    }
    match s.find('#') {
        Some(hash) => s[..hash].trim_matches(|c: char| c == ' ' || c == '\t').to_string(),
        None => s.to_string(),
    }
}

/// Attempts bool and numeric classification; `None` means "treat as string".
fn try_parse_primitive(clean: &str) -> Result<Option<Element>> {
    if clean == "true" {
        return Ok(Some(Element::Bool(true)));
    }
    if clean == "false" {
        return Ok(Some(Element::Bool(false)));
    }

    if INT_RE.is_match(clean) {
        // The pattern guarantees digits, so a parse failure is overflow.
        let i = clean
            .parse::<i64>()
            .map_err(|_| Error::conversion(clean, "integer (value out of range)"))?;
        return Ok(Some(Element::Int(i)));
    }

    if DOUBLE_RE.is_match(clean) {
        let d = clean
            .parse::<f64>()
            .map_err(|_| Error::conversion(clean, "double (invalid format)"))?;
        // f64 parsing saturates to infinity instead of failing; finite
        // text producing an infinite value is an overflow.
        if d.is_infinite() {
            return Err(Error::conversion(clean, "double (value out of range)"));
        }
        return Ok(Some(Element::Double(d)));
    }

    Ok(None)
}

/// Strips exactly one matching pair of outer quotes, with no escape
/// processing of the interior.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
