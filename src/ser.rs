//! Serialization of element trees back to YAML text.
//!
//! Pure functions of the value model: scalars render inline after their
//! key or dash, nested mappings and sequences open on the following line
//! one indentation step (two spaces) deeper. `None` and empty strings
//! render as `null`. String scalars that would be misread on re-parse
//! are wrapped in single quotes with embedded single quotes doubled.

use crate::{Element, Item, Mapping, Sequence};
use std::io;

/// Renders an item tree as YAML text.
///
/// The output always ends with a newline. Parsing the result back
/// produces a tree with the same key sets and element kinds, up to the
/// documented quoting limitations.
#[must_use]
pub fn to_yaml_string(item: &Item) -> String {
    to_yaml_string_with_indent(item, 0)
}

/// Renders an item tree as YAML text starting at a base indentation.
///
/// Useful for splicing a subtree into an existing document; every line
/// of the output is shifted right by `indent` spaces.
#[must_use]
pub fn to_yaml_string_with_indent(item: &Item, indent: usize) -> String {
    let mut out = String::new();
    match &item.value {
        Element::Map(map) => write_mapping(&mut out, map, indent),
        Element::Seq(seq) => write_sequence(&mut out, seq, indent),
        scalar => {
            push_indent(&mut out, indent);
            out.push_str(&scalar_text(scalar));
            out.push('\n');
        }
    }
    out
}

/// Renders an item tree as YAML text into an arbitrary writer.
///
/// # Errors
///
/// Propagates I/O errors from the writer; formatting itself never fails.
pub fn write_yaml<W: io::Write>(writer: &mut W, item: &Item) -> io::Result<()> {
    write_yaml_with_indent(writer, item, 0)
}

/// Renders into a writer starting at a base indentation.
///
/// # Errors
///
/// Propagates I/O errors from the writer; formatting itself never fails.
pub fn write_yaml_with_indent<W: io::Write>(
    writer: &mut W,
    item: &Item,
    indent: usize,
) -> io::Result<()> {
    writer.write_all(to_yaml_string_with_indent(item, indent).as_bytes())
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) {
    for (key, item) in map.iter() {
        push_indent(out, indent);
        out.push_str(&quote_if_needed(key));
        out.push(':');
        write_value(out, &item.value, indent);
    }
}

fn write_sequence(out: &mut String, seq: &Sequence, indent: usize) {
    for item in seq {
        push_indent(out, indent);
        out.push('-');
        write_value(out, &item.value, indent);
    }
}

/// Writes the value part of an entry: inline for scalars, on following
/// lines one step deeper for collections. The caller has already written
/// the `key:` or `-` prefix.
fn write_value(out: &mut String, element: &Element, indent: usize) {
    match element {
        Element::Map(map) if !map.is_empty() => {
            out.push('\n');
            write_mapping(out, map, indent + 2);
        }
        Element::Seq(seq) if !seq.is_empty() => {
            out.push('\n');
            write_sequence(out, seq, indent + 2);
        }
        scalar => {
            out.push(' ');
            out.push_str(&scalar_text(scalar));
            out.push('\n');
        }
    }
}

/// Inline text for a scalar (or empty-collection) element.
fn scalar_text(element: &Element) -> String {
    match element {
        Element::None => "null".to_string(),
        Element::String(s) if s.is_empty() => "null".to_string(),
        Element::String(s) => quote_if_needed(s),
        Element::Int(i) => i.to_string(),
        Element::Double(d) => format_double(*d),
        Element::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        // Empty collections have no block form; render as empty inline
        // sequence or null so the line stays well-formed.
        Element::Seq(_) => "[]".to_string(),
        Element::Map(_) => "null".to_string(),
    }
}

/// Formats a double so it re-parses as a double, not an integer.
fn format_double(d: f64) -> String {
    if d.is_finite() && d == d.trunc() {
        format!("{:.1}", d)
    } else {
        format!("{}", d)
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push(' ');
    }
}

/// True when a string scalar would be misread if emitted bare.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with([' ', '\t'].as_ref()) || s.ends_with([' ', '\t'].as_ref()) {
        return true;
    }
    if s.starts_with('-') || s.starts_with('?') || s.starts_with(':') {
        return true;
    }
    if s.starts_with('\'') || s.starts_with('"') || s.starts_with('&') || s.starts_with('*') {
        return true;
    }
    s.contains([':', '#', '[', ']', '{', '}', ','].as_ref()) || s.contains('\n')
}

/// Wraps a string in single quotes when needed, doubling embedded
/// single quotes.
fn quote_if_needed(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        if c == '\'' {
            quoted.push('\'');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
