//! Line-scanning helpers for the block parser.
//!
//! Small detection and tokenization routines shared by the parser:
//! whitespace trimming, indentation measurement, value-token detectors
//! (block scalars, anchors, aliases, inline sequences, merge keys),
//! block-scalar collection, and quote/bracket-aware splitting of inline
//! sequences. These are internal to the parsing engine.

use crate::scalar::parse_scalar;
use crate::{Element, Error, Item, Result, Sequence};

/// Trims spaces and tabs from both ends of a line fragment.
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

/// Byte column of the first non-space, non-tab character.
///
/// `None` means the line is blank (empty or whitespace-only).
pub(crate) fn content_start(line: &str) -> Option<usize> {
    line.find(|c: char| c != ' ' && c != '\t')
}

/// `true` for a `|` (literal) or `>` (folded) block scalar introducer.
pub(crate) fn is_block_scalar(value: &str) -> bool {
    value.starts_with('|') || value.starts_with('>')
}

/// `true` for an anchor definition token (`&name`).
pub(crate) fn is_anchor(value: &str) -> bool {
    value.starts_with('&')
}

/// `true` for an alias reference token (`*name`).
pub(crate) fn is_alias(value: &str) -> bool {
    value.starts_with('*')
}

/// `true` for the merge key form: key `<<` with an alias value.
pub(crate) fn is_merge_key(key: &str, value: &str) -> bool {
    key == "<<" && value.starts_with('*')
}

/// `true` for a bracketed inline sequence with non-whitespace interior.
///
/// `[]` and `[  ]` are not inline sequences; they fall through to the
/// scalar classifier and stay strings.
pub(crate) fn is_inline_seq(value: &str) -> bool {
    if value.len() < 3 || !value.starts_with('[') || !value.ends_with(']') {
        return false;
    }
    value[1..value.len() - 1]
        .chars()
        .any(|c| !c.is_whitespace())
}

/// Collects a multiline block scalar following its introducer line.
///
/// Consumes every line whose first content column is strictly deeper than
/// `cur_indent`; blank lines inside the block are consumed as empty
/// content. `|` joins trimmed lines with newlines (keeping the trailing
/// one); `>` joins with spaces and drops the single trailing space.
pub(crate) fn collect_block_scalar(
    lines: &[String],
    idx: &mut usize,
    cur_indent: usize,
    style: char,
) -> Item {
    let mut text = String::new();
    *idx += 1;
    while *idx < lines.len() {
        let line = &lines[*idx];
        if let Some(col) = content_start(line) {
            if col <= cur_indent {
                break;
            }
        }
        text.push_str(trim(line));
        text.push(if style == '|' { '\n' } else { ' ' });
        *idx += 1;
    }
    if style == '>' && text.ends_with(' ') {
        text.pop();
    }
    Item::new(Element::String(text))
}

/// Parses a bracketed inline sequence, recursing into nested brackets.
///
/// `line` is the 1-based source line, used for error reporting.
pub(crate) fn parse_inline_seq(value: &str, line: usize) -> Result<Item> {
    if value.len() < 2 || !value.starts_with('[') || !value.ends_with(']') {
        return Err(Error::syntax(
            line,
            "malformed inline sequence: missing brackets",
        ));
    }

    let interior = &value[1..value.len() - 1];
    let mut seq = Sequence::new();
    for piece in split_inline_items(interior) {
        if is_inline_seq(&piece) {
            seq.push(parse_inline_seq(&piece, line)?);
        } else {
            seq.push(Item::new(parse_scalar(&piece)?));
        }
    }
    Ok(Item::new(Element::Seq(seq)))
}

/// Splits an inline-sequence interior on commas that are neither inside
/// an active quote nor inside a nested `[...]`.
fn split_inline_items(interior: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut item = String::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut depth = 0usize;

    for c in interior.chars() {
        match c {
            '\'' if !in_double => {
                in_single = !in_single;
                item.push(c);
            }
            '"' if !in_single => {
                in_double = !in_double;
                item.push(c);
            }
            '[' if !in_single && !in_double => {
                depth += 1;
                item.push(c);
            }
            ']' if !in_single && !in_double => {
                depth = depth.saturating_sub(1);
                item.push(c);
            }
            ',' if !in_single && !in_double && depth == 0 => {
                items.push(trim(&item).to_string());
                item.clear();
            }
            _ => item.push(c),
        }
    }
    if !item.is_empty() {
        items.push(trim(&item).to_string());
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_removes_spaces_and_tabs() {
        assert_eq!(trim("  abc  "), "abc");
        assert_eq!(trim("\tabc\t"), "abc");
        assert_eq!(trim("abc"), "abc");
        assert_eq!(trim("   "), "");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn content_start_measures_indentation() {
        assert_eq!(content_start("key: 1"), Some(0));
        assert_eq!(content_start("  key: 1"), Some(2));
        assert_eq!(content_start("    "), None);
        assert_eq!(content_start(""), None);
    }

    #[test]
    fn detectors() {
        assert!(is_block_scalar("|"));
        assert!(is_block_scalar(">"));
        assert!(!is_block_scalar("abc"));
        assert!(!is_block_scalar(""));

        assert!(is_anchor("&foo"));
        assert!(!is_anchor("foo"));

        assert!(is_alias("*foo"));
        assert!(!is_alias("foo"));

        assert!(is_merge_key("<<", "*foo"));
        assert!(!is_merge_key("foo", "*foo"));
        assert!(!is_merge_key("<<", "foo"));
    }

    #[test]
    fn inline_seq_detection() {
        assert!(is_inline_seq("[a, b, c]"));
        assert!(is_inline_seq("[[1,2],[3,4]]"));
        assert!(!is_inline_seq("a, b, c"));
        assert!(!is_inline_seq("[]"));
        assert!(!is_inline_seq("[   ]"));
        assert!(!is_inline_seq("[abc"));
    }

    #[test]
    fn splits_on_top_level_commas_only() {
        assert_eq!(split_inline_items("a, b, c"), vec!["a", "b", "c"]);
        assert_eq!(split_inline_items("[1,2],[3,4]"), vec!["[1,2]", "[3,4]"]);
        assert_eq!(split_inline_items("'a,b', c"), vec!["'a,b'", "c"]);
        assert_eq!(split_inline_items("\"x, y\", z"), vec!["\"x, y\"", "z"]);
    }

    #[test]
    fn parses_flat_inline_seq() {
        let item = parse_inline_seq("[1, two, 3.5]", 1).unwrap();
        let seq = item.value.as_seq().unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[0].value.as_int().unwrap(), 1);
        assert_eq!(seq[1].value.as_str().unwrap(), "two");
        assert_eq!(seq[2].value.as_double().unwrap(), 3.5);
    }

    #[test]
    fn parses_nested_inline_seq() {
        let item = parse_inline_seq("[[1,2],[3,4]]", 1).unwrap();
        let outer = item.value.as_seq().unwrap();
        assert_eq!(outer.len(), 2);
        let first = outer[0].value.as_seq().unwrap();
        assert_eq!(first[0].value.as_int().unwrap(), 1);
        assert_eq!(first[1].value.as_int().unwrap(), 2);
        let second = outer[1].value.as_seq().unwrap();
        assert_eq!(second[1].value.as_int().unwrap(), 4);
    }

    #[test]
    fn collects_literal_block_scalar() {
        let lines: Vec<String> = ["key: |", "  line1", "  line2", "other: value"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut idx = 0;
        let item = collect_block_scalar(&lines, &mut idx, 0, '|');
        assert_eq!(item.value.as_str().unwrap(), "line1\nline2\n");
        assert_eq!(idx, 3);
    }

    #[test]
    fn collects_folded_block_scalar() {
        let lines: Vec<String> = ["key: >", "  line1", "  line2", "other: value"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut idx = 0;
        let item = collect_block_scalar(&lines, &mut idx, 0, '>');
        assert_eq!(item.value.as_str().unwrap(), "line1 line2");
        assert_eq!(idx, 3);
    }
}
