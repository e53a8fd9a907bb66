//! The indentation-driven block parser.
//!
//! [`YamlParser`] reads a document as a pre-split line buffer and walks it
//! with a single shared cursor. Block mappings and block sequences are
//! parsed by two mutually recursive methods driven by indentation: a line
//! indented less than the current block's threshold terminates that block,
//! and a strictly deeper lookahead line opens a nested one.
//!
//! Anchors (`&name`), aliases (`*name`), and merge keys (`<<: *name`) are
//! resolved against a per-parse registry owned by the parser. Anchored
//! values are cloned on binding and again on resolution, so aliased values
//! are independent copies, never live references.
//!
//! ## Usage
//!
//! ```rust
//! use yamlite::YamlParser;
//!
//! let mut parser = YamlParser::new();
//! parser.parse_str("server:\n  host: localhost\n  port: 8080\n").unwrap();
//!
//! let server = parser.get("server").unwrap().value.as_map().unwrap();
//! assert_eq!(server.get("port").unwrap().value.as_int().unwrap(), 8080);
//! ```

use crate::scalar::parse_scalar;
use crate::scan;
use crate::{Element, Error, Item, Mapping, Result, Sequence};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Parses YAML documents into [`Element`] trees.
///
/// A parser owns the result of its most recent parse. The root is either
/// a mapping or a sequence, decided by the first non-blank, non-comment
/// line of the document; check [`is_sequence_root`](Self::is_sequence_root)
/// before choosing [`root`](Self::root) or
/// [`sequence_root`](Self::sequence_root).
///
/// A failed parse leaves the parser in an unspecified state; use a fresh
/// instance for further documents.
#[derive(Debug, Default)]
pub struct YamlParser {
    seq_root: bool,
    map_data: Mapping,
    seq_data: Sequence,
    anchors: BTreeMap<String, Item>,
}

impl YamlParser {
    /// Creates a parser with no document loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::File`] when the file cannot be opened or read; otherwise
    /// any error [`parse_str`](Self::parse_str) can produce.
    pub fn parse(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::file(format!("{}: {}", path.display(), e)))?;
        self.parse_str(&text)
    }

    /// Parses a YAML document from an in-memory string.
    ///
    /// Accepts `\n` and `\r\n` line endings. Replaces any previously
    /// parsed document.
    ///
    /// # Errors
    ///
    /// [`Error::Syntax`] on structural violations (with a 1-based line
    /// number), [`Error::Conversion`] on numeric overflow, [`Error::Key`]
    /// for undefined anchors, [`Error::Type`] for merge keys referencing
    /// a non-mapping anchor.
    pub fn parse_str(&mut self, input: &str) -> Result<()> {
        let lines: Vec<String> = input.lines().map(str::to_string).collect();

        self.seq_root = false;
        self.map_data = Mapping::new();
        self.seq_data = Sequence::new();
        self.anchors.clear();

        // Root detection: the first non-blank, non-comment line decides.
        for line in &lines {
            let trimmed = scan::trim(line);
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('-') {
                let mut idx = 0;
                self.seq_data = self.parse_seq(&lines, &mut idx, 0)?;
                self.seq_root = true;
                self.anchors.clear();
                return Ok(());
            }
            break;
        }

        let mut idx = 0;
        self.map_data = self.parse_map(&lines, &mut idx, 0)?;
        self.anchors.clear();
        Ok(())
    }

    /// Returns `true` if the parsed root is a sequence.
    #[must_use]
    pub fn is_sequence_root(&self) -> bool {
        self.seq_root
    }

    /// Returns the root mapping.
    ///
    /// # Errors
    ///
    /// [`Error::Structure`] when the root is a sequence.
    pub fn root(&self) -> Result<&Mapping> {
        if self.seq_root {
            return Err(Error::structure("root element is a sequence, not a mapping"));
        }
        Ok(&self.map_data)
    }

    /// Returns the root sequence.
    ///
    /// # Errors
    ///
    /// [`Error::Structure`] when the root is a mapping.
    pub fn sequence_root(&self) -> Result<&Sequence> {
        if !self.seq_root {
            return Err(Error::structure("root element is a mapping, not a sequence"));
        }
        Ok(&self.seq_data)
    }

    /// Looks up `key` in the root mapping.
    ///
    /// # Errors
    ///
    /// [`Error::Structure`] on a sequence root, [`Error::Key`] when the
    /// key is absent.
    pub fn get(&self, key: &str) -> Result<&Item> {
        if self.seq_root {
            return Err(Error::structure(format!(
                "cannot access key '{}' on sequence root",
                key
            )));
        }
        self.map_data.get(key).ok_or_else(|| Error::key(key))
    }

    /// Parses a block mapping whose lines are indented at least `indent`.
    ///
    /// Stops (without consuming) at the first line indented less than
    /// `indent`, which is how nested blocks hand control back. Duplicate
    /// keys are detected against keys explicitly written in this block;
    /// merge-inherited keys may be shadowed once without error.
    fn parse_map(&mut self, lines: &[String], idx: &mut usize, indent: usize) -> Result<Mapping> {
        let mut map = Mapping::new();
        let mut explicit_keys: BTreeSet<String> = BTreeSet::new();

        while *idx < lines.len() {
            let line = &lines[*idx];
            let cur_indent = match scan::content_start(line) {
                Some(col) => col,
                None => {
                    *idx += 1;
                    continue;
                }
            };
            let content = &line[cur_indent..];
            if content.starts_with('#') {
                *idx += 1;
                continue;
            }
            if cur_indent < indent {
                break;
            }

            // A sequence line inside a mapping block: recovery path that
            // attaches the sequence to the previous line's key, if that
            // key exists and is still unbound.
            if content.starts_with('-') {
                if *idx > 0 {
                    let prev = &lines[*idx - 1];
                    if let Some(start) = scan::content_start(prev) {
                        let prev_content = &prev[start..];
                        if let Some(pos) = prev_content.find(':') {
                            let key = scan::trim(&prev_content[..pos]).to_string();
                            if !key.is_empty() && !map.contains_key(&key) {
                                let seq = self.parse_seq(lines, idx, cur_indent)?;
                                map.insert(key.clone(), Item::new(Element::Seq(seq)));
                                explicit_keys.insert(key);
                            }
                        }
                    }
                }
                *idx += 1;
                continue;
            }

            let line_no = *idx + 1;
            let (key, value) = split_entry(content, line_no)?;
            if explicit_keys.contains(&key) {
                return Err(Error::syntax(
                    line_no,
                    format!("duplicate mapping key: '{}'", key),
                ));
            }

            if value.is_empty() {
                // One line of lookahead decides between a nested block
                // and an explicit null.
                let next = *idx + 1;
                let deeper = lines
                    .get(next)
                    .and_then(|l| scan::content_start(l))
                    .filter(|&col| col > cur_indent);
                match deeper {
                    Some(next_indent) => {
                        let starts_dash = lines[next][next_indent..].starts_with('-');
                        *idx += 1;
                        let element = if starts_dash {
                            Element::Seq(self.parse_seq(lines, idx, next_indent)?)
                        } else {
                            Element::Map(self.parse_map(lines, idx, next_indent)?)
                        };
                        map.insert(key.clone(), Item::new(element));
                    }
                    None => {
                        map.insert(key.clone(), Item::new(Element::String(String::new())));
                        *idx += 1;
                    }
                }
                explicit_keys.insert(key);
            } else if scan::is_block_scalar(&value) {
                let style = if value.starts_with('|') { '|' } else { '>' };
                let item = scan::collect_block_scalar(lines, idx, cur_indent, style);
                map.insert(key.clone(), item);
                explicit_keys.insert(key);
            } else if scan::is_anchor(&value) {
                let item = self.parse_anchor(&value, lines, idx, cur_indent)?;
                map.insert(key.clone(), item);
                explicit_keys.insert(key);
            } else if scan::is_merge_key(&key, &value) {
                // Consumes the '<<' line; the key itself is never bound
                // and never counts as explicit.
                self.apply_merge_key(&value, &mut map)?;
                *idx += 1;
            } else if scan::is_alias(&value) {
                map.insert(key.clone(), self.resolve_alias(&value)?);
                explicit_keys.insert(key);
                *idx += 1;
            } else if scan::is_inline_seq(&value) {
                map.insert(key.clone(), scan::parse_inline_seq(&value, line_no)?);
                explicit_keys.insert(key);
                *idx += 1;
            } else if value.starts_with('[') && !value.ends_with(']') {
                return Err(Error::syntax(
                    line_no,
                    "malformed inline sequence: missing closing bracket",
                ));
            } else {
                map.insert(key.clone(), Item::new(parse_scalar(&value)?));
                explicit_keys.insert(key);
                *idx += 1;
            }
        }
        Ok(map)
    }

    /// Parses a block sequence whose `-` lines are indented at least
    /// `indent`.
    ///
    /// Stops at a dedent or at the first non-`-` line. An item followed
    /// by a strictly deeper block is a mapping item; an inline `key: val`
    /// on the `-` line becomes its first pair and wins key collisions
    /// against the deeper block.
    fn parse_seq(&mut self, lines: &[String], idx: &mut usize, indent: usize) -> Result<Sequence> {
        let mut seq = Sequence::new();

        while *idx < lines.len() {
            let line = &lines[*idx];
            let cur_indent = match scan::content_start(line) {
                Some(col) => col,
                None => {
                    *idx += 1;
                    continue;
                }
            };
            let content = &line[cur_indent..];
            if content.starts_with('#') {
                *idx += 1;
                continue;
            }
            if cur_indent < indent || !content.starts_with('-') {
                break;
            }

            let value = scan::trim(&content[1..]).to_string();

            let next = *idx + 1;
            let deeper = lines
                .get(next)
                .and_then(|l| scan::content_start(l))
                .filter(|&col| col > cur_indent);
            if let Some(next_indent) = deeper {
                // The item is a mapping block; a non-empty remainder on
                // the '-' line is its first key-value pair.
                let mut item_map = Mapping::new();
                if let Some(pos) = value.find(':') {
                    let k = scan::trim(&value[..pos]).to_string();
                    let v = scan::trim(&value[pos + 1..]);
                    if !k.is_empty() {
                        item_map.insert(k, Item::new(parse_scalar(v)?));
                    }
                }
                *idx += 1;
                let nested = self.parse_map(lines, idx, next_indent)?;
                for (k, v) in nested {
                    if !item_map.contains_key(&k) {
                        item_map.insert(k, v);
                    }
                }
                seq.push(Item::new(Element::Map(item_map)));
                continue;
            }

            if value.is_empty() {
                seq.push(Item::new(Element::String(String::new())));
            } else if scan::is_inline_seq(&value) {
                seq.push(scan::parse_inline_seq(&value, *idx + 1)?);
            } else {
                seq.push(Item::new(parse_scalar(&value)?));
            }
            *idx += 1;
        }
        Ok(seq)
    }

    /// Parses an anchor definition: binds the following block under the
    /// anchor name and returns it as the anchor line's own value.
    ///
    /// The block is a sequence iff its first non-space content starts
    /// with `-`, and is parsed one indentation step below the anchor
    /// line.
    fn parse_anchor(
        &mut self,
        value: &str,
        lines: &[String],
        idx: &mut usize,
        cur_indent: usize,
    ) -> Result<Item> {
        let name = value[1..].to_string();
        *idx += 1;

        let starts_dash = lines
            .get(*idx)
            .and_then(|l| scan::content_start(l).map(|col| l[col..].starts_with('-')))
            .unwrap_or(false);
        let element = if starts_dash {
            Element::Seq(self.parse_seq(lines, idx, cur_indent + 2)?)
        } else {
            Element::Map(self.parse_map(lines, idx, cur_indent + 2)?)
        };

        let item = Item::new(element);
        self.anchors.insert(name, item.clone());
        Ok(item)
    }

    /// Resolves an alias token to an independent copy of the anchored
    /// value.
    fn resolve_alias(&self, value: &str) -> Result<Item> {
        let name = &value[1..];
        self.anchors
            .get(name)
            .cloned()
            .ok_or_else(|| Error::key(name))
    }

    /// Applies a merge key: copies every entry of the referenced mapping
    /// that is not already present. Existing keys, explicit or inherited
    /// from an earlier merge, are never overwritten.
    fn apply_merge_key(&self, value: &str, map: &mut Mapping) -> Result<()> {
        let name = &value[1..];
        let anchored = self.anchors.get(name).ok_or_else(|| Error::key(name))?;
        let source = match &anchored.value {
            Element::Map(m) => m,
            other => return Err(Error::type_mismatch("mapping", other.type_name())),
        };
        for (k, v) in source.iter() {
            if !map.contains_key(k) {
                map.insert(k.clone(), v.clone());
            }
        }
        Ok(())
    }
}

/// Splits a de-indented mapping line at its first colon.
fn split_entry(content: &str, line: usize) -> Result<(String, String)> {
    let pos = content.find(':').ok_or_else(|| {
        Error::syntax(
            line,
            format!("missing ':' in key-value pair: '{}'", content),
        )
    })?;
    let key = scan::trim(&content[..pos]).to_string();
    let value = scan::trim(&content[pos + 1..]).to_string();
    if key.is_empty() {
        return Err(Error::syntax(line, "empty key in key-value pair"));
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_entry_requires_colon_and_key() {
        assert_eq!(
            split_entry("host: localhost", 1).unwrap(),
            ("host".to_string(), "localhost".to_string())
        );
        assert_eq!(
            split_entry("key:", 3).unwrap(),
            ("key".to_string(), String::new())
        );
        assert!(matches!(
            split_entry("no colon here", 7).unwrap_err(),
            Error::Syntax { line: 7, .. }
        ));
        assert!(matches!(
            split_entry(": value", 2).unwrap_err(),
            Error::Syntax { line: 2, .. }
        ));
    }

    #[test]
    fn root_accessors_enforce_root_kind() {
        let mut parser = YamlParser::new();
        parser.parse_str("- a\n- b\n").unwrap();
        assert!(parser.is_sequence_root());
        assert!(parser.sequence_root().is_ok());
        assert!(matches!(parser.root(), Err(Error::Structure(_))));
        assert!(matches!(parser.get("a"), Err(Error::Structure(_))));

        parser.parse_str("a: 1\n").unwrap();
        assert!(!parser.is_sequence_root());
        assert!(parser.root().is_ok());
        assert!(matches!(parser.sequence_root(), Err(Error::Structure(_))));
    }
}
