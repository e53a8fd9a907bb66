//! # yamlite
//!
//! A parser and printer for a practical subset of YAML, aimed at
//! configuration files that need typed access without a full YAML 1.2
//! grammar engine.
//!
//! ## What it handles
//!
//! Block mappings and sequences driven by indentation, typed scalars
//! (string/int/double/bool), `#` comments, single- and double-quoted
//! scalars, inline bracketed sequences (with nesting), literal (`|`)
//! and folded (`>`) block scalars, and anchors/aliases/merge keys
//! (`&name`, `*name`, `<<: *name`). See the [`format`] module for the
//! complete description of the accepted subset and its pinned
//! limitations.
//!
//! ## Key Features
//!
//! - **Typed access**: `as_str`/`as_int`/`as_double`/`as_bool` and
//!   friends return `Result`, never panic
//! - **Line-numbered errors**: structural problems report the 1-based
//!   line they were found on
//! - **Anchors and merges**: `<<: *base` inheritance with explicit keys
//!   winning over inherited ones
//! - **Round-trippable**: [`to_yaml_string`] renders a tree back to text
//!   the parser accepts
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use yamlite::YamlParser;
//!
//! let doc = "\
//! server:
//!   host: localhost
//!   port: 8080
//! debug: true
//! ";
//!
//! let mut parser = YamlParser::new();
//! parser.parse_str(doc).unwrap();
//!
//! let server = parser.get("server").unwrap().value.as_map().unwrap();
//! assert_eq!(server.get("host").unwrap().value.as_str().unwrap(), "localhost");
//! assert_eq!(server.get("port").unwrap().value.as_int().unwrap(), 8080);
//! assert!(parser.get("debug").unwrap().value.as_bool().unwrap());
//! ```
//!
//! ### Anchors and merge keys
//!
//! ```rust
//! use yamlite::YamlParser;
//!
//! let doc = "\
//! defaults: &base
//!   timeout: 30
//!   retries: 3
//! service:
//!   <<: *base
//!   timeout: 60
//! ";
//!
//! let mut parser = YamlParser::new();
//! parser.parse_str(doc).unwrap();
//!
//! let service = parser.get("service").unwrap().value.as_map().unwrap();
//! assert_eq!(service.get("timeout").unwrap().value.as_int().unwrap(), 60);
//! assert_eq!(service.get("retries").unwrap().value.as_int().unwrap(), 3);
//! ```
//!
//! ### Building trees with the yaml! macro
//!
//! ```rust
//! use yamlite::{yaml, to_yaml_string, Item};
//!
//! let tree = yaml!({
//!     "name": "alpha",
//!     "replicas": 3,
//!     "tags": ["fast", "beta"]
//! });
//!
//! let text = to_yaml_string(&Item::new(tree));
//! assert_eq!(text, "name: alpha\nreplicas: 3\ntags:\n  - fast\n  - beta\n");
//! ```
//!
//! ## Error Handling
//!
//! All failures surface as [`Error`], one variant per failure kind:
//! file I/O, syntax (with line number), wrong-kind access, missing key
//! or anchor, sequence bounds, numeric overflow, and root-kind misuse.
//! A failed parse leaves the parser in an unspecified state; use a
//! fresh instance afterwards.

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
mod parser;
mod scalar;
mod scan;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::Mapping;
pub use parser::YamlParser;
pub use ser::{to_yaml_string, to_yaml_string_with_indent, write_yaml, write_yaml_with_indent};
pub use value::{Element, Item, Sequence};

use std::path::Path;

/// Parses a YAML document from a string into a single root [`Item`].
///
/// The root is a [`Element::Map`] or [`Element::Seq`] depending on the
/// document. Use [`YamlParser`] directly when you need root-kind checks
/// or keyed access on the parser itself.
///
/// # Errors
///
/// Same failure modes as [`YamlParser::parse_str`].
pub fn parse_str(input: &str) -> Result<Item> {
    let mut parser = YamlParser::new();
    parser.parse_str(input)?;
    Ok(root_item(&parser))
}

/// Parses the YAML file at `path` into a single root [`Item`].
///
/// # Errors
///
/// Same failure modes as [`YamlParser::parse`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Item> {
    let mut parser = YamlParser::new();
    parser.parse(path)?;
    Ok(root_item(&parser))
}

fn root_item(parser: &YamlParser) -> Item {
    if parser.is_sequence_root() {
        // The root-kind check above makes these infallible.
        let seq = parser.sequence_root().cloned().unwrap_or_default();
        Item::new(Element::Seq(seq))
    } else {
        let map = parser.root().cloned().unwrap_or_default();
        Item::new(Element::Map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_str_mapping_root() {
        let item = parse_str("a: 1\nb: two\n").unwrap();
        let map = item.value.as_map().unwrap();
        assert_eq!(map.get("a").unwrap().value.as_int().unwrap(), 1);
        assert_eq!(map.get("b").unwrap().value.as_str().unwrap(), "two");
    }

    #[test]
    fn parse_str_sequence_root() {
        let item = parse_str("- 1\n- 2\n- 3\n").unwrap();
        let seq = item.value.as_seq().unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[2].value.as_int().unwrap(), 3);
    }

    #[test]
    fn parse_file_missing_path_is_file_error() {
        let err = parse_file("/no/such/file.yaml").unwrap_err();
        assert!(matches!(err, Error::File(_)));
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let item = parse_str("").unwrap();
        let map = item.value.as_map().unwrap();
        assert!(map.is_empty());
    }
}
