//! Error types for YAML parsing and value access.
//!
//! Every failure the crate can produce is a variant of [`Error`]. The
//! taxonomy mirrors the ways a parse or a typed access can go wrong:
//!
//! - **File**: the source file cannot be opened or read
//! - **Syntax**: structural violations, carrying a 1-based line number
//! - **Type**: accessing a value as the wrong kind
//! - **Key**: a missing mapping key or an undefined anchor name
//! - **Index**: out-of-bounds sequence access
//! - **Conversion**: numeric text that overflows its target type
//! - **Structure**: root-kind misuse (map access on a sequence root)
//!
//! All errors are fatal to the current parse call: the engine fails fast
//! at the first violation and performs no partial recovery.
//!
//! ## Examples
//!
//! ```rust
//! use yamlite::{YamlParser, Error};
//!
//! let mut parser = YamlParser::new();
//! match parser.parse_str("key without colon") {
//!     Err(Error::Syntax { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("expected syntax error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// All errors produced by parsing and typed value access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("cannot open or read file: {0}")]
    File(String),

    /// Invalid YAML structure, with a 1-based line number
    #[error("YAML syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// A value was accessed as the wrong kind
    #[error("type error: expected {expected}, found {found}")]
    Type { expected: String, found: String },

    /// Missing mapping key or undefined anchor
    #[error("key not found: '{0}'")]
    Key(String),

    /// Sequence index out of bounds
    #[error("index out of bounds: {index} (sequence size: {size})")]
    Index { index: usize, size: usize },

    /// Numeric text that matched the lexical pattern but overflows
    #[error("cannot convert '{value}' to {target}")]
    Conversion { value: String, target: String },

    /// Root-kind mismatch (e.g. mapping access on a sequence root)
    #[error("structure error: {0}")]
    Structure(String),
}

impl Error {
    /// Creates a syntax error with a 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlite::Error;
    ///
    /// let err = Error::syntax(10, "missing ':' in key-value pair");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a type mismatch error from the expected and actual kind names.
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::Type {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a missing-key error (map key or anchor name).
    pub fn key(name: impl Into<String>) -> Self {
        Error::Key(name.into())
    }

    /// Creates an index-out-of-bounds error.
    pub fn index(index: usize, size: usize) -> Self {
        Error::Index { index, size }
    }

    /// Creates a numeric conversion error for an overflowing token.
    pub fn conversion(value: &str, target: &str) -> Self {
        Error::Conversion {
            value: value.to_string(),
            target: target.to_string(),
        }
    }

    /// Creates a structure error for root-kind misuse.
    pub fn structure(msg: impl Into<String>) -> Self {
        Error::Structure(msg.into())
    }

    /// Creates a file I/O error.
    pub fn file(msg: impl Into<String>) -> Self {
        Error::File(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
