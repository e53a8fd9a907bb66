//! Accepted YAML Subset
//!
//! This module documents the subset of YAML this library parses and
//! prints. It is documentation only; the behavior lives in the parser
//! and serializer modules.
//!
//! # Overview
//!
//! The subset targets configuration files: indentation-structured block
//! mappings and sequences with typed scalars, plus the parts of YAML
//! those files actually use (comments, quoting, block scalars, inline
//! sequences, anchors and merge keys). It is not a YAML 1.2 engine.
//!
//! Input must be UTF-8 text with `\n` or `\r\n` line endings.
//!
//! # Mappings
//!
//! Mapping entries split at the first colon on the line:
//!
//! ```text
//! name: Alice
//! age: 30
//! server:
//!   host: localhost
//!   port: 8080
//! ```
//!
//! **Rules**:
//! - A line without a colon, or with an empty key, is a syntax error
//!   reported with its 1-based line number.
//! - Writing the same key twice in one block is a syntax error. A key
//!   inherited through a merge key may be overridden once explicitly.
//! - An entry with no value on its line starts a nested block if the
//!   next line is indented strictly deeper (a nested sequence when that
//!   line starts with `-`, a nested mapping otherwise); with no deeper
//!   line the value is an empty string, printed back as `null`.
//! - Keys are stored sorted; iteration order is key order, not input
//!   order.
//!
//! # Sequences
//!
//! Block sequences use `- ` items at a shared indentation:
//!
//! ```text
//! servers:
//!   - alpha
//!   - beta
//! ```
//!
//! An item followed by deeper-indented lines is a mapping item; a
//! `key: value` remainder on the `-` line becomes its first entry:
//!
//! ```text
//! - name: alpha
//!   port: 8001
//! - name: beta
//!   port: 8002
//! ```
//!
//! Inline bracketed sequences are supported, including nesting:
//!
//! ```text
//! tags: [a, b, c]
//! grid: [[1, 2], [3, 4]]
//! ```
//!
//! Commas inside quotes or inside nested brackets do not split items.
//! An opening bracket without its closing bracket is a syntax error.
//!
//! # Scalars
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Bool | exactly `true` or `false` | `active: true` |
//! | Int | `-?[0-9]+`, 64-bit signed | `count: 42` |
//! | Double | decimal and/or exponent | `price: 19.99`, `k: 1e-6` |
//! | String | anything else | `name: Alice` |
//! | Null | empty value | `note:` |
//!
//! Classification is tried in that order. Out-of-range integers and
//! doubles are conversion errors, not strings.
//!
//! **Pinned limitations** (kept for compatibility, covered by tests):
//! - Booleans are case-sensitive: `True` and `TRUE` are strings.
//! - There is no dedicated null kind in text form; missing values are
//!   empty strings and print as `null`.
//!
//! # Comments and quoting
//!
//! `#` starts a comment, either on its own line or trailing a value,
//! except inside a quoted scalar. Comment and blank lines never count
//! toward indentation.
//!
//! A scalar wrapped in one matching pair of `'...'` or `"..."` has the
//! quotes stripped and its content kept verbatim; there is no escape
//! processing. `'true'` and `'42'` are strings.
//!
//! # Block scalars
//!
//! `|` keeps line breaks, `>` folds them to spaces:
//!
//! ```text
//! literal: |
//!   line one
//!   line two
//! folded: >
//!   one long
//!   sentence
//! ```
//!
//! `literal` is `"line one\nline two\n"`; `folded` is
//! `"one long sentence"`. The block ends at the first line not indented
//! deeper than the key.
//!
//! # Anchors, aliases, merge keys
//!
//! ```text
//! defaults: &base
//!   timeout: 30
//!   retries: 3
//! service:
//!   <<: *base
//!   timeout: 60
//! ```
//!
//! `&name` binds the following block (a sequence when its first line
//! starts with `-`, a mapping otherwise) in a registry scoped to one
//! parse. `*name` copies the bound value; `<<: *name` copies every
//! entry not already present, so explicit entries win. Aliased values
//! are deep copies, never shared. Referencing an unbound name is a key
//! error; merging from a non-mapping anchor is a type error.
//!
//! # Deliberately unsupported
//!
//! Multi-document streams (`---`), tags (`!!int`), flow mappings
//! (`{a: 1}`), complex keys (`? `), escape sequences inside quotes,
//! and locale-dependent number formats.
