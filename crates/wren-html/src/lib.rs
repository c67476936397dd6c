//! Whitelist-restricted HTML parser for the Wren document inspector.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag Scanner** - recognizes opening tags, closing tags, and plain text
//!   at a scan position, with attribute extraction
//! - **Tree Builder** - single forward scan with an explicit stack of open
//!   elements, enforcing the fixed tag whitelist and strict LIFO nesting
//! - **Document Facade** - loads a file or an in-memory string, exposes the
//!   parsed tree, a validity flag, and a line-oriented text rendering
//!
//! Only the tags `html`, `head`, `body`, `title`, `div`, `table`, `tr`,
//! `td`, `th`, and `img` are accepted; anything else is a hard error.
//!
//! # Not Implemented
//!
//! - DOCTYPE, comments, scripting, CSS
//! - Character reference (entity) decoding
//! - Malformed-HTML recovery: the first structural violation aborts the
//!   whole parse

/// Document facade: loading, validity, rendering.
pub mod document;
/// Classified parse errors.
pub mod error;
/// Tree construction and tree rendering.
pub mod parser;
/// The fixed tag whitelist.
pub mod tag;
/// Tag scanning and attribute parsing.
pub mod tokenizer;

pub use document::Document;
pub use error::{ParseError, Result};
pub use parser::{TreeBuilder, print_tree, render_tree};
pub use tag::Tag;
pub use tokenizer::{TagToken, parse_attributes, scan_tag};
