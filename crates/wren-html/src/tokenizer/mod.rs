//! Tag scanning module.
//!
//! Recognizes, at a given scan position, whether the upcoming text is an
//! opening tag, a closing tag, or neither, and extracts attributes from
//! opening tags. The scanner reports the exact span it consumed so the
//! tree builder can advance its cursor; when nothing matches, the builder
//! resynchronizes by a single character.

/// Tag shape recognition and attribute parsing.
pub mod scan;
/// Token types produced by the scanner.
pub mod token;

pub use scan::{parse_attributes, scan_tag};
pub use token::TagToken;
