//! Classified errors for document loading and parsing.
//!
//! Every error is fatal to the parse call that raised it: there is no
//! partial result and no recovery. Callers branch on the variant rather
//! than on message text.

use thiserror::Error;

/// The reasons a document can fail to load or parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source file is missing or unreadable.
    #[error("failed to read HTML source: {0}")]
    Io(#[from] std::io::Error),

    /// An opening or closing tag names something outside the whitelist.
    #[error("tag <{tag}> is not supported")]
    UnsupportedTag {
        /// The offending tag name, lower-cased.
        tag: String,
    },

    /// A closing tag does not match the innermost open element. This
    /// includes closing when no element is open at all, and closing `img`,
    /// which is never on the open-element stack.
    #[error("closing tag </{tag}> does not match the innermost open element")]
    MismatchedClose {
        /// The closing tag name, lower-cased.
        tag: String,
    },

    /// End of input was reached with one or more elements still open.
    #[error("unexpected end of input: one or more elements were never closed")]
    UnclosedElement,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ParseError>;
