//! The document facade.
//!
//! Owns the raw source buffer, triggers a parse, and exposes the resulting
//! top-level nodes together with a coarse validity flag. The specific
//! failure reason is returned to the caller as a
//! [`ParseError`](crate::ParseError), so the flag is never the only signal.

use std::fs;
use std::path::Path;

use wren_common::warning::clear_warnings;
use wren_dom::{DomTree, NodeId};

use crate::error::Result;
use crate::parser::{TreeBuilder, render_tree};

/// A restricted-HTML document: source buffer, parsed tree, validity flag.
///
/// Created empty and invalid; loading replaces the buffer and reparses in
/// place. A failed load clears any previously loaded content - the facade
/// never exposes stale children alongside `is_valid == false`.
#[derive(Debug, Clone)]
pub struct Document {
    /// The raw source the tree was parsed from.
    source: String,

    /// The parsed tree. Root-only whenever the document is invalid.
    tree: DomTree,

    /// Whether the last load parsed cleanly.
    is_valid: bool,
}

impl Document {
    /// Create an empty, invalid document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: String::new(),
            tree: DomTree::new(),
            is_valid: false,
        }
    }

    /// Load and parse an in-memory HTML string.
    ///
    /// On success the document's children become the parsed top-level
    /// nodes and the validity flag is set. On failure the document is
    /// reset to empty-and-invalid before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ParseError`](crate::ParseError) from the
    /// tree builder.
    pub fn load_str(&mut self, html: &str) -> Result<()> {
        clear_warnings();
        self.source = html.to_string();

        match TreeBuilder::new(html.to_string()).run() {
            Ok(tree) => {
                self.tree = tree;
                self.is_valid = true;
                Ok(())
            }
            Err(err) => {
                self.tree = DomTree::new();
                self.is_valid = false;
                Err(err)
            }
        }
    }

    /// Read a file in full and parse its contents.
    ///
    /// The read happens once, up front, outside the scan loop.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`](crate::ParseError::Io) when the file is
    /// missing or unreadable,
    /// otherwise whatever [`Document::load_str`] returns.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let html = fs::read_to_string(path)?;
        self.load_str(&html)
    }

    /// Reset the document to empty and invalid, dropping any loaded tree.
    pub fn clear(&mut self) {
        self.source.clear();
        self.tree = DomTree::new();
        self.is_valid = false;
    }

    /// Whether the last load parsed cleanly.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The raw source of the last load attempt.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tree. Root-only when the document is invalid.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The top-level nodes of the document, in source order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        self.tree.children(self.tree.root())
    }

    /// Render the document as a line-oriented text dump.
    ///
    /// An invalid or empty document renders a single notice line instead.
    #[must_use]
    pub fn to_text(&self) -> String {
        if !self.is_valid || self.children().is_empty() {
            return String::from("Document is empty or not loaded.\n");
        }
        render_tree(&self.tree)
    }

    /// Print the document to stdout.
    pub fn print(&self) {
        print!("{}", self.to_text());
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
