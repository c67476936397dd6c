use std::str::FromStr;

use wren_common::warning::warn_once;
use wren_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};

use crate::error::{ParseError, Result};
use crate::tag::Tag;
use crate::tokenizer::{TagToken, scan_tag};

/// Builds a document tree from a raw character buffer.
///
/// The builder owns the buffer, an arena tree, and the stack of open
/// elements. The stack is seeded with the arena's Document node, which
/// serves as the synthetic root: top-level siblings hang off it during the
/// scan, and on success it must be the only entry left.
///
/// The scan is a single forward pass with no backtracking. The first
/// violation anywhere - an unsupported tag name, a closing-tag mismatch,
/// or leftover open elements at end of input - aborts the whole parse.
pub struct TreeBuilder {
    /// The raw source buffer.
    source: String,

    /// Arena tree under construction. `NodeId::ROOT` is the synthetic root.
    tree: DomTree,

    /// The stack of open elements, as `NodeId`s into the arena. Always
    /// holds at least the root; `img` is never pushed here.
    open_elements: Vec<NodeId>,

    /// Byte cursor into the source buffer.
    pos: usize,
}

impl TreeBuilder {
    /// Create a builder for the given source buffer.
    #[must_use]
    pub fn new(source: String) -> Self {
        Self {
            source,
            tree: DomTree::new(),
            open_elements: vec![NodeId::ROOT],
            pos: 0,
        }
    }

    /// Run the scan to completion and return the finished tree.
    ///
    /// An empty buffer is valid and yields a tree with zero top-level
    /// nodes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered: [`UnsupportedTag`]
    /// for a name outside the whitelist, [`MismatchedClose`] for a closing
    /// tag that does not match the innermost open element, and
    /// [`UnclosedElement`] when the buffer ends with elements still open.
    ///
    /// [`UnsupportedTag`]: ParseError::UnsupportedTag
    /// [`MismatchedClose`]: ParseError::MismatchedClose
    /// [`UnclosedElement`]: ParseError::UnclosedElement
    pub fn run(mut self) -> Result<DomTree> {
        while self.pos < self.source.len() {
            let next_tag = self.source[self.pos..]
                .find('<')
                .map_or(self.source.len(), |off| self.pos + off);

            self.flush_text(next_tag);
            self.pos = next_tag;
            if self.pos >= self.source.len() {
                break;
            }

            match scan_tag(&self.source[self.pos..]) {
                Some(TagToken::Close { name, len }) => {
                    self.close_element(&name)?;
                    self.pos += len;
                }
                Some(TagToken::Open {
                    name,
                    attrs,
                    self_closing,
                    len,
                }) => {
                    self.open_element(&name, attrs, self_closing)?;
                    self.pos += len;
                }
                None => {
                    warn_once(
                        "HTML",
                        &format!("stray '<' at byte {} forms no tag and was skipped", self.pos),
                    );
                    // '<' is ASCII, so one byte lands on the next char.
                    self.pos += 1;
                }
            }
        }

        if self.open_elements.len() != 1 {
            return Err(ParseError::UnclosedElement);
        }
        Ok(self.tree)
    }

    /// The element new children attach to: the top of the stack.
    fn current_parent(&self) -> NodeId {
        // The stack is seeded with ROOT and the root is never popped.
        self.open_elements.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// Wrap the source span `[pos, end)` in a text node, unless it is
    /// whitespace-only. Content is stored trimmed.
    fn flush_text(&mut self, end: usize) {
        let trimmed = self.source[self.pos..end].trim();
        if trimmed.is_empty() {
            return;
        }
        let text = trimmed.to_string();

        let node = self.tree.alloc(NodeType::Text(text));
        let parent = self.current_parent();
        self.tree.append_child(parent, node);
    }

    /// Handle an opening tag: whitelist check, element construction, and
    /// a push unless the element closes itself.
    fn open_element(&mut self, name: &str, attrs: Vec<Attribute>, self_closing: bool) -> Result<()> {
        let Ok(tag) = Tag::from_str(name) else {
            return Err(ParseError::UnsupportedTag {
                tag: name.to_string(),
            });
        };

        let element = self.tree.alloc(NodeType::Element(ElementData {
            tag_name: tag.name().to_string(),
            attrs,
        }));
        let parent = self.current_parent();
        self.tree.append_child(parent, element);

        // Void tags (img) are leaves regardless of a literal `/` in source.
        if !(self_closing || tag.is_void()) {
            self.open_elements.push(element);
        }
        Ok(())
    }

    /// Handle a closing tag: whitelist check, then a strict LIFO match
    /// against the innermost open element.
    fn close_element(&mut self, name: &str) -> Result<()> {
        if Tag::from_str(name).is_err() {
            return Err(ParseError::UnsupportedTag {
                tag: name.to_string(),
            });
        }

        if self.open_elements.len() <= 1 {
            return Err(ParseError::MismatchedClose {
                tag: name.to_string(),
            });
        }

        let top = self.current_parent();
        let matches_top = self.tree.as_element(top).is_some_and(|e| e.tag_name == name);
        if !matches_top {
            return Err(ParseError::MismatchedClose {
                tag: name.to_string(),
            });
        }

        let _ = self.open_elements.pop();
        Ok(())
    }
}
