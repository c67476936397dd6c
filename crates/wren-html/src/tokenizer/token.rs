use wren_dom::Attribute;

/// A tag recognized at the scan position.
///
/// The scanner produces exactly two shapes; plain text is everything the
/// scanner does not claim. Tag names are reported lower-cased but are not
/// yet validated against the whitelist - that is the tree builder's job,
/// so that an unknown name can be classified as an error rather than
/// silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagToken {
    /// An opening tag: `<name ...>` or `<name ... />`.
    Open {
        /// Tag name, lower-cased, not yet whitelist-checked.
        name: String,
        /// Attributes in source order, `style` already filtered out.
        attrs: Vec<Attribute>,
        /// True when the tag ends in `/>`.
        self_closing: bool,
        /// Bytes of source consumed by the whole tag, `<` through `>`.
        len: usize,
    },
    /// A closing tag: `</name>`, whitespace before `>` tolerated.
    Close {
        /// Tag name, lower-cased, not yet whitelist-checked.
        name: String,
        /// Bytes of source consumed by the whole tag.
        len: usize,
    },
}

impl TagToken {
    /// The tag name, lower-cased.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Open { name, .. } | Self::Close { name, .. } => name,
        }
    }

    /// Bytes of source this token consumed.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        match self {
            Self::Open { len, .. } | Self::Close { len, .. } => *len,
        }
    }
}
