//! The fixed whitelist of tags the parser accepts.

use strum_macros::{Display, EnumString, IntoStaticStr};

/// The closed set of supported tag names.
///
/// Recognition is case-insensitive; the canonical form is always
/// lower-case. Any name outside this set is a hard
/// [`UnsupportedTag`](crate::ParseError::UnsupportedTag) error, whether it
/// appears as an opening or a closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tag {
    /// `<html>` - document element.
    Html,
    /// `<head>` - metadata container.
    Head,
    /// `<body>` - document content.
    Body,
    /// `<title>` - document title.
    Title,
    /// `<div>` - generic container.
    Div,
    /// `<table>` - table container.
    Table,
    /// `<tr>` - table row.
    Tr,
    /// `<td>` - table data cell.
    Td,
    /// `<th>` - table header cell.
    Th,
    /// `<img>` - image; always a leaf, never on the open-element stack.
    Img,
}

impl Tag {
    /// Void tags never take children and need no closing tag in source.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Img)
    }

    /// The canonical lower-case name of this tag.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
