//! Tree construction for the restricted-HTML parser.
//!
//! The builder drives the tag scanner over the buffer in a single forward
//! pass, maintains the stack of open elements, and assembles the arena
//! tree; the renderer dumps a finished tree line by line.

/// The tree-building scan loop.
pub mod core;
/// Line-oriented tree rendering.
pub mod render;

pub use core::TreeBuilder;
pub use render::{print_tree, render_tree};
