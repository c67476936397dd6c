//! Line-oriented tree rendering for diagnostics.
//!
//! Each element renders as an opening tag on its own line, its children in
//! order, and a closing tag line unless the element is `img`; text nodes
//! render their trimmed content on their own line. No indentation. This is
//! a human-readable dump, not a stable serialization: there is no
//! round-trip guarantee.

use wren_dom::{DomTree, NodeId, NodeType};

/// Render the top-level nodes of a tree to a string.
#[must_use]
pub fn render_tree(tree: &DomTree) -> String {
    let mut out = String::new();
    for &child in tree.children(tree.root()) {
        render_node(tree, child, &mut out);
    }
    out
}

/// Print a tree to stdout.
pub fn print_tree(tree: &DomTree) {
    print!("{}", render_tree(tree));
}

fn render_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        // The root is never passed in; a nested Document node cannot occur.
        NodeType::Document => {}
        NodeType::Element(data) => {
            if data.attrs.is_empty() {
                out.push_str(&format!("<{}>\n", data.tag_name));
            } else {
                let attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|a| format!("{}=\"{}\"", a.name, a.value))
                    .collect();
                out.push_str(&format!("<{} {}>\n", data.tag_name, attrs.join(" ")));
            }

            for &child in tree.children(id) {
                render_node(tree, child, out);
            }

            if data.tag_name != "img" {
                out.push_str(&format!("</{}>\n", data.tag_name));
            }
        }
        NodeType::Text(text) => {
            out.push_str(text);
            out.push('\n');
        }
    }
}
