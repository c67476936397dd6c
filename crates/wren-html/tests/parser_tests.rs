//! Integration tests for the tree builder.

use wren_dom::{DomTree, NodeId, NodeType};
use wren_html::{ParseError, TreeBuilder};

/// Helper to parse HTML and return the tree
fn parse(html: &str) -> Result<DomTree, ParseError> {
    TreeBuilder::new(html.to_string()).run()
}

/// Helper to parse HTML that the test expects to be well-formed
fn parse_ok(html: &str) -> DomTree {
    parse(html).expect("input should parse")
}

/// Helper to get element by tag name (first match, depth-first)
fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.tag_name == tag
    {
        return Some(from);
    }
    for &child_id in tree.children(from) {
        if let Some(found) = find_element(tree, child_id, tag) {
            return Some(found);
        }
    }
    None
}

/// Helper to get text content of a node (concatenated)
fn text_content(tree: &DomTree, id: NodeId) -> String {
    let mut result = String::new();
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Text(data) => result.push_str(data),
            _ => {
                for &child_id in tree.children(id) {
                    result.push_str(&text_content(tree, child_id));
                }
            }
        }
    }
    result
}

#[test]
fn test_valid_document_structure() {
    let tree = parse_ok(
        "<html><head><title>Test Page</title></head><body><div>Content</div></body></html>",
    );

    let html = find_element(&tree, NodeId::ROOT, "html").expect("html present");
    assert_eq!(tree.parent(html), Some(NodeId::ROOT));

    let head = find_element(&tree, html, "head").expect("head present");
    let body = find_element(&tree, html, "body").expect("body present");
    assert_eq!(tree.children(html), &[head, body]);

    let title = find_element(&tree, head, "title").expect("title present");
    assert_eq!(text_content(&tree, title), "Test Page");
    assert_eq!(text_content(&tree, body), "Content");
}

#[test]
fn test_empty_input_is_valid() {
    let tree = parse_ok("");
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_multiple_top_level_nodes() {
    let tree = parse_ok("<div>a</div><div>b</div>");
    assert_eq!(tree.children(NodeId::ROOT).len(), 2);
}

#[test]
fn test_unsupported_opening_tag() {
    match parse("<span>x</span>") {
        Err(ParseError::UnsupportedTag { tag }) => assert_eq!(tag, "span"),
        other => panic!("expected UnsupportedTag, got {other:?}"),
    }
}

#[test]
fn test_unsupported_closing_tag() {
    match parse("<div>x</span>") {
        Err(ParseError::UnsupportedTag { tag }) => assert_eq!(tag, "span"),
        other => panic!("expected UnsupportedTag, got {other:?}"),
    }
}

#[test]
fn test_unsupported_tag_reported_lowercase() {
    match parse("<SPAN>") {
        Err(ParseError::UnsupportedTag { tag }) => assert_eq!(tag, "span"),
        other => panic!("expected UnsupportedTag, got {other:?}"),
    }
}

#[test]
fn test_nesting_mirrors_source() {
    let tree = parse_ok("<table><tr><td>A</td><th>B</th></tr></table>");

    let table = find_element(&tree, NodeId::ROOT, "table").unwrap();
    let tr = find_element(&tree, table, "tr").unwrap();
    assert_eq!(tree.children(table), &[tr]);

    let cells = tree.children(tr);
    assert_eq!(cells.len(), 2);
    assert_eq!(tree.as_element(cells[0]).unwrap().tag_name, "td");
    assert_eq!(tree.as_element(cells[1]).unwrap().tag_name, "th");
    assert_eq!(text_content(&tree, cells[0]), "A");
    assert_eq!(text_content(&tree, cells[1]), "B");
}

#[test]
fn test_sibling_order_preserved() {
    let tree = parse_ok("<div><div>1</div><div>2</div><div>3</div></div>");
    let outer = tree.children(NodeId::ROOT)[0];

    let texts: Vec<String> = tree
        .children(outer)
        .iter()
        .map(|&id| text_content(&tree, id))
        .collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
}

#[test]
fn test_case_normalization() {
    for html in ["<DIV>x</DIV>", "<Div>x</div>", "<div>x</DiV>"] {
        let tree = parse_ok(html);
        let div = tree.children(NodeId::ROOT)[0];
        assert_eq!(tree.as_element(div).unwrap().tag_name, "div");
    }
}

#[test]
fn test_img_is_always_a_leaf() {
    for html in [r#"<img src="x">"#, r#"<img src="x"/>"#, r#"<img src="x" />"#] {
        let tree = parse_ok(html);
        let img = tree.children(NodeId::ROOT)[0];
        let data = tree.as_element(img).unwrap();
        assert_eq!(data.tag_name, "img");
        assert!(tree.children(img).is_empty());
    }
}

#[test]
fn test_img_inside_open_element() {
    // img is never pushed, so body still closes cleanly around it.
    let tree = parse_ok(r#"<body><img src="x"></body>"#);
    let body = tree.children(NodeId::ROOT)[0];
    let img = tree.children(body)[0];
    assert_eq!(tree.as_element(img).unwrap().tag_name, "img");
}

#[test]
fn test_closing_img_is_a_mismatch() {
    match parse("<img></img>") {
        Err(ParseError::MismatchedClose { tag }) => assert_eq!(tag, "img"),
        other => panic!("expected MismatchedClose, got {other:?}"),
    }
}

#[test]
fn test_attribute_fidelity() {
    let tree = parse_ok(r#"<div id="main" class="container" data-test="value"></div>"#);
    let div = tree.children(NodeId::ROOT)[0];
    let attrs = &tree.as_element(div).unwrap().attrs;

    assert_eq!(attrs.len(), 3);
    assert_eq!((attrs[0].name.as_str(), attrs[0].value.as_str()), ("id", "main"));
    assert_eq!(
        (attrs[1].name.as_str(), attrs[1].value.as_str()),
        ("class", "container")
    );
    assert_eq!(
        (attrs[2].name.as_str(), attrs[2].value.as_str()),
        ("data-test", "value")
    );
}

#[test]
fn test_style_attribute_never_stored() {
    let tree = parse_ok(r#"<div style="color:red" id="x"></div>"#);
    let div = tree.children(NodeId::ROOT)[0];
    let data = tree.as_element(div).unwrap();

    assert_eq!(data.attrs.len(), 1);
    assert_eq!(data.attr("id"), Some("x"));
    assert_eq!(data.attr("style"), None);
}

#[test]
fn test_valueless_attribute() {
    let tree = parse_ok("<td nowrap></td>");
    let td = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.as_element(td).unwrap().attr("nowrap"), Some(""));
}

#[test]
fn test_text_is_trimmed_interior_whitespace_kept() {
    let tree = parse_ok("<div>   Hello   World \n</div>");
    let div = tree.children(NodeId::ROOT)[0];
    assert_eq!(text_content(&tree, div), "Hello   World");
}

#[test]
fn test_whitespace_only_text_produces_no_node() {
    let tree = parse_ok("<div>  \n\t  </div>");
    let div = tree.children(NodeId::ROOT)[0];
    assert!(tree.children(div).is_empty());

    let tree = parse_ok("  <div></div>  ");
    assert_eq!(tree.children(NodeId::ROOT).len(), 1);
}

#[test]
fn test_unclosed_element() {
    match parse("<div>Test") {
        Err(ParseError::UnclosedElement) => {}
        other => panic!("expected UnclosedElement, got {other:?}"),
    }
}

#[test]
fn test_overlapping_tags_rejected() {
    match parse("<div><table></div>") {
        Err(err) => assert!(matches!(err, ParseError::MismatchedClose { .. })),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn test_mismatched_close() {
    match parse("<table><tr>x</table></tr>") {
        Err(ParseError::MismatchedClose { tag }) => assert_eq!(tag, "table"),
        other => panic!("expected MismatchedClose, got {other:?}"),
    }
}

#[test]
fn test_close_with_nothing_open() {
    match parse("</div>") {
        Err(ParseError::MismatchedClose { tag }) => assert_eq!(tag, "div"),
        other => panic!("expected MismatchedClose, got {other:?}"),
    }
}

#[test]
fn test_stray_lt_is_inert() {
    // `< b` forms no tag: the scanner skips the `<` and the surrounding
    // runs become separate text nodes.
    let tree = parse_ok("<div>a < b</div>");
    let div = tree.children(NodeId::ROOT)[0];

    let texts: Vec<&str> = tree
        .children(div)
        .iter()
        .filter_map(|&id| tree.as_text(id))
        .collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn test_digit_tag_name_is_unsupported() {
    // `<3 rust` scans as a tag named `3` because a `>` follows later.
    match parse("<div>I <3 rust</div>") {
        Err(ParseError::UnsupportedTag { tag }) => assert_eq!(tag, "3"),
        other => panic!("expected UnsupportedTag, got {other:?}"),
    }
}

#[test]
fn test_self_closing_div_needs_no_closing_tag() {
    let tree = parse_ok("<body><div/><div>x</div></body>");
    let body = tree.children(NodeId::ROOT)[0];
    let children = tree.children(body);

    assert_eq!(children.len(), 2);
    assert!(tree.children(children[0]).is_empty());
    assert_eq!(text_content(&tree, children[1]), "x");
}

#[test]
fn test_parse_is_idempotent() {
    let html = r#"<html><body><div id="a">x</div><img src="y"></body></html>"#;
    let first = parse_ok(html);
    let second = parse_ok(html);
    assert_eq!(first, second);
}
