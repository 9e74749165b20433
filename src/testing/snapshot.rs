//! Snapshot rendering helpers.
//!
//! Serializes a memory host subtree to HTML text for snapshot assertions.
//! Output is deterministic: attributes keep insertion order, listeners and
//! live form values are not shown, and nothing is pretty-printed.

use crate::host::{Document, MemoryHost, NodeData, NodeId};

/// Elements that never have children and are written without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialize `node` and its subtree, like `outerHTML`.
///
/// A stale node serializes to the empty string.
///
/// # Examples
///
/// ```
/// use flowdom::host::MemoryHost;
/// use flowdom::render::Renderer;
/// use flowdom::testing::to_html;
/// use flowdom::vdom::Element;
///
/// let host = MemoryHost::with_container("app");
/// let mut renderer = Renderer::mount(host.clone(), "app");
/// renderer
///     .render(Some(&Element::new("p").attr("class", "x").child("a < b").into()))
///     .unwrap();
///
/// let app = host.get_element_by_id("app").unwrap();
/// assert_eq!(to_html(&host, app), r#"<div id="app"><p class="x">a &lt; b</p></div>"#);
/// ```
pub fn to_html(host: &MemoryHost, node: NodeId) -> String {
    let doc = host.document();
    let mut out = String::new();
    write_node(&doc, node, &mut out);
    out
}

/// Serialize the children of `node`, like `innerHTML`.
pub fn inner_html(host: &MemoryHost, node: NodeId) -> String {
    let doc = host.document();
    let mut out = String::new();
    for &child in doc.children(node) {
        write_node(&doc, child, &mut out);
    }
    out
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    match doc.get(node) {
        Some(NodeData::Text(text)) => escape_into(text, false, out),
        Some(NodeData::Element(el)) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in el.attributes.iter() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                return;
            }
            for &child in doc.children(node) {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
        None => {}
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
