//! VNode and Element.

use super::handler::EventHandler;
use super::props::{Attributes, Listeners};

/// One node of a virtual UI tree.
///
/// A virtual tree is a plain description: building one touches no host
/// state, and trees are rebuilt from components on every render rather than
/// kept around and compared.
#[derive(Debug, Clone)]
pub enum VNode {
    /// A text leaf.
    Text(String),
    /// A tagged element with attributes, listeners, and children.
    Element(Element),
}

impl VNode {
    /// Build a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Build an element node from its parts.
    pub fn element(
        tag: impl Into<String>,
        attributes: Attributes,
        listeners: Listeners,
        children: Vec<VNode>,
    ) -> Self {
        Self::Element(Element {
            tag: tag.into(),
            attributes,
            listeners,
            children,
        })
    }

    /// Whether this is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The text payload of a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// The element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Mutable access to the element, if this is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Tag name of an element node.
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|el| el.tag.as_str())
    }

    /// Children of an element node; empty for text.
    pub fn children(&self) -> &[VNode] {
        match self {
            Self::Element(el) => &el.children,
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(VNode::node_count).sum::<usize>()
    }

    /// Compare two trees by shape: tags, attribute sets, bound event names,
    /// text, and child order. Handlers themselves are not compared.
    pub fn same_structure(&self, other: &VNode) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => {
                a.tag == b.tag
                    && a.attributes.len() == b.attributes.len()
                    && a.attributes
                        .iter()
                        .all(|(k, v)| b.attributes.get(k) == Some(v))
                    && a.listeners.len() == b.listeners.len()
                    && a.listeners.keys().all(|k| b.listeners.contains_key(k))
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(x, y)| x.same_structure(y))
            }
            _ => false,
        }
    }
}

impl From<Element> for VNode {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for VNode {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for VNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A tagged element.
///
/// Tag and attribute names are not validated here; the host rejects what it
/// cannot represent when the tree is rendered.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name, passed verbatim to the host.
    pub tag: String,
    /// Attribute name to value.
    pub attributes: Attributes,
    /// Event name to handler. One handler per event name.
    pub listeners: Listeners,
    /// Owned children, in order.
    pub children: Vec<VNode>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an attribute (builder). Values are stringified.
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(name, value.to_string());
        self
    }

    /// Set an attribute only when `value` is `Some` (builder).
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Bind a zero-argument callback to an event (builder).
    pub fn on(mut self, event: impl Into<String>, f: impl Fn() + 'static) -> Self {
        self.listeners.insert(event, EventHandler::plain(f));
        self
    }

    /// Bind a value-receiving callback to an event (builder).
    pub fn on_value(mut self, event: impl Into<String>, f: impl Fn(String) + 'static) -> Self {
        self.listeners.insert(event, EventHandler::value(f));
        self
    }

    /// Bind a prepared handler to an event (builder).
    pub fn listener(mut self, event: impl Into<String>, handler: EventHandler) -> Self {
        self.listeners.insert(event, handler);
        self
    }

    /// Append one child (builder).
    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children (builder).
    pub fn children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn sample() -> VNode {
        Element::new("div")
            .attr("id", "root")
            .attr("class", "box")
            .child(Element::new("p").child("hello"))
            .child(" world")
            .into()
    }

    #[test]
    fn text_node_has_no_children() {
        let node = VNode::text("hi");
        assert!(node.is_text());
        assert_eq!(node.as_text(), Some("hi"));
        assert!(node.children().is_empty());
        assert!(node.tag().is_none());
    }

    #[test]
    fn element_builder() {
        let node = sample();
        let el = node.as_element().unwrap();
        assert_eq!(el.tag, "div");
        assert_eq!(el.attribute("id"), Some("root"));
        assert_eq!(el.attribute("class"), Some("box"));
        assert_eq!(el.children.len(), 2);
        assert_eq!(node.children()[0].tag(), Some("p"));
        assert!(node.children()[1].is_text());
    }

    #[test]
    fn empty_element_is_valid() {
        let node: VNode = Element::new("span").into();
        assert_eq!(node.tag(), Some("span"));
        assert!(node.children().is_empty());
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn direct_construction() {
        let node = VNode::element(
            "ul",
            Attributes::new(),
            Listeners::new(),
            vec![Element::new("li").child("a").into()],
        );
        assert_eq!(node.tag(), Some("ul"));
        assert_eq!(node.node_count(), 3);
    }

    #[test]
    fn attributes_are_stringified() {
        let el = Element::new("input").attr("maxlength", 12).attr("checked", true);
        assert_eq!(el.attribute("maxlength"), Some("12"));
        assert_eq!(el.attribute("checked"), Some("true"));
    }

    #[test]
    fn attr_opt_skips_none() {
        let el = Element::new("div")
            .attr_opt("id", Some("x"))
            .attr_opt("class", None::<&str>);
        assert_eq!(el.attribute("id"), Some("x"));
        assert!(el.attribute("class").is_none());
    }

    #[test]
    fn text_content_in_document_order() {
        assert_eq!(sample().text_content(), "hello world");
    }

    #[test]
    fn node_count_counts_subtree() {
        // div, p, "hello", " world"
        assert_eq!(sample().node_count(), 4);
    }

    #[test]
    fn same_structure_ignores_handler_identity() {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let a: VNode = Element::new("button").on("click", || {}).child("OK").into();
        let b: VNode = Element::new("button")
            .on("click", move || h.set(1))
            .child("OK")
            .into();
        assert!(a.same_structure(&b));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn same_structure_detects_differences() {
        let base: VNode = Element::new("p").attr("class", "a").child("x").into();
        let other_attr: VNode = Element::new("p").attr("class", "b").child("x").into();
        let other_text: VNode = Element::new("p").attr("class", "a").child("y").into();
        let other_event: VNode = Element::new("p")
            .attr("class", "a")
            .on("click", || {})
            .child("x")
            .into();
        assert!(!base.same_structure(&other_attr));
        assert!(!base.same_structure(&other_text));
        assert!(!base.same_structure(&other_event));
        assert!(!base.same_structure(&VNode::text("x")));
    }

    #[test]
    fn clone_shares_handlers() {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let node: VNode = Element::new("button").on("click", move || h.set(h.get() + 1)).into();
        let copy = node.clone();
        for n in [&node, &copy] {
            n.as_element().unwrap().listeners.get("click").unwrap().invoke(None);
        }
        assert_eq!(hits.get(), 2);
    }
}
