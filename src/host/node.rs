//! Host node types for the in-memory document: NodeId, NodeData.

use slotmap::new_key_type;

use crate::vdom::{Attributes, EventHandler};

new_key_type! {
    /// Unique identifier for a node in a memory document. Copy, lightweight (u64).
    pub struct NodeId;
}

/// A live node in the memory document.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// An element node.
    Element(ElementData),
    /// A text node.
    Text(String),
}

/// State carried by a live element node.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Tag name.
    pub tag: String,
    /// Attributes in the order they were set.
    pub attributes: Attributes,
    /// Attached listeners in attachment order. Like `addEventListener`, the
    /// same event may be bound more than once.
    pub listeners: Vec<(String, EventHandler)>,
    /// Live form value, distinct from the `value` attribute once the user
    /// has edited it.
    pub value: Option<String>,
}

impl ElementData {
    /// Create element data with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Current value: the live value if set, otherwise the `value` attribute.
    pub fn current_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .or_else(|| self.attributes.get("value").map(String::as_str))
    }

    /// Handlers bound to `event`, in attachment order.
    pub fn handlers_for<'a>(&'a self, event: &'a str) -> impl Iterator<Item = &'a EventHandler> {
        self.listeners
            .iter()
            .filter(move |(name, _)| name == event)
            .map(|(_, h)| h)
    }
}

impl NodeData {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create an element node.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(ElementData::new(tag))
    }

    /// Element data, if this is an element.
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Mutable element data, if this is an element.
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Tag name, for elements.
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|el| el.tag.as_str())
    }

    /// Text payload, for text nodes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Attribute value, for elements.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.as_element()?.attributes.get(name).map(String::as_str)
    }

    /// Whether this element has `class` among its space-separated classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}
