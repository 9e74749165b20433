//! MemoryHost: a shared handle to an in-memory document.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::document::Document;
use super::node::{NodeData, NodeId};
use super::Host;
use crate::error::HostError;
use crate::vdom::EventHandler;

/// A cloneable handle to an in-memory [`Document`].
///
/// Clones share the same document, so a test can keep one handle for
/// inspection and event simulation while a renderer owns another.
///
/// Tag, attribute, and event names are checked the way a browser's
/// `createElement` and `setAttribute` check them: empty names and names
/// containing whitespace or markup characters are rejected.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    doc: Rc<RefCell<Document>>,
}

impl MemoryHost {
    /// Create a host with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host whose body holds a single `div` with the given id.
    pub fn with_container(id: &str) -> Self {
        let host = Self::new();
        host.create_container(id);
        host
    }

    /// Append a `div id="{id}"` to the body and return it.
    pub fn create_container(&self, id: &str) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let mut data = NodeData::element("div");
        if let Some(el) = data.as_element_mut() {
            el.attributes.insert("id", id.to_owned());
        }
        let node = doc.create(data);
        let body = doc.body();
        let appended = doc.append_child(body, node);
        debug_assert!(appended.is_ok(), "fresh container rejected by body: {appended:?}");
        node
    }

    /// Borrow the underlying document for inspection.
    ///
    /// # Panics
    ///
    /// Panics if called while the document is mutably borrowed, i.e. from
    /// inside a render on the same host.
    pub fn document(&self) -> Ref<'_, Document> {
        self.doc.borrow()
    }

    /// Look up a connected element by id.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.doc.borrow().get_element_by_id(id)
    }

    /// Children of a node.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.doc.borrow().children(node).to_vec()
    }

    /// Tag of an element node.
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.doc.borrow().get(node)?.tag().map(str::to_owned)
    }

    /// Payload of a text node.
    pub fn text(&self, node: NodeId) -> Option<String> {
        self.doc.borrow().get(node)?.as_text().map(str::to_owned)
    }

    /// Attribute value of an element.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.doc.borrow().get(node)?.attribute(name).map(str::to_owned)
    }

    /// Concatenated descendant text.
    pub fn text_content(&self, node: NodeId) -> String {
        self.doc.borrow().text_content(node)
    }

    /// Number of listeners attached to a node.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.doc
            .borrow()
            .get(node)
            .and_then(NodeData::as_element)
            .map_or(0, |el| el.listeners.len())
    }

    /// Elements under `root` with the given tag, in document order.
    pub fn query_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.doc.borrow().query_by_tag(root, tag)
    }

    /// Whether the node is still alive.
    pub fn contains(&self, node: NodeId) -> bool {
        self.doc.borrow().contains(node)
    }

    /// Number of live nodes, including the body and detached nodes.
    pub fn node_count(&self) -> usize {
        self.doc.borrow().len()
    }

    /// Set the live value of a form element, as a user edit would.
    pub fn set_value(&self, node: NodeId, value: &str) -> Result<(), HostError> {
        let mut doc = self.doc.borrow_mut();
        let data = doc.get_mut(node).ok_or(HostError::StaleNode)?;
        let el = data.as_element_mut().ok_or(HostError::NotAnElement)?;
        el.value = Some(value.to_owned());
        Ok(())
    }

    /// Fire `event` at `target` and let it bubble to the root.
    ///
    /// Every matching handler on the propagation path runs once, target
    /// first. Value handlers receive the target's current value. The document
    /// is not borrowed while handlers run, so a handler may re-render into
    /// this same host. Returns the number of handlers invoked.
    pub fn dispatch(&self, target: NodeId, event: &str) -> Result<usize, HostError> {
        let (handlers, value) = {
            let doc = self.doc.borrow();
            let data = doc.get(target).ok_or(HostError::StaleNode)?;
            let value = data
                .as_element()
                .and_then(|el| el.current_value())
                .map(str::to_owned);
            let handlers: Vec<EventHandler> = doc
                .bubble_path(target)
                .into_iter()
                .filter_map(|n| doc.get(n).and_then(NodeData::as_element))
                .flat_map(|el| el.handlers_for(event).cloned().collect::<Vec<_>>())
                .collect();
            (handlers, value)
        };

        for handler in &handlers {
            handler.invoke(value.as_deref());
        }
        Ok(handlers.len())
    }
}

/// Whether a browser would accept `name` as a tag or attribute name.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\'' | '/' | '=' | '\0'))
}

impl Host for MemoryHost {
    type Node = NodeId;

    fn resolve(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn clear_children(&mut self, parent: &NodeId) -> Result<(), HostError> {
        self.doc.borrow_mut().clear_children(*parent)
    }

    fn create_text(&mut self, text: &str) -> Result<NodeId, HostError> {
        Ok(self.doc.borrow_mut().create(NodeData::text(text)))
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        if !is_valid_name(tag) {
            return Err(HostError::InvalidName {
                kind: "tag",
                name: tag.to_owned(),
            });
        }
        Ok(self.doc.borrow_mut().create(NodeData::element(tag)))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), HostError> {
        if !is_valid_name(name) {
            return Err(HostError::InvalidName {
                kind: "attribute",
                name: name.to_owned(),
            });
        }
        let mut doc = self.doc.borrow_mut();
        let data = doc.get_mut(*node).ok_or(HostError::StaleNode)?;
        let el = data.as_element_mut().ok_or(HostError::NotAnElement)?;
        el.attributes.insert(name, value.to_owned());
        Ok(())
    }

    fn add_listener(
        &mut self,
        node: &NodeId,
        event: &str,
        handler: EventHandler,
    ) -> Result<(), HostError> {
        if !is_valid_name(event) {
            return Err(HostError::InvalidName {
                kind: "event",
                name: event.to_owned(),
            });
        }
        let mut doc = self.doc.borrow_mut();
        let data = doc.get_mut(*node).ok_or(HostError::StaleNode)?;
        let el = data.as_element_mut().ok_or(HostError::NotAnElement)?;
        el.listeners.push((event.to_owned(), handler));
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
        self.doc.borrow_mut().append_child(*parent, *child)
    }

    fn discard(&mut self, node: &NodeId) {
        self.doc.borrow_mut().remove(*node);
    }
}
