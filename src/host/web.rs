//! WebHost: renders into a browser document through `web-sys`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, Node};

use super::Host;
use crate::error::HostError;
use crate::vdom::EventHandler;

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

/// A host backed by the page's `document`.
#[derive(Debug, Clone)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Bind to `window.document`.
    ///
    /// Fails with [`HostError::DomUnavailable`] outside a browser.
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::DomUnavailable)?;
        let document = window.document().ok_or(HostError::DomUnavailable)?;
        Ok(Self { document })
    }

    /// Bind to an explicit document.
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    /// The bound document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Read `event.target.value`, if the target has a string `value` property.
fn target_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    js_sys::Reflect::get(&target, &JsValue::from_str("value"))
        .ok()?
        .as_string()
}

impl Host for WebHost {
    type Node = Node;

    fn resolve(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Node::from)
    }

    fn clear_children(&mut self, parent: &Node) -> Result<(), HostError> {
        while let Some(child) = parent.first_child() {
            parent.remove_child(&child)?;
        }
        Ok(())
    }

    fn create_text(&mut self, text: &str) -> Result<Node, HostError> {
        Ok(self.document.create_text_node(text).into())
    }

    fn create_element(&mut self, tag: &str) -> Result<Node, HostError> {
        Ok(self.document.create_element(tag)?.into())
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) -> Result<(), HostError> {
        let element = node.dyn_ref::<Element>().ok_or(HostError::NotAnElement)?;
        element.set_attribute(name, value)?;
        Ok(())
    }

    fn add_listener(
        &mut self,
        node: &Node,
        event: &str,
        handler: EventHandler,
    ) -> Result<(), HostError> {
        let wants_value = handler.wants_value();
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            let value = if wants_value { target_value(&event) } else { None };
            handler.invoke(value.as_deref());
        });
        // Ownership of the closure passes to the JS function object, which the
        // node's listener list keeps alive until the node is collected.
        let function: js_sys::Function = closure.into_js_value().unchecked_into();
        node.add_event_listener_with_callback(event, &function)?;
        Ok(())
    }

    fn append_child(&mut self, parent: &Node, child: &Node) -> Result<(), HostError> {
        parent.append_child(child)?;
        Ok(())
    }
}
