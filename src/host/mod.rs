//! Host documents: the live node trees a renderer materializes into.
//!
//! The [`Host`] trait is the seam between the renderer and whatever owns the
//! real nodes. [`MemoryHost`] is a slotmap-backed document used for headless
//! runs and tests; [`WebHost`](web::WebHost) drives a browser document and is
//! available with the `web` feature.

pub mod document;
pub mod memory;
pub mod node;
pub mod query;
#[cfg(feature = "web")]
pub mod web;

pub use document::Document;
pub use memory::MemoryHost;
pub use node::{ElementData, NodeData, NodeId};
#[cfg(feature = "web")]
pub use web::WebHost;

use std::fmt;

use crate::error::HostError;
use crate::vdom::EventHandler;

/// Operations a renderer needs from a host document.
///
/// Names and values are passed through verbatim; hosts reject what they cannot
/// represent with a [`HostError`].
pub trait Host {
    /// Handle to a live host node.
    type Node: Clone + fmt::Debug;

    /// Look up a connected element by its host-assigned identifier.
    fn resolve(&self, id: &str) -> Option<Self::Node>;

    /// Remove every child of `parent`, along with their listeners.
    fn clear_children(&mut self, parent: &Self::Node) -> Result<(), HostError>;

    /// Create a detached text node.
    fn create_text(&mut self, text: &str) -> Result<Self::Node, HostError>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, HostError>;

    /// Set an attribute on an element.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), HostError>;

    /// Attach a listener so that a native `event` on `node` invokes `handler`.
    ///
    /// The listener lives exactly as long as the node.
    fn add_listener(
        &mut self,
        node: &Self::Node,
        event: &str,
        handler: EventHandler,
    ) -> Result<(), HostError>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Release a detached node that will never be inserted.
    ///
    /// Hosts with garbage-collected nodes can ignore this.
    fn discard(&mut self, _node: &Self::Node) {}
}
