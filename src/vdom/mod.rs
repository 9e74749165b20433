//! Virtual node model: text leaves and tagged elements with attributes,
//! event bindings, and owned children.

pub mod handler;
pub mod node;
pub mod props;

pub use handler::EventHandler;
pub use node::{Element, VNode};
pub use props::{Attributes, Listeners, PropMap};
