//! # flowdom
//!
//! A small virtual-node UI toolkit: components describe their appearance as
//! [`VNode`](vdom::VNode) trees, and a [`Renderer`](render::Renderer) turns
//! those trees into live nodes inside one container of a host document.
//!
//! Rendering is full-subtree replace: every render throws away the
//! container's contents and builds them again. There is no diffing, and
//! listeners live and die with the host nodes they are attached to.
//!
//! ## Core Systems
//!
//! - **[`vdom`]**: virtual nodes, ordered attribute and listener maps, event handlers
//! - **[`component`]**: the `Component` trait, shared handles, common attributes
//! - **[`components`]**: built-ins: Button, Input, Heading, Paragraph, Text, Container, List
//! - **[`host`]**: the `Host` trait, an in-memory document, and a browser host (`web` feature)
//! - **[`render`]**: the renderer and per-render statistics
//! - **[`app`]**: a root component bound to a container, with configuration
//! - **[`error`]**: configuration, host, and render errors
//! - **[`logging`]**: subscriber setup (`subscriber` feature)
//! - **[`testing`]**: headless `Pilot` and HTML snapshot helpers
//!
//! ## Example
//!
//! ```
//! use flowdom::components::{Button, Container, Heading};
//! use flowdom::testing::Pilot;
//!
//! let mut page = Container::new();
//! page.set_class("page")
//!     .add_child(Heading::new(1, "Hello").unwrap())
//!     .add_child(Button::new("Go"));
//!
//! let mut pilot = Pilot::new();
//! pilot.render_component(&page).unwrap();
//! assert_eq!(
//!     pilot.html(),
//!     r#"<div class="page"><h1>Hello</h1><button>Go</button></div>"#
//! );
//! ```

// Data model
pub mod error;
pub mod vdom;

// Component system
pub mod component;
pub mod components;

// Hosts and rendering
pub mod host;
pub mod render;

// Application
pub mod app;
#[cfg(feature = "subscriber")]
pub mod logging;

// Test support
pub mod testing;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use flowdom_macros::html;
