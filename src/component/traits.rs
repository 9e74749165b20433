//! Component trait: produce a virtual node tree.
//!
//! `Component` is the only capability every UI element shares. Built-ins are
//! independent concrete types; there is no base type and no shared state
//! between them. Configuration happens through each type's own `&mut self`
//! setters before (and between) renders.

use std::any::Any;

use crate::vdom::VNode;

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all components.
///
/// `render` builds a fresh tree on every call. It must not change the
/// component's configuration, so two calls with no configuration change in
/// between produce structurally equal trees. It may read state that changes
/// at runtime, such as list items or container children.
///
/// The trait is object safe so containers can hold `Box<dyn Component>`.
pub trait Component {
    /// Describe the component's current appearance.
    fn render(&self) -> VNode;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
