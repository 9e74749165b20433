//! Container component: a `<div>` holding child components.
//!
//! Children are owned by the container and rendered in insertion order on
//! every render call; nothing is cached between renders.

use std::any::Any;
use std::fmt;

use crate::component::{CommonAttrs, Component};
use crate::vdom::{Element, VNode};

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A `<div>` wrapping child components.
///
/// # Examples
///
/// ```
/// use flowdom::component::Component;
/// use flowdom::components::{Button, Container, Paragraph};
///
/// let mut page = Container::new();
/// page.set_class("page")
///     .add_child(Paragraph::new("Hello"))
///     .add_child(Button::new("Click me"));
/// assert_eq!(page.render().children().len(), 2);
/// ```
pub struct Container {
    children: Vec<Box<dyn Component>>,
    attrs: CommonAttrs,
}

impl Container {
    /// Create a new empty container.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            attrs: CommonAttrs::default(),
        }
    }

    /// Append a child component.
    pub fn add_child(&mut self, child: impl Component + 'static) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append an already boxed child component.
    pub fn add_boxed(&mut self, child: Box<dyn Component>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Set the `class` attribute.
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.attrs.class = Some(class.into());
        self
    }

    /// Set the `id` attribute.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.attrs.id = Some(id.into());
        self
    }

    /// Set the inline `style` attribute.
    pub fn set_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.attrs.style = Some(style.into());
        self
    }

    /// Borrow the child at `index` as a concrete type.
    pub fn child<T: Component + 'static>(&self, index: usize) -> Option<&T> {
        self.children.get(index)?.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the child at `index` as a concrete type.
    pub fn child_mut<T: Component + 'static>(&mut self, index: usize) -> Option<&mut T> {
        self.children.get_mut(index)?.as_any_mut().downcast_mut::<T>()
    }

    /// Remove all children.
    pub fn clear_children(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    /// The number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("children", &self.children.len())
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl Component for Container {
    fn render(&self) -> VNode {
        self.attrs
            .apply(Element::new("div"))
            .children(self.children.iter().map(|child| child.render()))
            .into()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
