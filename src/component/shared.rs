//! Shared: keep a handle to a component that a container also owns.

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use super::traits::Component;
use crate::vdom::VNode;

/// A reference-counted component handle.
///
/// Add one clone to a [`Container`](crate::components::Container) and keep
/// another in application code (or an event handler) to reconfigure the
/// component between renders.
///
/// ```
/// use flowdom::component::{Component, Shared};
/// use flowdom::components::{Container, List};
///
/// let list = Shared::new(List::new(["a"]));
/// let mut page = Container::new();
/// page.add_child(list.clone());
///
/// list.borrow_mut().push_item("b");
/// assert_eq!(page.render().text_content(), "ab");
/// ```
#[derive(Debug)]
pub struct Shared<C> {
    inner: Rc<RefCell<C>>,
}

impl<C> Shared<C> {
    /// Wrap a component.
    pub fn new(component: C) -> Self {
        Self {
            inner: Rc::new(RefCell::new(component)),
        }
    }

    /// Borrow the component.
    ///
    /// # Panics
    ///
    /// Panics if the component is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, C> {
        self.inner.borrow()
    }

    /// Mutably borrow the component.
    ///
    /// # Panics
    ///
    /// Panics if the component is currently borrowed, e.g. from inside its
    /// own `render`.
    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.inner.borrow_mut()
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Component + 'static> Component for Shared<C> {
    fn render(&self) -> VNode {
        self.inner.borrow().render()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Button, Paragraph};

    #[test]
    fn render_delegates() {
        let shared = Shared::new(Paragraph::new("hello"));
        assert_eq!(shared.render().tag(), Some("p"));
        assert_eq!(shared.render().text_content(), "hello");
    }

    #[test]
    fn clones_see_changes() {
        let shared = Shared::new(Button::new("Go"));
        let handle = shared.clone();
        handle.borrow_mut().set_disabled(true);
        let node = shared.render();
        assert_eq!(node.as_element().unwrap().attribute("disabled"), Some("disabled"));
    }

    #[test]
    fn downcast_to_shared() {
        let boxed: Box<dyn Component> = Box::new(Shared::new(Paragraph::new("x")));
        let shared = boxed.as_any().downcast_ref::<Shared<Paragraph>>().unwrap();
        assert_eq!(shared.borrow().text(), "x");
    }
}
