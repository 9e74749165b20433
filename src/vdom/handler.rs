//! Event callbacks bound to virtual elements.

use std::fmt;
use std::rc::Rc;

/// A callback attached to an element under an event name.
///
/// Handlers are reference counted so that a virtual tree can be cloned and
/// the same callback attached to a freshly built host node on every render.
/// They are intentionally `!Send`: all dispatch happens on the host's single
/// event loop.
#[derive(Clone)]
pub enum EventHandler {
    /// Invoked with no arguments.
    Plain(Rc<dyn Fn()>),
    /// Invoked with the host-reported current value of the event target
    /// (e.g. the text of an `<input>`). The host extracts the value at
    /// dispatch time.
    Value(Rc<dyn Fn(String)>),
}

impl EventHandler {
    /// Wrap a zero-argument callback.
    pub fn plain(f: impl Fn() + 'static) -> Self {
        Self::Plain(Rc::new(f))
    }

    /// Wrap a callback that receives the target's current value.
    pub fn value(f: impl Fn(String) + 'static) -> Self {
        Self::Value(Rc::new(f))
    }

    /// Whether the host must extract the target value before invoking.
    pub fn wants_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Invoke the handler.
    ///
    /// `value` is ignored by plain handlers. Value handlers receive an empty
    /// string when the host could not report one.
    pub fn invoke(&self, value: Option<&str>) {
        match self {
            Self::Plain(f) => f(),
            Self::Value(f) => f(value.unwrap_or_default().to_owned()),
        }
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("EventHandler::Plain(..)"),
            Self::Value(_) => f.write_str("EventHandler::Value(..)"),
        }
    }
}
