//! Button component: a `<button>` with a text label and click callback.

use std::any::Any;

use crate::component::{CommonAttrs, Component};
use crate::vdom::{Element, EventHandler, VNode};

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A clickable button.
///
/// Renders `<button>` with the label as its only child. The click callback,
/// if any, is bound under `click`. A disabled button carries
/// `disabled="disabled"`; an enabled one has no `disabled` attribute at all,
/// since hosts treat the attribute's presence, not its value, as disabling.
///
/// # Examples
///
/// ```
/// use flowdom::component::Component;
/// use flowdom::components::Button;
///
/// let mut save = Button::new("Save");
/// save.set_class("primary").on_click(|| println!("saved"));
/// assert_eq!(save.render().text_content(), "Save");
/// ```
#[derive(Debug)]
pub struct Button {
    text: String,
    attrs: CommonAttrs,
    disabled: bool,
    on_click: Option<EventHandler>,
}

impl Button {
    /// Create a new button with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attrs: CommonAttrs::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Replace the label.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
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

    /// Enable or disable the button.
    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// Set the click callback, replacing any previous one.
    pub fn on_click(&mut self, f: impl Fn() + 'static) -> &mut Self {
        self.on_click = Some(EventHandler::plain(f));
        self
    }

    /// Return the label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Component for Button {
    fn render(&self) -> VNode {
        let mut el = self.attrs.apply(Element::new("button"));
        if self.disabled {
            el = el.attr("disabled", "disabled");
        }
        if let Some(handler) = &self.on_click {
            el = el.listener("click", handler.clone());
        }
        el.child(self.text.as_str()).into()
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
