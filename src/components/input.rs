//! Input component: a form `<input>` reporting its value on change.

use std::any::Any;

use crate::component::{CommonAttrs, Component};
use crate::vdom::{Element, EventHandler, VNode};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A text field or other `<input>` control.
///
/// The `type` attribute defaults to `text`. Change and input callbacks receive
/// the value the host reports for the control when the event fires; the
/// component never reads it itself.
///
/// # Examples
///
/// ```
/// use flowdom::component::Component;
/// use flowdom::components::Input;
///
/// let mut email = Input::new();
/// email
///     .set_type("email")
///     .set_placeholder("you@example.com")
///     .on_change(|value| println!("email is now {value}"));
/// let node = email.render();
/// assert_eq!(node.as_element().unwrap().attribute("type"), Some("email"));
/// ```
#[derive(Debug)]
pub struct Input {
    input_type: String,
    attrs: CommonAttrs,
    placeholder: Option<String>,
    value: Option<String>,
    disabled: bool,
    on_change: Option<EventHandler>,
    on_input: Option<EventHandler>,
}

impl Input {
    /// Create a new text input.
    pub fn new() -> Self {
        Self {
            input_type: "text".to_owned(),
            attrs: CommonAttrs::default(),
            placeholder: None,
            value: None,
            disabled: false,
            on_change: None,
            on_input: None,
        }
    }

    /// Set the `type` attribute (`text`, `password`, `email`, ...).
    pub fn set_type(&mut self, input_type: impl Into<String>) -> &mut Self {
        self.input_type = input_type.into();
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

    /// Set the `placeholder` attribute.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the initial `value` attribute. Stringified.
    pub fn set_value(&mut self, value: impl ToString) -> &mut Self {
        self.value = Some(value.to_string());
        self
    }

    /// Enable or disable the control.
    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// Call `f` with the control's value when it fires `change`.
    pub fn on_change(&mut self, f: impl Fn(String) + 'static) -> &mut Self {
        self.on_change = Some(EventHandler::value(f));
        self
    }

    /// Call `f` with the control's value on every `input` event.
    pub fn on_input(&mut self, f: impl Fn(String) + 'static) -> &mut Self {
        self.on_input = Some(EventHandler::value(f));
        self
    }

    /// The configured `type`.
    pub fn input_type(&self) -> &str {
        &self.input_type
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Input {
    fn render(&self) -> VNode {
        let mut el = Element::new("input").attr("type", &self.input_type);
        el = self
            .attrs
            .apply(el)
            .attr_opt("placeholder", self.placeholder.as_deref())
            .attr_opt("value", self.value.as_deref());
        if self.disabled {
            el = el.attr("disabled", "disabled");
        }
        if let Some(handler) = &self.on_change {
            el = el.listener("change", handler.clone());
        }
        if let Some(handler) = &self.on_input {
            el = el.listener("input", handler.clone());
        }
        el.into()
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
