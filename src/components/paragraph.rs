//! Paragraph component: text wrapped in `<p>`.

use std::any::Any;

use crate::component::{CommonAttrs, Component};
use crate::vdom::{Element, VNode};

/// A paragraph of text.
#[derive(Debug, Clone)]
pub struct Paragraph {
    text: String,
    attrs: CommonAttrs,
}

impl Paragraph {
    /// Create a paragraph with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attrs: CommonAttrs::default(),
        }
    }

    /// Replace the text.
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

    /// The paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Paragraph {
    fn render(&self) -> VNode {
        self.attrs
            .apply(Element::new("p"))
            .child(self.text.as_str())
            .into()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
