//! Heading component: `<h1>` through `<h6>`.

use std::any::Any;

use crate::component::{CommonAttrs, Component};
use crate::error::ConfigError;
use crate::vdom::{Element, VNode};

/// Valid heading levels.
const LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

/// A section heading.
///
/// The level is validated when set; out-of-range levels are rejected rather
/// than clamped, so a `Heading` always renders a real `h1`..`h6` tag.
///
/// # Examples
///
/// ```
/// use flowdom::component::Component;
/// use flowdom::components::Heading;
///
/// let title = Heading::new(1, "Welcome").unwrap();
/// assert_eq!(title.render().tag(), Some("h1"));
/// assert!(Heading::new(7, "Too deep").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Heading {
    level: u8,
    text: String,
    attrs: CommonAttrs,
}

fn check_level(level: u8) -> Result<u8, ConfigError> {
    if LEVELS.contains(&level) {
        Ok(level)
    } else {
        Err(ConfigError::HeadingLevel(level))
    }
}

impl Heading {
    /// Create a heading of the given level (1..=6).
    pub fn new(level: u8, text: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            level: check_level(level)?,
            text: text.into(),
            attrs: CommonAttrs::default(),
        })
    }

    /// Change the level. On error the current level is kept.
    pub fn set_level(&mut self, level: u8) -> Result<&mut Self, ConfigError> {
        self.level = check_level(level)?;
        Ok(self)
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

    /// The heading level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// The heading text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Heading {
    fn render(&self) -> VNode {
        self.attrs
            .apply(Element::new(format!("h{}", self.level)))
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
