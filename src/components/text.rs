//! Text component: a bare text node.

use std::any::Any;

use crate::component::Component;
use crate::vdom::VNode;

/// Raw text with no wrapping element.
///
/// Useful as a container child when a paragraph would add unwanted markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Create a text component.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Replace the content.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    /// The text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Component for Text {
    fn render(&self) -> VNode {
        VNode::text(self.content.as_str())
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

    #[test]
    fn renders_text_node_itself() {
        let node = Text::new("plain").render();
        assert_eq!(node.as_text(), Some("plain"));
        assert!(node.as_element().is_none());
    }

    #[test]
    fn set_content() {
        let mut t = Text::new("a");
        t.set_content("b");
        assert_eq!(t.content(), "b");
        assert_eq!(t.render().as_text(), Some("b"));
    }
}
