//! Class, id, and inline style shared by most built-ins.

use crate::vdom::Element;

/// The `class`, `id`, and `style` settings of a component.
///
/// Built-ins embed one of these rather than inheriting it; unset values are
/// omitted from the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonAttrs {
    /// Value of the `class` attribute.
    pub class: Option<String>,
    /// Value of the `id` attribute.
    pub id: Option<String>,
    /// Value of the `style` attribute.
    pub style: Option<String>,
}

impl CommonAttrs {
    /// Copy the set values onto an element, in class, id, style order.
    pub fn apply(&self, element: Element) -> Element {
        element
            .attr_opt("class", self.class.as_deref())
            .attr_opt("id", self.id.as_deref())
            .attr_opt("style", self.style.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_are_omitted() {
        let el = CommonAttrs::default().apply(Element::new("div"));
        assert!(el.attributes.is_empty());
    }

    #[test]
    fn set_values_are_applied_in_order() {
        let attrs = CommonAttrs {
            class: Some("card".into()),
            id: Some("main".into()),
            style: Some("color: red".into()),
        };
        let el = attrs.apply(Element::new("div"));
        assert_eq!(el.attributes.keys().collect::<Vec<_>>(), ["class", "id", "style"]);
        assert_eq!(el.attribute("style"), Some("color: red"));
    }
}
