//! List component: an unordered list with per-item click callbacks.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::component::{CommonAttrs, Component};
use crate::vdom::{Element, VNode};

/// Callback invoked with an item's index and value.
type ItemClick = Rc<dyn Fn(usize, &str)>;

/// A `<ul>` with one `<li>` per item.
///
/// Items are read at render time, so pushing or replacing items and
/// rendering again shows the new set. When an item-click callback is set,
/// each `<li>` gets its own `click` listener that reports that item's
/// position and value as they were when the tree was built.
///
/// # Examples
///
/// ```
/// use flowdom::component::Component;
/// use flowdom::components::List;
///
/// let mut fruit = List::new(["Apple", "Banana"]);
/// fruit.on_item_click(|index, value| println!("{index}: {value}"));
/// assert_eq!(fruit.render().children().len(), 2);
/// ```
pub struct List {
    items: Vec<String>,
    attrs: CommonAttrs,
    on_item_click: Option<ItemClick>,
}

impl List {
    /// Create a list from items.
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            attrs: CommonAttrs::default(),
            on_item_click: None,
        }
    }

    /// Replace all items.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append an item.
    pub fn push_item(&mut self, item: impl Into<String>) -> &mut Self {
        self.items.push(item.into());
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

    /// Set the item-click callback, replacing any previous one.
    pub fn on_item_click(&mut self, f: impl Fn(usize, &str) + 'static) -> &mut Self {
        self.on_item_click = Some(Rc::new(f));
        self
    }

    /// The current items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn render_item(&self, index: usize, item: &str) -> VNode {
        let mut li = Element::new("li");
        if let Some(callback) = &self.on_item_click {
            let callback = Rc::clone(callback);
            let value = item.to_owned();
            li = li.on("click", move || callback(index, &value));
        }
        li.child(item).into()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("items", &self.items)
            .field("attrs", &self.attrs)
            .field("on_item_click", &self.on_item_click.is_some())
            .finish()
    }
}

impl Component for List {
    fn render(&self) -> VNode {
        self.attrs
            .apply(Element::new("ul"))
            .children(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.render_item(index, item)),
            )
            .into()
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
    use std::cell::RefCell;

    fn click(node: &VNode) {
        node.as_element()
            .unwrap()
            .listeners
            .get("click")
            .unwrap()
            .invoke(None);
    }

    #[test]
    fn renders_ul_with_li_per_item() {
        let node = List::new(["Apple", "Banana", "Cherry"]).render();
        assert_eq!(node.tag(), Some("ul"));
        let items: Vec<_> = node.children().iter().map(VNode::text_content).collect();
        assert_eq!(items, ["Apple", "Banana", "Cherry"]);
        assert!(node.children().iter().all(|li| li.tag() == Some("li")));
    }

    #[test]
    fn empty_list() {
        let node = List::new(Vec::<String>::new()).render();
        assert!(node.children().is_empty());
    }

    #[test]
    fn no_handler_no_listeners() {
        let node = List::new(["a"]).render();
        assert!(node.children()[0].as_element().unwrap().listeners.is_empty());
    }

    #[test]
    fn item_click_reports_index_and_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let mut list = List::new(["Apple", "Banana", "Cherry"]);
        list.on_item_click(move |i, v| s.borrow_mut().push((i, v.to_owned())));
        let node = list.render();
        click(&node.children()[1]);
        click(&node.children()[2]);
        assert_eq!(
            *seen.borrow(),
            vec![(1, "Banana".to_owned()), (2, "Cherry".to_owned())]
        );
    }

    #[test]
    fn items_are_read_at_render_time() {
        let mut list = List::new(["a"]);
        list.push_item("b");
        assert_eq!(list.render().children().len(), 2);
        list.set_items(["x", "y", "z"]);
        assert_eq!(list.items(), ["x", "y", "z"]);
        assert_eq!(list.render().text_content(), "xyz");
    }

    #[test]
    fn common_attributes() {
        let mut list = List::new(["a"]);
        list.set_class("menu").set_id("nav").set_style("list-style: none");
        let node = list.render();
        let el = node.as_element().unwrap();
        assert_eq!(el.attribute("class"), Some("menu"));
        assert_eq!(el.attribute("id"), Some("nav"));
        assert_eq!(el.attribute("style"), Some("list-style: none"));
    }

    #[test]
    fn repeated_render_is_structurally_equal() {
        let mut list = List::new(["a", "b"]);
        list.on_item_click(|_, _| {});
        assert!(list.render().same_structure(&list.render()));
    }
}
