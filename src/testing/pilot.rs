//! Pilot: programmatic interaction with a headless renderer.
//!
//! The `Pilot` owns a [`MemoryHost`] with one container and a [`Renderer`]
//! bound to it, and provides methods to render trees, simulate user events
//! (clicks, edits, typing), and serialize the result for snapshot testing.

use crate::app::DEFAULT_CONTAINER_ID;
use crate::component::Component;
use crate::error::{HostError, RenderError};
use crate::host::{MemoryHost, NodeData, NodeId};
use crate::render::{RenderStats, Renderer};
use crate::vdom::VNode;

use super::snapshot;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless render target for testing.
///
/// # Examples
///
/// ```
/// use flowdom::components::Button;
/// use flowdom::testing::Pilot;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let clicks = Rc::new(Cell::new(0));
/// let c = Rc::clone(&clicks);
/// let mut button = Button::new("Go");
/// button.set_id("go").on_click(move || c.set(c.get() + 1));
///
/// let mut pilot = Pilot::new();
/// pilot.render_component(&button).unwrap();
/// pilot.click_id("go");
/// assert_eq!(clicks.get(), 1);
/// assert_eq!(pilot.html(), r#"<button id="go">Go</button>"#);
/// ```
#[derive(Debug)]
pub struct Pilot {
    host: MemoryHost,
    renderer: Renderer<MemoryHost>,
    container: NodeId,
}

impl Pilot {
    /// Create a pilot rendering into a container with the default id.
    pub fn new() -> Self {
        Self::with_container(DEFAULT_CONTAINER_ID)
    }

    /// Create a pilot rendering into a container with the given id.
    pub fn with_container(id: &str) -> Self {
        let host = MemoryHost::new();
        let container = host.create_container(id);
        let renderer = Renderer::mount(host.clone(), id);
        Self {
            host,
            renderer,
            container,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Replace the container's contents with `root`, or empty it.
    pub fn render(&mut self, root: Option<&VNode>) -> Result<RenderStats, RenderError> {
        self.renderer.render(root)
    }

    /// Render a component's current tree.
    pub fn render_component(&mut self, component: &dyn Component) -> Result<RenderStats, RenderError> {
        self.renderer.render_component(component)
    }

    // ── Event simulation ─────────────────────────────────────────────

    /// Fire `click` at `node`. Returns the number of handlers that ran.
    pub fn click(&self, node: NodeId) -> Result<usize, HostError> {
        self.host.dispatch(node, "click")
    }

    /// Fire `click` at the element with the given id, if there is one.
    pub fn click_id(&self, id: &str) -> Option<usize> {
        self.click(self.find_by_id(id)?).ok()
    }

    /// Replace the value of a form element and fire `change`, as committing
    /// an edit would.
    pub fn change(&self, node: NodeId, value: &str) -> Result<usize, HostError> {
        self.host.set_value(node, value)?;
        self.host.dispatch(node, "change")
    }

    /// [`change`](Self::change) the element with the given id, if there is one.
    pub fn change_id(&self, id: &str, value: &str) -> Option<usize> {
        self.change(self.find_by_id(id)?, value).ok()
    }

    /// Append `text` to a form element's value one character at a time,
    /// firing `input` after each. Returns the total handler count.
    pub fn type_text(&self, node: NodeId, text: &str) -> Result<usize, HostError> {
        let mut value = self.value(node).unwrap_or_default();
        let mut fired = 0;
        for ch in text.chars() {
            value.push(ch);
            self.host.set_value(node, &value)?;
            fired += self.host.dispatch(node, "input")?;
        }
        Ok(fired)
    }

    // ── Query ────────────────────────────────────────────────────────

    /// The shared host. Clones see the same document.
    pub fn host(&self) -> &MemoryHost {
        &self.host
    }

    /// The renderer driving the container.
    pub fn renderer(&self) -> &Renderer<MemoryHost> {
        &self.renderer
    }

    /// The container node.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Look up a connected element by id.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.host.get_element_by_id(id)
    }

    /// Elements with the given tag inside the container, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<NodeId> {
        self.host.query_by_tag(self.container, tag)
    }

    /// Current value of a form element.
    pub fn value(&self, node: NodeId) -> Option<String> {
        self.host
            .document()
            .get(node)
            .and_then(NodeData::as_element)
            .and_then(|el| el.current_value())
            .map(str::to_owned)
    }

    /// Concatenated text inside the container.
    pub fn text(&self) -> String {
        self.host.text_content(self.container)
    }

    /// The container's contents as HTML.
    pub fn html(&self) -> String {
        snapshot::inner_html(&self.host, self.container)
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Button, Input, List};
    use crate::vdom::Element;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_mounts_default_container() {
        let pilot = Pilot::new();
        assert!(pilot.renderer().is_mounted());
        assert_eq!(pilot.renderer().container_id(), "app");
        assert_eq!(pilot.find_by_id("app"), Some(pilot.container()));
        assert_eq!(pilot.html(), "");
    }

    #[test]
    fn with_container_uses_given_id() {
        let pilot = Pilot::with_container("root");
        assert_eq!(pilot.find_by_id("root"), Some(pilot.container()));
        assert!(pilot.find_by_id("app").is_none());
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn render_and_clear() {
        let mut pilot = Pilot::new();
        pilot
            .render(Some(&Element::new("p").child("hi").into()))
            .unwrap();
        assert_eq!(pilot.html(), "<p>hi</p>");
        assert_eq!(pilot.text(), "hi");
        pilot.render(None).unwrap();
        assert_eq!(pilot.html(), "");
    }

    #[test]
    fn find_all_is_scoped_to_container() {
        let mut pilot = Pilot::new();
        pilot.render_component(&List::new(["a", "b", "c"])).unwrap();
        assert_eq!(pilot.find_all("li").len(), 3);
        assert!(pilot.find_all("div").is_empty());
    }

    // ── Clicks ───────────────────────────────────────────────────────

    #[test]
    fn click_runs_handler_once() {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let mut button = Button::new("x");
        button.on_click(move || h.set(h.get() + 1));

        let mut pilot = Pilot::new();
        pilot.render_component(&button).unwrap();
        let node = pilot.find_all("button")[0];
        assert_eq!(pilot.click(node), Ok(1));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn click_missing_id() {
        let pilot = Pilot::new();
        assert_eq!(pilot.click_id("nope"), None);
    }

    #[test]
    fn click_on_text_bubbles_to_element() {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let mut button = Button::new("x");
        button.on_click(move || h.set(h.get() + 1));

        let mut pilot = Pilot::new();
        pilot.render_component(&button).unwrap();
        let button_node = pilot.find_all("button")[0];
        let text = pilot.host().children(button_node)[0];
        assert_eq!(pilot.click(text), Ok(1));
        assert_eq!(hits.get(), 1);
    }

    // ── Form input ───────────────────────────────────────────────────

    #[test]
    fn change_delivers_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let mut input = Input::new();
        input.set_id("name").on_change(move |v| s.borrow_mut().push(v));

        let mut pilot = Pilot::new();
        pilot.render_component(&input).unwrap();
        assert_eq!(pilot.change_id("name", "Ada"), Some(1));
        assert_eq!(*seen.borrow(), ["Ada"]);
    }

    #[test]
    fn type_text_fires_input_per_character() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let mut input = Input::new();
        input.set_value("a").on_input(move |v| s.borrow_mut().push(v));

        let mut pilot = Pilot::new();
        pilot.render_component(&input).unwrap();
        let node = pilot.find_all("input")[0];
        assert_eq!(pilot.type_text(node, "bc"), Ok(2));
        assert_eq!(*seen.borrow(), ["ab", "abc"]);
        assert_eq!(pilot.value(node).as_deref(), Some("abc"));
    }

    #[test]
    fn change_on_stale_node_fails() {
        let mut pilot = Pilot::new();
        pilot.render_component(&Input::new()).unwrap();
        let node = pilot.find_all("input")[0];
        pilot.render(None).unwrap();
        assert_eq!(pilot.change(node, "x"), Err(HostError::StaleNode));
    }
}
