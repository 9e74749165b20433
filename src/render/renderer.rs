//! Renderer: full-subtree replace of a host container.
//!
//! Every [`Renderer::render`] call removes everything under the container and
//! builds the new tree from scratch. No host node is reused, so focus, scroll
//! position and uncommitted input state inside the container are lost on each
//! render. Listeners die with the nodes they were attached to.

use tracing::{debug, error, warn};

use crate::component::Component;
use crate::error::{HostError, RenderError};
use crate::host::Host;
use crate::vdom::{Element, VNode};

// ---------------------------------------------------------------------------
// RenderStats
// ---------------------------------------------------------------------------

/// What a single render call produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Host nodes created and inserted.
    pub nodes: usize,
    /// Listeners attached.
    pub listeners: usize,
    /// Virtual nodes omitted because the host could not build them.
    pub skipped: usize,
}

impl RenderStats {
    fn merge(&mut self, other: RenderStats) {
        self.nodes += other.nodes;
        self.listeners += other.listeners;
        self.skipped += other.skipped;
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Binds virtual trees to one host container.
///
/// The container is resolved once, at construction. The renderer keeps no
/// copy of the last tree it rendered.
///
/// # Examples
///
/// ```
/// use flowdom::host::MemoryHost;
/// use flowdom::render::Renderer;
/// use flowdom::vdom::Element;
///
/// let host = MemoryHost::with_container("app");
/// let mut renderer = Renderer::mount(host.clone(), "app");
/// renderer.render(Some(&Element::new("p").child("hi").into())).unwrap();
///
/// let app = host.get_element_by_id("app").unwrap();
/// assert_eq!(host.text_content(app), "hi");
/// ```
#[derive(Debug)]
pub struct Renderer<H: Host> {
    host: H,
    container_id: String,
    container: Option<H::Node>,
    reported: bool,
}

impl<H: Host> Renderer<H> {
    /// Bind to the container with the given id.
    ///
    /// An unresolved id leaves the renderer unusable: a warning is logged now
    /// and every later [`render`](Self::render) fails with
    /// [`RenderError::ContainerNotFound`].
    pub fn mount(host: H, container_id: impl Into<String>) -> Self {
        let container_id = container_id.into();
        let container = host.resolve(&container_id);
        if container.is_none() {
            warn!(container = %container_id, "container not found; renderer is unusable");
        }
        Self {
            host,
            container_id,
            container,
            reported: false,
        }
    }

    /// Bind to the container with the given id, failing if it does not resolve.
    pub fn try_mount(host: H, container_id: impl Into<String>) -> Result<Self, RenderError> {
        let container_id = container_id.into();
        match host.resolve(&container_id) {
            Some(container) => Ok(Self {
                host,
                container_id,
                container: Some(container),
                reported: false,
            }),
            None => Err(RenderError::ContainerNotFound(container_id)),
        }
    }

    /// Whether the container resolved.
    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    /// The identifier given at mount.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// The resolved container, if any.
    pub fn container(&self) -> Option<&H::Node> {
        self.container.as_ref()
    }

    /// The host this renderer drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// Mutating the container's contents directly is allowed but will be
    /// wiped by the next render.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Replace the container's contents with `root`, or empty it for `None`.
    ///
    /// Runs to completion before returning. Nodes the host cannot build are
    /// left out (see [`RenderStats::skipped`]); their siblings are still
    /// rendered. Only failures that concern the container itself are errors.
    pub fn render(&mut self, root: Option<&VNode>) -> Result<RenderStats, RenderError> {
        let Some(container) = self.container.clone() else {
            if !self.reported {
                error!(container = %self.container_id, "render into unresolved container");
                self.reported = true;
            }
            return Err(RenderError::ContainerNotFound(self.container_id.clone()));
        };

        self.host.clear_children(&container)?;

        let mut stats = RenderStats::default();
        if let Some(root) = root {
            if let Some(node) = self.instantiate(root, &mut stats) {
                if let Err(err) = self.host.append_child(&container, &node) {
                    self.host.discard(&node);
                    return Err(err.into());
                }
            }
        }

        debug!(
            container = %self.container_id,
            nodes = stats.nodes,
            listeners = stats.listeners,
            skipped = stats.skipped,
            "rendered"
        );
        Ok(stats)
    }

    /// Render a component's current tree.
    pub fn render_component(&mut self, component: &dyn Component) -> Result<RenderStats, RenderError> {
        let tree = component.render();
        self.render(Some(&tree))
    }

    /// Empty the container. Same as `render(None)`.
    pub fn clear(&mut self) -> Result<RenderStats, RenderError> {
        self.render(None)
    }

    /// Build the host subtree for `vnode`, or `None` if the host refused it.
    fn instantiate(&mut self, vnode: &VNode, stats: &mut RenderStats) -> Option<H::Node> {
        let built = match vnode {
            VNode::Text(text) => self.host.create_text(text),
            VNode::Element(el) => self.build_element(el, stats),
        };
        match built {
            Ok(node) => {
                stats.nodes += 1;
                Some(node)
            }
            Err(err) => {
                stats.skipped += 1;
                warn!(tag = vnode.tag().unwrap_or("#text"), %err, "omitting node the host could not build");
                None
            }
        }
    }

    fn build_element(&mut self, el: &Element, stats: &mut RenderStats) -> Result<H::Node, HostError> {
        let node = self.host.create_element(&el.tag)?;
        match self.decorate(&node, el) {
            Ok(listeners) => stats.listeners += listeners,
            Err(err) => {
                self.host.discard(&node);
                return Err(err);
            }
        }

        for child in &el.children {
            // Counted into the caller only once the child is actually inserted.
            let mut child_stats = RenderStats::default();
            let Some(child_node) = self.instantiate(child, &mut child_stats) else {
                stats.merge(child_stats);
                continue;
            };
            match self.host.append_child(&node, &child_node) {
                Ok(()) => stats.merge(child_stats),
                Err(err) => {
                    self.host.discard(&child_node);
                    stats.skipped += child_stats.skipped + 1;
                    warn!(parent = %el.tag, %err, "omitting child the host could not insert");
                }
            }
        }
        Ok(node)
    }

    /// Apply attributes and listeners. Returns the number of listeners attached.
    fn decorate(&mut self, node: &H::Node, el: &Element) -> Result<usize, HostError> {
        for (name, value) in el.attributes.iter() {
            self.host.set_attribute(node, name, value)?;
        }
        for (event, handler) in el.listeners.iter() {
            self.host.add_listener(node, event, handler.clone())?;
        }
        Ok(el.listeners.len())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
