//! App struct: a root component bound to a host container.
//!
//! [`App`] owns the root component and a [`Renderer`]. Event handlers change
//! component state through shared handles and then call [`App::update`] to
//! rebuild the container's contents.

use crate::component::Component;
use crate::error::RenderError;
use crate::host::Host;
use crate::render::{RenderStats, Renderer};

#[cfg(feature = "web")]
use crate::host::WebHost;

/// Container id used when none is configured.
pub const DEFAULT_CONTAINER_ID: &str = "app";

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Id of the host element the app renders into.
    pub container_id: String,
    /// Filter directive for [`logging::init`](crate::logging::init). `None`
    /// leaves subscriber setup to the caller.
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container id (builder).
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Set the log filter (builder).
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
///
/// Nothing is rendered until the first [`update`](Self::update).
///
/// # Examples
///
/// ```
/// use flowdom::app::{App, AppConfig};
/// use flowdom::components::Paragraph;
/// use flowdom::host::MemoryHost;
///
/// let host = MemoryHost::with_container("app");
/// let mut app = App::new(AppConfig::new(), host.clone(), Paragraph::new("Hello"));
/// app.update().unwrap();
///
/// let root = host.get_element_by_id("app").unwrap();
/// assert_eq!(host.text_content(root), "Hello");
/// ```
pub struct App<H: Host> {
    root: Box<dyn Component>,
    renderer: Renderer<H>,
    config: AppConfig,
}

impl<H: Host> App<H> {
    /// Bind `root` to the configured container of `host`.
    ///
    /// With a `log_filter` set and the `subscriber` feature enabled, a global
    /// subscriber is installed unless one already exists.
    pub fn new(config: AppConfig, host: H, root: impl Component + 'static) -> Self {
        init_logging(&config);
        let renderer = Renderer::mount(host, config.container_id.clone());
        Self {
            root: Box::new(root),
            renderer,
            config,
        }
    }

    /// Re-render the root component into the container.
    pub fn update(&mut self) -> Result<RenderStats, RenderError> {
        self.renderer.render_component(self.root.as_ref())
    }

    /// Empty the container without dropping the root component.
    pub fn unmount(&mut self) -> Result<RenderStats, RenderError> {
        self.renderer.clear()
    }

    /// The root component.
    pub fn root(&self) -> &dyn Component {
        self.root.as_ref()
    }

    /// Mutably borrow the root as its concrete type.
    pub fn root_mut<T: Component + 'static>(&mut self) -> Option<&mut T> {
        self.root.as_any_mut().downcast_mut::<T>()
    }

    /// The renderer bound to the container.
    pub fn renderer(&self) -> &Renderer<H> {
        &self.renderer
    }

    /// The configuration the app was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(feature = "subscriber")]
fn init_logging(config: &AppConfig) {
    if let Some(filter) = &config.log_filter {
        if let Err(err) = crate::logging::init(filter) {
            tracing::debug!(%err, "keeping existing log subscriber");
        }
    }
}

#[cfg(not(feature = "subscriber"))]
fn init_logging(_config: &AppConfig) {}

#[cfg(feature = "web")]
impl App<WebHost> {
    /// Attach to the browser document and render once.
    pub fn launch(config: AppConfig, root: impl Component + 'static) -> Result<Self, RenderError> {
        let host = WebHost::new()?;
        let mut app = Self::new(config, host, root);
        app.update()?;
        Ok(app)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
