//! Error types: configuration, host, and render failures.

/// A component was configured with a value it cannot represent.
///
/// Raised at configuration time, never deferred to render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Heading levels map to `h1`..`h6`.
    #[error("heading level {0} is outside 1..=6")]
    HeadingLevel(u8),
}

/// A host document refused or could not perform an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// No document is reachable (e.g. not running inside a browser).
    #[error("host document is not available")]
    DomUnavailable,
    /// The node handle no longer refers to a live host node.
    #[error("host node no longer exists")]
    StaleNode,
    /// An element-only operation was applied to a text node.
    #[error("operation requires an element node")]
    NotAnElement,
    /// The insertion would make a node its own ancestor.
    #[error("node cannot be inserted here")]
    Hierarchy,
    /// The host rejected a tag, attribute, or event name.
    #[error("invalid {kind} name `{name}`")]
    InvalidName {
        /// What kind of name was rejected ("tag", "attribute", "event").
        kind: &'static str,
        /// The rejected name, verbatim.
        name: String,
    },
    /// An exception raised by the JavaScript host.
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// A render call could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The container identifier given at mount did not resolve.
    #[error("container `{0}` not found in host document")]
    ContainerNotFound(String),
    /// A host failure that affects the container itself.
    #[error(transparent)]
    Host(#[from] HostError),
}
