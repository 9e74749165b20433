//! Rendering: materialize virtual trees into a host container.

pub mod renderer;

pub use renderer::{RenderStats, Renderer};
