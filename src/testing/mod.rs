//! Headless testing helpers: Pilot, HTML snapshots.
//!
//! Use the [`Pilot`] to render into an in-memory container and simulate user
//! events. Use [`to_html`] and [`inner_html`] to capture host subtrees as text
//! for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{inner_html, to_html};
