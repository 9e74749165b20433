//! Component system: the render contract, shared handles, common attributes.

pub mod attrs;
pub mod shared;
pub mod traits;

pub use attrs::CommonAttrs;
pub use shared::Shared;
pub use traits::Component;
