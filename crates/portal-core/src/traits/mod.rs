//! Core traits defined in `portal-core` and implemented by other crates.

pub mod content;
pub mod store;

pub use content::{Content, Presentation, Resource};
pub use store::ContentStore;
