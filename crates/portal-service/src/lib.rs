//! # portal-service
//!
//! Content use cases for the Assembly Portal. A [`ContentService`] per
//! content type composes list queries, runs them through the pagination
//! engine, and validates management writes before they reach storage.
//!
//! Services follow constructor injection: storage collaborators are
//! provided at construction time via `Arc` references.

pub mod content;
pub mod registry;

pub use content::ContentService;
pub use registry::{ContentServices, ServiceProvider};
