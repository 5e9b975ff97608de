//! Generic list, detail and management operations.

pub mod news;
pub mod service;

pub use service::ContentService;
