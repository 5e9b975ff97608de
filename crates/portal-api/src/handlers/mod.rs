//! Route handlers.
//!
//! Content handlers are generic over the content type; the router
//! instantiates them once per entity.

pub mod admin;
pub mod content;
pub mod health;
pub mod news;
