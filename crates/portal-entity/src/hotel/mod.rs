//! Recommended and partner hotels.

pub mod model;

pub use model::Hotel;
