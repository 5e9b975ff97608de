//! Awards and their recipients.

pub mod model;

pub use model::Award;
