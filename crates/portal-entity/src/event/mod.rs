//! Programme events.

pub mod model;

pub use model::Event;
