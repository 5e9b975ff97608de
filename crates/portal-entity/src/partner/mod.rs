//! Partners and sponsors.

pub mod model;

pub use model::Partner;
