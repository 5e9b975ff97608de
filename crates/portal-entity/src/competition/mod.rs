//! Competitions and their lifecycle status.

pub mod model;
pub mod status;

pub use model::Competition;
pub use status::CompetitionStatus;
