//! News items and articles.

pub mod kind;
pub mod model;

pub use kind::NewsKind;
pub use model::News;
