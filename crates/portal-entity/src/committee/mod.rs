//! Organizing committee members.

pub mod model;

pub use model::CommitteeMember;
