//! Sponsorship packages offered to partners.

pub mod model;

pub use model::PartnerPackage;
