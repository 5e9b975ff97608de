//! # portal-entity
//!
//! Content entity models for the Assembly Portal. Every struct in this
//! crate maps to one database table and implements
//! [`Content`](portal_core::traits::Content): it declares its searchable,
//! sortable and filterable fields and how it is projected onto the wire.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`,
//! `sqlx::FromRow` and `validator::Validate`.

#[macro_use]
mod common;

pub mod award;
pub mod committee;
pub mod competition;
pub mod event;
pub mod hero_slide;
pub mod hotel;
pub mod news;
pub mod partner;
pub mod partner_package;

pub use award::Award;
pub use committee::CommitteeMember;
pub use competition::{Competition, CompetitionStatus};
pub use event::Event;
pub use hero_slide::HeroSlide;
pub use hotel::Hotel;
pub use news::{News, NewsKind};
pub use partner::Partner;
pub use partner_package::PartnerPackage;
