//! # portal-core
//!
//! Core crate for the Assembly Portal content backend. Contains the
//! multilingual text model, the generic query-composition layer (search,
//! filters, sorting, pagination), list request normalization, response
//! envelopes, configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other portal crates.

pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
