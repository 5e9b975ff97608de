//! # portal-api
//!
//! HTTP API layer for the Assembly Portal built on Axum.
//!
//! Provides the public list/detail endpoints, the management endpoints
//! under `/api/admin`, extractors for list parameters and the request
//! locale, request logging, and the mapping of [`AppError`] kinds onto
//! HTTP status codes.
//!
//! [`AppError`]: portal_core::AppError

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
