//! Typed path parameter helpers.

use portal_core::error::AppError;

/// Parses a row id from a path segment.
///
/// Anything that is not a positive integer cannot name a row, so it is
/// reported as not found rather than as a bad request.
pub fn parse_id(segment: &str) -> Result<i64, AppError> {
    segment
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::not_found(format!("No content with id '{segment}'")))
}
