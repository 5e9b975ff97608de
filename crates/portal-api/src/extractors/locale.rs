//! Request locale resolution.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;

use portal_core::types::Locale;

use crate::state::AppState;

/// Locale for a request: the `locale` query parameter, then the
/// `Accept-Language` header, then the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
    /// Locale implied by headers alone (`Accept-Language`, then `default`).
    pub fn from_headers(parts: &Parts, default: Locale) -> Locale {
        parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(Locale::from_accept_language)
            .unwrap_or(default)
    }
}

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let fallback = Self::from_headers(parts, state.config.listing.default_locale);
        let locale = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.get("locale").and_then(|v| Locale::parse(v)))
            .unwrap_or(fallback);
        Ok(Self(locale))
    }
}
