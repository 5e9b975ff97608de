//! Raw list query parameters.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use tracing::debug;

use portal_core::types::Locale;

use super::locale::RequestLocale;
use crate::state::AppState;

/// Query parameters of a list request, not yet normalized.
///
/// Normalization needs the entity's listing profile, so it happens in the
/// handler once the content type is known. A query string that cannot be
/// decoded is treated as empty.
#[derive(Debug, Clone)]
pub struct ListParams {
    /// Raw `name → value` pairs.
    pub params: HashMap<String, String>,
    /// Locale to use when no valid `locale` parameter is present.
    pub fallback_locale: Locale,
}

impl FromRequestParts<AppState> for ListParams {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let params = match Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => params,
            Err(rejection) => {
                debug!(error = %rejection, "Undecodable query string ignored");
                HashMap::new()
            }
        };

        Ok(Self {
            params,
            fallback_locale: RequestLocale::from_headers(parts, state.config.listing.default_locale),
        })
    }
}
