//! News detail, which counts views.

use axum::Json;
use axum::extract::{Path, State};

use portal_core::traits::Presentation;
use portal_core::types::DataEnvelope;

use crate::error::ApiError;
use crate::extractors::{RequestLocale, parse_id};
use crate::state::AppState;

/// GET /api/news/{id}
pub async fn show(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope>, ApiError> {
    let id = parse_id(&id)?;
    let news = state.services.news.show(id).await?;
    Ok(Json(DataEnvelope::from_entity(
        &news,
        &Presentation::Localized(locale),
    )))
}
