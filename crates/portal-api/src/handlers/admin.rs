//! Management handlers.
//!
//! Responses carry every locale of every multilingual field, and no
//! public visibility scope is applied.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use portal_core::traits::{Content, Presentation};
use portal_core::types::{DataEnvelope, ListEnvelope};
use portal_service::{ContentServices, ServiceProvider};

use crate::error::ApiError;
use crate::extractors::{JsonBody, ListParams, parse_id};
use crate::state::AppState;

/// GET /api/admin/{segment}
pub async fn list<E>(
    State(state): State<AppState>,
    query: ListParams,
) -> Result<Json<ListEnvelope>, ApiError>
where
    E: Content,
    ContentServices: ServiceProvider<E>,
{
    let service = ServiceProvider::<E>::service(state.services.as_ref());
    let request = service.list_request(&query.params, query.fallback_locale);
    let page = service.list_all(&request).await?;
    Ok(Json(ListEnvelope::from_page(page, &Presentation::AllLocales)))
}

/// GET /api/admin/{segment}/{id}
pub async fn show<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope>, ApiError>
where
    E: Content,
    ContentServices: ServiceProvider<E>,
{
    let id = parse_id(&id)?;
    let entity = ServiceProvider::<E>::service(state.services.as_ref())
        .find(id)
        .await?;
    Ok(Json(DataEnvelope::from_entity(&entity, &Presentation::AllLocales)))
}

/// POST /api/admin/{segment}
pub async fn create<E>(
    State(state): State<AppState>,
    JsonBody(entity): JsonBody<E>,
) -> Result<(StatusCode, Json<DataEnvelope>), ApiError>
where
    E: Content + DeserializeOwned,
    ContentServices: ServiceProvider<E>,
{
    let created = ServiceProvider::<E>::service(state.services.as_ref())
        .create(entity)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::from_entity(&created, &Presentation::AllLocales)),
    ))
}

/// PUT /api/admin/{segment}/{id}
pub async fn update<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(entity): JsonBody<E>,
) -> Result<Json<DataEnvelope>, ApiError>
where
    E: Content + DeserializeOwned,
    ContentServices: ServiceProvider<E>,
{
    let id = parse_id(&id)?;
    let updated = ServiceProvider::<E>::service(state.services.as_ref())
        .update(id, entity)
        .await?;
    Ok(Json(DataEnvelope::from_entity(&updated, &Presentation::AllLocales)))
}

/// DELETE /api/admin/{segment}/{id}
pub async fn delete<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    E: Content,
    ContentServices: ServiceProvider<E>,
{
    let id = parse_id(&id)?;
    ServiceProvider::<E>::service(state.services.as_ref())
        .delete(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
