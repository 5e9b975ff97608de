//! Public list and detail handlers.

use axum::Json;
use axum::extract::{Path, State};

use portal_core::traits::{Content, Presentation};
use portal_core::types::{DataEnvelope, ListEnvelope};
use portal_service::{ContentServices, ServiceProvider};

use crate::error::ApiError;
use crate::extractors::{ListParams, RequestLocale, parse_id};
use crate::state::AppState;

/// GET /api/{segment}
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
    let page = service.list(&request).await?;
    Ok(Json(ListEnvelope::from_page(
        page,
        &Presentation::Localized(request.locale),
    )))
}

/// GET /api/{segment}/{id}
pub async fn show<E>(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope>, ApiError>
where
    E: Content,
    ContentServices: ServiceProvider<E>,
{
    let id = parse_id(&id)?;
    let entity = ServiceProvider::<E>::service(state.services.as_ref())
        .find_public(id)
        .await?;
    Ok(Json(DataEnvelope::from_entity(
        &entity,
        &Presentation::Localized(locale),
    )))
}
