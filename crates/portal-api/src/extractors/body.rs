//! JSON request bodies with portal error responses.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use portal_core::error::AppError;

use crate::error::ApiError;

/// Like [`Json`], but a malformed body is reported as a validation error
/// in the standard error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await.map_err(|rejection| {
            AppError::validation(format!("Invalid request body: {}", rejection.body_text()))
        })?;
        Ok(Self(value))
    }
}
