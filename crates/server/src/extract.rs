use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::ApiError;

/// JSON extractor that runs both acceptance phases: serde enforces presence
/// and types, `Validate` enforces field constraints with all violations
/// collected. Either phase failing yields a structured 422 before any
/// handler logic runs.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::body(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
