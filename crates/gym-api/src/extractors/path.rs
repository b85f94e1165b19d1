//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use gym_core::Snowflake;

use crate::response::ApiError;

/// The `:id` segment of a resource path
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse::<Snowflake>()
            .map(ResourceId)
            .map_err(|_| ApiError::invalid_path(format!("Invalid id format: {raw}")))
    }
}
