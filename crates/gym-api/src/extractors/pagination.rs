//! Listing and view query parameters

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use gym_core::Snowflake;
use gym_service::ListOptions;
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 50;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Get items after this ID
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    /// Admin full view
    #[serde(default)]
    pub include_inactive: bool,
}

impl TryFrom<ListParams> for ListOptions {
    type Error = ApiError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let after = params
            .after
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'after' cursor format"))
            })
            .transpose()?;

        Ok(ListOptions {
            after,
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            include_inactive: params.include_inactive,
        })
    }
}

/// Validated list options
#[derive(Debug, Clone, Copy)]
pub struct Listing(pub ListOptions);

#[async_trait]
impl<S> FromRequestParts<S> for Listing
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        ListOptions::try_from(params).map(Listing)
    }
}

/// `include_inactive` on single-row reads
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub include_inactive: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for ViewParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ViewParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;
        Ok(params)
    }
}
