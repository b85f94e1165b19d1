//! BMI recommendation handler

use axum::{
    extract::{Query, State},
    Json,
};
use gym_service::dto::{BmiQuery, RecommendationResponse};
use gym_service::RecommendationService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Classify the caller's BMI and recommend plans, nutrition and exercises
///
/// GET /bmi/recommendations?weight=<kg>&height=<cm>
pub async fn recommendations(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    query: Result<Query<BmiQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<RecommendationResponse>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let service = RecommendationService::new(state.service_context());
    Ok(Json(service.recommend(caller, query).await?))
}
