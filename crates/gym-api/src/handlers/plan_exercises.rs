//! Workout plan exercise handlers
//!
//! Rows inherit visibility from their parent plan.

use axum::{
    extract::{Query, State},
    Json,
};
use gym_core::Snowflake;
use gym_service::dto::{
    CreatePlanExerciseRequest, PaginatedResponse, PlanExerciseResponse, UpdatePlanExerciseRequest,
};
use gym_service::PlanExerciseService;
use serde::Deserialize;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Optional parent plan filter
#[derive(Debug, Default, Deserialize)]
pub struct PlanFilter {
    pub workout_plan_id: Option<String>,
}

impl PlanFilter {
    fn plan_id(&self) -> Result<Option<Snowflake>, ApiError> {
        self.workout_plan_id
            .as_deref()
            .map(|raw| {
                raw.parse()
                    .map_err(|_| ApiError::invalid_query("Invalid workout_plan_id format"))
            })
            .transpose()
    }
}

/// GET /workout-plan-exercises
pub async fn list_plan_exercises(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
    Query(filter): Query<PlanFilter>,
) -> ApiResult<Json<PaginatedResponse<PlanExerciseResponse>>> {
    let service = PlanExerciseService::new(state.service_context());
    Ok(Json(service.list(caller, filter.plan_id()?, opts).await?))
}

/// POST /workout-plan-exercises
pub async fn create_plan_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePlanExerciseRequest>,
) -> ApiResult<Created<Json<PlanExerciseResponse>>> {
    let service = PlanExerciseService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /workout-plan-exercises/{id}
pub async fn get_plan_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<PlanExerciseResponse>> {
    let service = PlanExerciseService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// PATCH /workout-plan-exercises/{id}
pub async fn update_plan_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdatePlanExerciseRequest>,
) -> ApiResult<Json<PlanExerciseResponse>> {
    let service = PlanExerciseService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /workout-plan-exercises/{id}
pub async fn delete_plan_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = PlanExerciseService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_filter_parsing() {
        assert_eq!(PlanFilter::default().plan_id().unwrap(), None);

        let filter = PlanFilter {
            workout_plan_id: Some("42".to_string()),
        };
        assert_eq!(filter.plan_id().unwrap(), Some(Snowflake::new(42)));

        let bad = PlanFilter {
            workout_plan_id: Some("plan".to_string()),
        };
        assert!(matches!(bad.plan_id(), Err(ApiError::InvalidQuery(_))));
    }
}
