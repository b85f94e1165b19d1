//! Workout plan handlers

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateWorkoutPlanRequest, PaginatedResponse, UpdateWorkoutPlanRequest, WorkoutPlanResponse,
};
use gym_service::WorkoutPlanService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /workout-plans
pub async fn list_workout_plans(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<WorkoutPlanResponse>>> {
    let service = WorkoutPlanService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /workout-plans
pub async fn create_workout_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWorkoutPlanRequest>,
) -> ApiResult<Created<Json<WorkoutPlanResponse>>> {
    let service = WorkoutPlanService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /workout-plans/{id}
pub async fn get_workout_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<WorkoutPlanResponse>> {
    let service = WorkoutPlanService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// PATCH /workout-plans/{id}
pub async fn update_workout_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateWorkoutPlanRequest>,
) -> ApiResult<Json<WorkoutPlanResponse>> {
    let service = WorkoutPlanService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /workout-plans/{id}
pub async fn delete_workout_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = WorkoutPlanService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
