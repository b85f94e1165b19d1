//! Workout log handlers

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateWorkoutLogRequest, PaginatedResponse, UpdateWorkoutLogRequest, WorkoutLogResponse,
};
use gym_service::WorkoutLogService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /workout-logs
pub async fn list_workout_logs(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<WorkoutLogResponse>>> {
    let service = WorkoutLogService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /workout-logs
pub async fn create_workout_log(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWorkoutLogRequest>,
) -> ApiResult<Created<Json<WorkoutLogResponse>>> {
    let service = WorkoutLogService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /workout-logs/{id}
pub async fn get_workout_log(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<WorkoutLogResponse>> {
    let service = WorkoutLogService::new(state.service_context());
    Ok(Json(service.get(caller, id).await?))
}

/// PATCH /workout-logs/{id}
pub async fn update_workout_log(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateWorkoutLogRequest>,
) -> ApiResult<Json<WorkoutLogResponse>> {
    let service = WorkoutLogService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /workout-logs/{id}
pub async fn delete_workout_log(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = WorkoutLogService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
