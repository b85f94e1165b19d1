//! Workout session handlers
//!
//! Members record their own sessions; trainers see those of assigned members.

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateWorkoutSessionRequest, PaginatedResponse, UpdateWorkoutSessionRequest, WorkoutSessionResponse,
};
use gym_service::WorkoutSessionService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /workout-sessions
pub async fn list_workout_sessions(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<WorkoutSessionResponse>>> {
    let service = WorkoutSessionService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /workout-sessions
pub async fn create_workout_session(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWorkoutSessionRequest>,
) -> ApiResult<Created<Json<WorkoutSessionResponse>>> {
    let service = WorkoutSessionService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /workout-sessions/{id}
pub async fn get_workout_session(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<WorkoutSessionResponse>> {
    let service = WorkoutSessionService::new(state.service_context());
    Ok(Json(service.get(caller, id).await?))
}

/// PATCH /workout-sessions/{id}
pub async fn update_workout_session(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateWorkoutSessionRequest>,
) -> ApiResult<Json<WorkoutSessionResponse>> {
    let service = WorkoutSessionService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /workout-sessions/{id}
pub async fn delete_workout_session(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = WorkoutSessionService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
