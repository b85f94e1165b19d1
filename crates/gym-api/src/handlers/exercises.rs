//! Exercise catalogue handlers
//!
//! Any authenticated caller may read the active catalogue; trainers and
//! admins maintain it.

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateExerciseRequest, ExerciseResponse, PaginatedResponse, UpdateExerciseRequest,
};
use gym_service::ExerciseService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /exercises
pub async fn list_exercises(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<ExerciseResponse>>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /exercises
pub async fn create_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateExerciseRequest>,
) -> ApiResult<Created<Json<ExerciseResponse>>> {
    let service = ExerciseService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /exercises/{id}
pub async fn get_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<ExerciseResponse>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// PATCH /exercises/{id}
pub async fn update_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let service = ExerciseService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /exercises/{id}
pub async fn delete_exercise(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = ExerciseService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
