//! Member progress handlers

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateProgressRequest, PaginatedResponse, ProgressResponse, UpdateProgressRequest,
};
use gym_service::ProgressService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /member-progress
pub async fn list_progress_entries(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<ProgressResponse>>> {
    let service = ProgressService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /member-progress
pub async fn create_progress_entry(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProgressRequest>,
) -> ApiResult<Created<Json<ProgressResponse>>> {
    let service = ProgressService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /member-progress/{id}
pub async fn get_progress_entry(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ProgressResponse>> {
    let service = ProgressService::new(state.service_context());
    Ok(Json(service.get(caller, id).await?))
}

/// PATCH /member-progress/{id}
pub async fn update_progress_entry(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateProgressRequest>,
) -> ApiResult<Json<ProgressResponse>> {
    let service = ProgressService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /member-progress/{id}
pub async fn delete_progress_entry(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = ProgressService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
