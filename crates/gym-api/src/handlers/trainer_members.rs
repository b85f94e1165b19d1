//! Trainer-member link handlers

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateTrainerLinkRequest, PaginatedResponse, TrainerLinkResponse, UpdateTrainerLinkRequest,
};
use gym_service::TrainerLinkService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /trainer-members
pub async fn list_links(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<TrainerLinkResponse>>> {
    let service = TrainerLinkService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /trainer-members
pub async fn create_link(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTrainerLinkRequest>,
) -> ApiResult<Created<Json<TrainerLinkResponse>>> {
    let service = TrainerLinkService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /trainer-members/{id}
pub async fn get_link(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<TrainerLinkResponse>> {
    let service = TrainerLinkService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// PATCH /trainer-members/{id}
pub async fn update_link(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateTrainerLinkRequest>,
) -> ApiResult<Json<TrainerLinkResponse>> {
    let service = TrainerLinkService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /trainer-members/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = TrainerLinkService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}

/// POST /trainer-members/{id}/restore
pub async fn restore_link(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<TrainerLinkResponse>> {
    let service = TrainerLinkService::new(state.service_context());
    Ok(Json(service.restore(caller, id).await?))
}
