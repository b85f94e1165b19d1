//! User handlers
//!
//! Admin, trainer and member accounts, including the deleted-account view.

use axum::{extract::State, Json};
use gym_service::dto::{ActorResponse, CreateActorRequest, PaginatedResponse, UpdateActorRequest};
use gym_service::ActorService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List users visible to the caller
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<ActorResponse>>> {
    let service = ActorService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// List soft-deleted users
///
/// GET /users/deleted
pub async fn list_deleted_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<ActorResponse>>> {
    let service = ActorService::new(state.service_context());
    Ok(Json(service.list_deleted(caller, opts).await?))
}

/// Create user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateActorRequest>,
) -> ApiResult<Created<Json<ActorResponse>>> {
    let service = ActorService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// Get user by ID
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<ActorResponse>> {
    let service = ActorService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// Update user
///
/// PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateActorRequest>,
) -> ApiResult<Json<ActorResponse>> {
    let service = ActorService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// Soft-delete user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = ActorService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}

/// Restore a soft-deleted user
///
/// POST /users/{id}/restore
pub async fn restore_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ActorResponse>> {
    let service = ActorService::new(state.service_context());
    Ok(Json(service.restore(caller, id).await?))
}

/// Permanently remove a user
///
/// DELETE /users/{id}/permanent
pub async fn purge_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = ActorService::new(state.service_context());
    service.purge(caller, id).await?;
    Ok(NoContent)
}
