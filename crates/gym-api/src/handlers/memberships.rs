//! Membership handlers
//!
//! At most one active membership per member; creating a second active one
//! is rejected as a conflict.

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateMembershipRequest, MembershipResponse, PaginatedResponse, UpdateMembershipRequest,
};
use gym_service::MembershipService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /memberships
pub async fn list_memberships(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<MembershipResponse>>> {
    let service = MembershipService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /memberships
pub async fn create_membership(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMembershipRequest>,
) -> ApiResult<Created<Json<MembershipResponse>>> {
    let service = MembershipService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /memberships/{id}
pub async fn get_membership(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<MembershipResponse>> {
    let service = MembershipService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// PATCH /memberships/{id}
pub async fn update_membership(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateMembershipRequest>,
) -> ApiResult<Json<MembershipResponse>> {
    let service = MembershipService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /memberships/{id}
pub async fn delete_membership(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = MembershipService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
