//! Nutrition plan handlers

use axum::{extract::State, Json};
use gym_service::dto::{
    CreateNutritionPlanRequest, NutritionPlanResponse, PaginatedResponse, UpdateNutritionPlanRequest,
};
use gym_service::NutritionPlanService;

use crate::extractors::{AuthUser, Listing, ResourceId, ValidatedJson, ViewParams};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /nutrition-plans
pub async fn list_nutrition_plans(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Listing(opts): Listing,
) -> ApiResult<Json<PaginatedResponse<NutritionPlanResponse>>> {
    let service = NutritionPlanService::new(state.service_context());
    Ok(Json(service.list(caller, opts).await?))
}

/// POST /nutrition-plans
pub async fn create_nutrition_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateNutritionPlanRequest>,
) -> ApiResult<Created<Json<NutritionPlanResponse>>> {
    let service = NutritionPlanService::new(state.service_context());
    let response = service.create(caller, request).await?;
    Ok(Created(Json(response)))
}

/// GET /nutrition-plans/{id}
pub async fn get_nutrition_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    view: ViewParams,
) -> ApiResult<Json<NutritionPlanResponse>> {
    let service = NutritionPlanService::new(state.service_context());
    Ok(Json(service.get(caller, id, view.include_inactive).await?))
}

/// PATCH /nutrition-plans/{id}
pub async fn update_nutrition_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateNutritionPlanRequest>,
) -> ApiResult<Json<NutritionPlanResponse>> {
    let service = NutritionPlanService::new(state.service_context());
    Ok(Json(service.update(caller, id, request).await?))
}

/// DELETE /nutrition-plans/{id}
pub async fn delete_nutrition_plan(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<NoContent> {
    let service = NutritionPlanService::new(state.service_context());
    service.delete(caller, id).await?;
    Ok(NoContent)
}
