//! Nutrition plan service

use chrono::Utc;
use gym_core::entities::NutritionPlan;
use gym_core::policy::{Action, EntityKind, RowOwner};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateNutritionPlanRequest, NutritionPlanResponse, PaginatedResponse,
    UpdateNutritionPlanRequest,
};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::ServiceResult;

const KIND: EntityKind = EntityKind::NutritionPlan;

pub struct NutritionPlanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NutritionPlanService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<NutritionPlanResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let plans = self.ctx.nutrition_plan_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(plans, |p| p.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<NutritionPlanResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let plan = self
            .ctx
            .nutrition_plan_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(NutritionPlanResponse::from(plan))
    }

    /// Create a plan; the trainer defaults to the caller
    #[instrument(skip(self, request), fields(member_id = %request.member_id))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateNutritionPlanRequest,
    ) -> ServiceResult<NutritionPlanResponse> {
        let trainer_id = request.trainer_id.unwrap_or(caller.id);
        Access::new(self.ctx, caller)
            .admit_new(KIND, &RowOwner::new(trainer_id, request.member_id), true)
            .await?;

        let plan = NutritionPlan {
            id: self.ctx.generate_id(),
            trainer_id,
            member_id: request.member_id,
            name: request.name.trim().to_string(),
            description: request.description,
            meal_type: request.meal_type,
            calories: request.calories,
            protein_grams: request.protein_grams,
            carbs_grams: request.carbs_grams,
            fat_grams: request.fat_grams,
            meal_details: request.meal_details,
            is_active: true,
            created_at: Utc::now(),
        };

        self.ctx.nutrition_plan_repo().create(&plan).await?;

        info!(
            plan_id = %plan.id,
            meal_type = %plan.meal_type,
            calories = plan.calories,
            "Nutrition plan created"
        );
        Ok(NutritionPlanResponse::from(plan))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateNutritionPlanRequest,
    ) -> ServiceResult<NutritionPlanResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, KIND)?;
        let mut plan = self
            .ctx
            .nutrition_plan_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        if let Some(name) = request.name {
            plan.name = name.trim().to_string();
        }
        if let Some(description) = request.description {
            plan.description = description;
        }
        if let Some(meal_type) = request.meal_type {
            plan.meal_type = meal_type;
        }
        if let Some(calories) = request.calories {
            plan.calories = calories;
        }
        if let Some(protein) = request.protein_grams {
            plan.protein_grams = protein;
        }
        if let Some(carbs) = request.carbs_grams {
            plan.carbs_grams = carbs;
        }
        if let Some(fat) = request.fat_grams {
            plan.fat_grams = fat;
        }
        if let Some(details) = request.meal_details {
            plan.meal_details = details;
        }

        self.ctx.nutrition_plan_repo().update(&plan).await?;

        info!(plan_id = %id, "Nutrition plan updated");
        Ok(NutritionPlanResponse::from(plan))
    }

    /// Deactivate
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .nutrition_plan_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.nutrition_plan_repo().delete(id).await?;

        info!(plan_id = %id, "Nutrition plan deactivated");
        Ok(())
    }
}
