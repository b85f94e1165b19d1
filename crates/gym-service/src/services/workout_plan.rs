//! Workout plan service

use chrono::Utc;
use gym_core::entities::WorkoutPlan;
use gym_core::policy::{Action, EntityKind, RowOwner};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateWorkoutPlanRequest, PaginatedResponse, UpdateWorkoutPlanRequest, WorkoutPlanResponse,
};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::ServiceResult;

const KIND: EntityKind = EntityKind::WorkoutPlan;

pub struct WorkoutPlanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkoutPlanService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<WorkoutPlanResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let plans = self.ctx.workout_plan_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(plans, |p| p.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<WorkoutPlanResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let plan = self
            .ctx
            .workout_plan_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(WorkoutPlanResponse::from(plan))
    }

    /// Create a plan; the trainer defaults to the caller
    #[instrument(skip(self, request), fields(member_id = %request.member_id))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateWorkoutPlanRequest,
    ) -> ServiceResult<WorkoutPlanResponse> {
        let trainer_id = request.trainer_id.unwrap_or(caller.id);
        Access::new(self.ctx, caller)
            .admit_new(KIND, &RowOwner::new(trainer_id, request.member_id), true)
            .await?;

        let now = Utc::now();
        let plan = WorkoutPlan {
            id: self.ctx.generate_id(),
            trainer_id,
            member_id: request.member_id,
            name: request.name.trim().to_string(),
            description: request.description,
            goal: request.goal,
            day_of_week: request.day_of_week,
            duration_weeks: request.duration_weeks,
            calories_target: request.calories_target,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.ctx.workout_plan_repo().create(&plan).await?;

        info!(plan_id = %plan.id, trainer_id = %trainer_id, goal = %plan.goal, "Workout plan created");
        Ok(WorkoutPlanResponse::from(plan))
    }

    /// Owner columns are fixed once created
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateWorkoutPlanRequest,
    ) -> ServiceResult<WorkoutPlanResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, KIND)?;
        let mut plan = self
            .ctx
            .workout_plan_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        if let Some(name) = request.name {
            plan.name = name.trim().to_string();
        }
        if let Some(description) = request.description {
            plan.description = description;
        }
        if let Some(goal) = request.goal {
            plan.goal = goal;
        }
        if let Some(day) = request.day_of_week {
            plan.day_of_week = day;
        }
        if let Some(weeks) = request.duration_weeks {
            plan.duration_weeks = weeks;
        }
        plan.calories_target = request.calories_target.or(plan.calories_target);
        plan.updated_at = Utc::now();

        self.ctx.workout_plan_repo().update(&plan).await?;

        info!(plan_id = %id, "Workout plan updated");
        Ok(WorkoutPlanResponse::from(plan))
    }

    /// Deactivate
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .workout_plan_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.workout_plan_repo().delete(id).await?;

        info!(plan_id = %id, "Workout plan deactivated");
        Ok(())
    }
}
