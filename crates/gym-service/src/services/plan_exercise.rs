//! Exercises inside a workout plan
//!
//! Entries have no owner columns of their own; access follows the parent plan.
//! A plan outside the caller's write scope reads as a bad `workout_plan_id`.

use gym_core::entities::WorkoutPlanExercise;
use gym_core::policy::{authorize, Action, EntityKind};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreatePlanExerciseRequest, PaginatedResponse, PlanExerciseResponse, UpdatePlanExerciseRequest,
};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::ServiceResult;

const KIND: EntityKind = EntityKind::WorkoutPlanExercise;

pub struct PlanExerciseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlanExerciseService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List entries, optionally for a single plan
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        workout_plan_id: Option<Snowflake>,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<PlanExerciseResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let entries = self
            .ctx
            .plan_exercise_repo()
            .list(&scope, workout_plan_id, opts.query())
            .await?;
        Ok(opts.page(entries, |e| e.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<PlanExerciseResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let entry = self
            .ctx
            .plan_exercise_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(PlanExerciseResponse::from(entry))
    }

    /// Add an exercise to a plan the caller manages
    #[instrument(skip(self, request), fields(plan_id = %request.workout_plan_id))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreatePlanExerciseRequest,
    ) -> ServiceResult<PlanExerciseResponse> {
        authorize(Action::Create, KIND, &caller)?;
        let access = Access::new(self.ctx, caller);
        let plan = access.writable_plan(request.workout_plan_id).await?;
        access.readable_exercise(request.exercise_id).await?;

        let entry = WorkoutPlanExercise {
            id: self.ctx.generate_id(),
            workout_plan_id: plan.id,
            exercise_id: request.exercise_id,
            sets: request.sets,
            reps: request.reps,
            weight: request.weight,
            rest_time_seconds: request.rest_time_seconds,
            order: request.order,
            notes: request.notes,
        };

        self.ctx.plan_exercise_repo().create(&entry).await?;

        info!(entry_id = %entry.id, plan_id = %plan.id, order = entry.order, "Exercise added to plan");
        Ok(PlanExerciseResponse::from(entry))
    }

    /// The entry stays in its plan; everything else may change
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdatePlanExerciseRequest,
    ) -> ServiceResult<PlanExerciseResponse> {
        let access = Access::new(self.ctx, caller);
        let scope = access.write_scope(Action::Update, KIND)?;
        let mut entry = self
            .ctx
            .plan_exercise_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        if let Some(exercise_id) = request.exercise_id {
            if exercise_id != entry.exercise_id {
                access.readable_exercise(exercise_id).await?;
            }
            entry.exercise_id = exercise_id;
        }
        if let Some(sets) = request.sets {
            entry.sets = sets;
        }
        if let Some(reps) = request.reps {
            entry.reps = reps;
        }
        if let Some(rest) = request.rest_time_seconds {
            entry.rest_time_seconds = rest;
        }
        if let Some(order) = request.order {
            entry.order = order;
        }
        entry.weight = request.weight.or(entry.weight);
        entry.notes = request.notes.or(entry.notes);

        self.ctx.plan_exercise_repo().update(&entry).await?;

        info!(entry_id = %id, "Plan exercise updated");
        Ok(PlanExerciseResponse::from(entry))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .plan_exercise_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.plan_exercise_repo().delete(id).await?;

        info!(entry_id = %id, "Exercise removed from plan");
        Ok(())
    }
}
