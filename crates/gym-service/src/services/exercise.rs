//! Exercise catalog service

use chrono::Utc;
use gym_core::entities::Exercise;
use gym_core::policy::{Action, EntityKind, RowOwner};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateExerciseRequest, ExerciseResponse, PaginatedResponse, UpdateExerciseRequest};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::ServiceResult;

const KIND: EntityKind = EntityKind::Exercise;

pub struct ExerciseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExerciseService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<ExerciseResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let exercises = self.ctx.exercise_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(exercises, |e| e.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<ExerciseResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let exercise = self
            .ctx
            .exercise_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(ExerciseResponse::from(exercise))
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateExerciseRequest,
    ) -> ServiceResult<ExerciseResponse> {
        Access::new(self.ctx, caller)
            .admit_new(KIND, &RowOwner::none(), true)
            .await?;

        let exercise = Exercise {
            id: self.ctx.generate_id(),
            name: request.name.trim().to_string(),
            category: request.category,
            description: request.description,
            instructions: request.instructions,
            muscle_groups: request.muscle_groups,
            equipment_needed: request.equipment_needed,
            difficulty_level: request.difficulty_level,
            calories_per_minute: request.calories_per_minute,
            exercise_image: request.exercise_image,
            video_url: request.video_url,
            is_active: true,
            created_at: Utc::now(),
        };

        self.ctx.exercise_repo().create(&exercise).await?;

        info!(exercise_id = %exercise.id, category = %exercise.category, "Exercise created");
        Ok(ExerciseResponse::from(exercise))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateExerciseRequest,
    ) -> ServiceResult<ExerciseResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, KIND)?;
        let mut exercise = self
            .ctx
            .exercise_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        if let Some(name) = request.name {
            exercise.name = name.trim().to_string();
        }
        if let Some(category) = request.category {
            exercise.category = category;
        }
        if let Some(muscle_groups) = request.muscle_groups {
            exercise.muscle_groups = muscle_groups;
        }
        if let Some(difficulty) = request.difficulty_level {
            exercise.difficulty_level = difficulty;
        }
        exercise.description = request.description.or(exercise.description);
        exercise.instructions = request.instructions.or(exercise.instructions);
        exercise.equipment_needed = request.equipment_needed.or(exercise.equipment_needed);
        exercise.calories_per_minute = request.calories_per_minute.or(exercise.calories_per_minute);
        exercise.exercise_image = request.exercise_image.or(exercise.exercise_image);
        exercise.video_url = request.video_url.or(exercise.video_url);

        self.ctx.exercise_repo().update(&exercise).await?;

        info!(exercise_id = %id, "Exercise updated");
        Ok(ExerciseResponse::from(exercise))
    }

    /// Deactivate; the exercise leaves the catalog for everyone but admins
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .exercise_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.exercise_repo().delete(id).await?;

        info!(exercise_id = %id, "Exercise deactivated");
        Ok(())
    }
}
