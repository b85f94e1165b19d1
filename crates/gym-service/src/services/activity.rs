//! Member activity records: workout logs, progress measurements and sessions
//!
//! Members write their own records; trainers write records for their assigned
//! members. Deleting removes the row.

use chrono::{DateTime, Utc};
use gym_core::entities::{MemberProgress, WorkoutLog, WorkoutSession};
use gym_core::policy::{Action, EntityKind, RowOwner};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateProgressRequest, CreateWorkoutLogRequest, CreateWorkoutSessionRequest,
    PaginatedResponse, ProgressResponse, UpdateProgressRequest, UpdateWorkoutLogRequest,
    UpdateWorkoutSessionRequest, WorkoutLogResponse, WorkoutSessionResponse,
};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn check_time_order(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> ServiceResult<()> {
    match end {
        Some(end) if end <= start => Err(ServiceError::validation(
            "end_time must be after start_time",
        )),
        _ => Ok(()),
    }
}

// ============================================================================
// Workout Logs
// ============================================================================

pub struct WorkoutLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkoutLogService<'a> {
    const KIND: EntityKind = EntityKind::WorkoutLog;

    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<WorkoutLogResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(Self::KIND, opts.include_inactive);
        let logs = self.ctx.workout_log_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(logs, |l| l.id))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, caller: Caller, id: Snowflake) -> ServiceResult<WorkoutLogResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(Self::KIND, false);
        let log = self
            .ctx
            .workout_log_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;
        Ok(WorkoutLogResponse::from(log))
    }

    /// Record a workout; member defaults to the caller, date to today
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateWorkoutLogRequest,
    ) -> ServiceResult<WorkoutLogResponse> {
        let member_id = request.member_id.unwrap_or(caller.id);
        let access = Access::new(self.ctx, caller);
        access
            .admit_new(Self::KIND, &RowOwner::member(member_id), true)
            .await?;
        if let Some(plan_id) = request.workout_plan_id {
            access.readable_plan(plan_id).await?;
        }
        access.readable_exercise(request.exercise_id).await?;

        let log = WorkoutLog {
            id: self.ctx.generate_id(),
            member_id,
            workout_plan_id: request.workout_plan_id,
            exercise_id: request.exercise_id,
            date: request.date.unwrap_or_else(|| Utc::now().date_naive()),
            sets_completed: request.sets_completed,
            reps_completed: request.reps_completed,
            weight_used: request.weight_used,
            notes: request.notes,
            duration_minutes: request.duration_minutes,
        };

        self.ctx.workout_log_repo().create(&log).await?;

        info!(log_id = %log.id, member_id = %member_id, "Workout logged");
        Ok(WorkoutLogResponse::from(log))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateWorkoutLogRequest,
    ) -> ServiceResult<WorkoutLogResponse> {
        let access = Access::new(self.ctx, caller);
        let scope = access.write_scope(Action::Update, Self::KIND)?;
        let mut log = self
            .ctx
            .workout_log_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;

        if let Some(plan_id) = request.workout_plan_id {
            access.readable_plan(plan_id).await?;
            log.workout_plan_id = Some(plan_id);
        }
        if let Some(exercise_id) = request.exercise_id {
            access.readable_exercise(exercise_id).await?;
            log.exercise_id = exercise_id;
        }
        if let Some(date) = request.date {
            log.date = date;
        }
        if let Some(sets) = request.sets_completed {
            log.sets_completed = sets;
        }
        if let Some(reps) = request.reps_completed {
            log.reps_completed = reps;
        }
        log.weight_used = request.weight_used.or(log.weight_used);
        log.notes = request.notes.or(log.notes);
        log.duration_minutes = request.duration_minutes.or(log.duration_minutes);

        self.ctx.workout_log_repo().update(&log).await?;

        info!(log_id = %id, "Workout log updated");
        Ok(WorkoutLogResponse::from(log))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, Self::KIND)?;
        self.ctx
            .workout_log_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;

        self.ctx.workout_log_repo().delete(id).await?;

        info!(log_id = %id, "Workout log deleted");
        Ok(())
    }
}

// ============================================================================
// Member Progress
// ============================================================================

pub struct ProgressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProgressService<'a> {
    const KIND: EntityKind = EntityKind::MemberProgress;

    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<ProgressResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(Self::KIND, opts.include_inactive);
        let entries = self.ctx.progress_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(entries, |p| p.id))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, caller: Caller, id: Snowflake) -> ServiceResult<ProgressResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(Self::KIND, false);
        let progress = self
            .ctx
            .progress_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;
        Ok(ProgressResponse::from(progress))
    }

    /// Record a measurement taken now
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateProgressRequest,
    ) -> ServiceResult<ProgressResponse> {
        let member_id = request.member_id.unwrap_or(caller.id);
        Access::new(self.ctx, caller)
            .admit_new(Self::KIND, &RowOwner::member(member_id), true)
            .await?;

        let progress = MemberProgress {
            id: self.ctx.generate_id(),
            member_id,
            weight: request.weight,
            body_fat_percentage: request.body_fat_percentage,
            muscle_mass: request.muscle_mass,
            measurements: request.measurements,
            progress_photo: request.progress_photo,
            notes: request.notes,
            recorded_date: Utc::now(),
        };

        self.ctx.progress_repo().create(&progress).await?;

        info!(progress_id = %progress.id, member_id = %member_id, "Progress recorded");
        Ok(ProgressResponse::from(progress))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateProgressRequest,
    ) -> ServiceResult<ProgressResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, Self::KIND)?;
        let mut progress = self
            .ctx
            .progress_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;

        if let Some(weight) = request.weight {
            progress.weight = weight;
        }
        progress.body_fat_percentage = request.body_fat_percentage.or(progress.body_fat_percentage);
        progress.muscle_mass = request.muscle_mass.or(progress.muscle_mass);
        progress.measurements = request.measurements.or(progress.measurements);
        progress.progress_photo = request.progress_photo.or(progress.progress_photo);
        progress.notes = request.notes.or(progress.notes);

        self.ctx.progress_repo().update(&progress).await?;

        info!(progress_id = %id, "Progress updated");
        Ok(ProgressResponse::from(progress))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, Self::KIND)?;
        self.ctx
            .progress_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;

        self.ctx.progress_repo().delete(id).await?;

        info!(progress_id = %id, "Progress entry deleted");
        Ok(())
    }
}

// ============================================================================
// Workout Sessions
// ============================================================================

pub struct WorkoutSessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkoutSessionService<'a> {
    const KIND: EntityKind = EntityKind::WorkoutSession;

    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<WorkoutSessionResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(Self::KIND, opts.include_inactive);
        let sessions = self.ctx.session_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(sessions, |s| s.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
    ) -> ServiceResult<WorkoutSessionResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(Self::KIND, false);
        let session = self
            .ctx
            .session_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;
        Ok(WorkoutSessionResponse::from(session))
    }

    #[instrument(skip(self, request), fields(plan_id = %request.workout_plan_id))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateWorkoutSessionRequest,
    ) -> ServiceResult<WorkoutSessionResponse> {
        let member_id = request.member_id.unwrap_or(caller.id);
        let access = Access::new(self.ctx, caller);
        access
            .admit_new(Self::KIND, &RowOwner::member(member_id), true)
            .await?;
        access.readable_plan(request.workout_plan_id).await?;

        let session = WorkoutSession {
            id: self.ctx.generate_id(),
            member_id,
            workout_plan_id: request.workout_plan_id,
            start_time: request.start_time,
            end_time: request.end_time,
            total_calories_burned: request.total_calories_burned,
            completed: request.completed,
            rating: request.rating,
            feedback: request.feedback,
            created_at: Utc::now(),
        };

        self.ctx.session_repo().create(&session).await?;

        info!(session_id = %session.id, member_id = %member_id, "Workout session recorded");
        Ok(WorkoutSessionResponse::from(session))
    }

    /// Partial update; time order is checked on the merged row
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateWorkoutSessionRequest,
    ) -> ServiceResult<WorkoutSessionResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, Self::KIND)?;
        let mut session = self
            .ctx
            .session_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;

        if let Some(start) = request.start_time {
            session.start_time = start;
        }
        if let Some(completed) = request.completed {
            session.completed = completed;
        }
        session.end_time = request.end_time.or(session.end_time);
        session.total_calories_burned =
            request.total_calories_burned.or(session.total_calories_burned);
        session.rating = request.rating.or(session.rating);
        session.feedback = request.feedback.or(session.feedback);
        check_time_order(session.start_time, session.end_time)?;

        self.ctx.session_repo().update(&session).await?;

        info!(session_id = %id, completed = session.completed, "Workout session updated");
        Ok(WorkoutSessionResponse::from(session))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, Self::KIND)?;
        self.ctx
            .session_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(Self::KIND, id))?;

        self.ctx.session_repo().delete(id).await?;

        info!(session_id = %id, "Workout session deleted");
        Ok(())
    }
}
