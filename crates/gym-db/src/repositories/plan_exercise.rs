//! PostgreSQL implementation of PlanExerciseRepository
//!
//! Plan exercises carry no owner columns of their own; every read joins the
//! parent plan and is scoped by its trainer, member and active flag.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::WorkoutPlanExercise;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, PlanExerciseRepository, RepoResult};
use gym_core::value_objects::Snowflake;

use crate::models::PlanExerciseModel;

use super::error::{map_db_error, map_unique_violation};
use super::lifecycle::{self, Table};
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("workout_plan_exercises", EntityKind::WorkoutPlanExercise);

const SELECT: &str = r#"
    SELECT wpe.id, wpe.workout_plan_id, wpe.exercise_id, wpe.sets, wpe.reps, wpe.weight,
           wpe.rest_time_seconds, wpe."order", wpe.notes
    FROM workout_plan_exercises wpe
    JOIN workout_plans wp ON wp.id = wpe.workout_plan_id
    WHERE TRUE"#;

const SCOPE: ScopeColumns = ScopeColumns {
    id: "wpe.id",
    trainer: Some("wp.trainer_id"),
    member: Some("wp.member_id"),
    live: "wp.is_active",
};

/// PostgreSQL implementation of PlanExerciseRepository
#[derive(Clone)]
pub struct PgPlanExerciseRepository {
    pool: PgPool,
}

impl PgPlanExerciseRepository {
    /// Create a new PgPlanExerciseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(SELECT)
    }
}

fn slot_taken(e: sqlx::Error) -> DomainError {
    map_unique_violation(e, |_| DomainError::DuplicatePlanSlot)
}

#[async_trait]
impl PlanExerciseRepository for PgPlanExerciseRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        id: Snowflake,
        scope: &RowScope,
    ) -> RepoResult<Option<WorkoutPlanExercise>> {
        let mut qb = Self::select();
        qb.push(" AND wpe.id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<PlanExerciseModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(WorkoutPlanExercise::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        scope: &RowScope,
        workout_plan_id: Option<Snowflake>,
        query: ListQuery,
    ) -> RepoResult<Vec<WorkoutPlanExercise>> {
        let mut qb = Self::select();
        if let Some(plan_id) = workout_plan_id {
            qb.push(" AND wpe.workout_plan_id = ")
                .push_bind(plan_id.into_inner());
        }
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<PlanExerciseModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(WorkoutPlanExercise::from).collect())
    }

    #[instrument(skip(self, item), fields(plan_exercise_id = %item.id))]
    async fn create(&self, item: &WorkoutPlanExercise) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO workout_plan_exercises (id, workout_plan_id, exercise_id, sets, reps,
                                                weight, rest_time_seconds, "order", notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id.into_inner())
        .bind(item.workout_plan_id.into_inner())
        .bind(item.exercise_id.into_inner())
        .bind(item.sets)
        .bind(item.reps)
        .bind(item.weight)
        .bind(item.rest_time_seconds)
        .bind(item.order)
        .bind(&item.notes)
        .execute(&self.pool)
        .await
        .map_err(slot_taken)?;

        Ok(())
    }

    #[instrument(skip(self, item), fields(plan_exercise_id = %item.id))]
    async fn update(&self, item: &WorkoutPlanExercise) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE workout_plan_exercises
            SET exercise_id = $2, sets = $3, reps = $4, weight = $5,
                rest_time_seconds = $6, "order" = $7, notes = $8
            WHERE id = $1
            "#,
        )
        .bind(item.id.into_inner())
        .bind(item.exercise_id.into_inner())
        .bind(item.sets)
        .bind(item.reps)
        .bind(item.weight)
        .bind(item.rest_time_seconds)
        .bind(item.order)
        .bind(&item.notes)
        .execute(&self.pool)
        .await
        .map_err(slot_taken)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_core::policy::OwnerFilter;

    #[test]
    fn test_scope_follows_parent_plan() {
        let mut qb = PgPlanExerciseRepository::select();
        push_scope(
            &mut qb,
            &RowScope::live(OwnerFilter::Member(Snowflake::new(5))),
            &SCOPE,
        );
        assert!(qb.sql().ends_with("WHERE TRUE AND wp.is_active AND wp.member_id = $1"));
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPlanExerciseRepository>();
    }
}
