//! PostgreSQL implementation of WorkoutLogRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::WorkoutLog;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, RepoResult, WorkoutLogRepository};
use gym_core::value_objects::Snowflake;

use crate::models::WorkoutLogModel;

use super::error::map_db_error;
use super::lifecycle::{self, Table};
use super::locks::guard_member;
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("workout_logs", EntityKind::WorkoutLog);

const COLUMNS: &str = "id, member_id, workout_plan_id, exercise_id, date, sets_completed, \
     reps_completed, weight_used, notes, duration_minutes";

/// No lifecycle flag: every row is live
const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: None,
    member: Some("member_id"),
    live: "TRUE",
};

/// PostgreSQL implementation of WorkoutLogRepository
#[derive(Clone)]
pub struct PgWorkoutLogRepository {
    pool: PgPool,
}

impl PgWorkoutLogRepository {
    /// Create a new PgWorkoutLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM workout_logs WHERE TRUE"))
    }
}

#[async_trait]
impl WorkoutLogRepository for PgWorkoutLogRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<WorkoutLog>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<WorkoutLogModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(WorkoutLog::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<WorkoutLog>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<WorkoutLogModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(WorkoutLog::from).collect())
    }

    #[instrument(skip(self, log), fields(log_id = %log.id))]
    async fn create(&self, log: &WorkoutLog) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_member(&mut tx, log.member_id).await?;

        sqlx::query(
            r"
            INSERT INTO workout_logs (id, member_id, workout_plan_id, exercise_id, date,
                                      sets_completed, reps_completed, weight_used, notes,
                                      duration_minutes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.member_id.into_inner())
        .bind(log.workout_plan_id.map(Snowflake::into_inner))
        .bind(log.exercise_id.into_inner())
        .bind(log.date)
        .bind(log.sets_completed)
        .bind(log.reps_completed)
        .bind(log.weight_used)
        .bind(&log.notes)
        .bind(log.duration_minutes)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, log), fields(log_id = %log.id))]
    async fn update(&self, log: &WorkoutLog) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workout_logs
            SET workout_plan_id = $2, exercise_id = $3, date = $4, sets_completed = $5,
                reps_completed = $6, weight_used = $7, notes = $8, duration_minutes = $9
            WHERE id = $1
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.workout_plan_id.map(Snowflake::into_inner))
        .bind(log.exercise_id.into_inner())
        .bind(log.date)
        .bind(log.sets_completed)
        .bind(log.reps_completed)
        .bind(log.weight_used)
        .bind(&log.notes)
        .bind(log.duration_minutes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), log.id));
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

    #[test]
    fn test_delete_removes_row() {
        assert_eq!(TABLE.delete_sql(), "DELETE FROM workout_logs WHERE id = $1");
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgWorkoutLogRepository>();
    }
}
