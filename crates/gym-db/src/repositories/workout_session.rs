//! PostgreSQL implementation of WorkoutSessionRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::WorkoutSession;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, RepoResult, WorkoutSessionRepository};
use gym_core::value_objects::Snowflake;

use crate::models::WorkoutSessionModel;

use super::error::map_db_error;
use super::lifecycle::{self, Table};
use super::locks::guard_member;
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("workout_sessions", EntityKind::WorkoutSession);

const COLUMNS: &str = "id, member_id, workout_plan_id, start_time, end_time, \
     total_calories_burned, completed, rating, feedback, created_at";

const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: None,
    member: Some("member_id"),
    live: "TRUE",
};

/// PostgreSQL implementation of WorkoutSessionRepository
#[derive(Clone)]
pub struct PgWorkoutSessionRepository {
    pool: PgPool,
}

impl PgWorkoutSessionRepository {
    /// Create a new PgWorkoutSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM workout_sessions WHERE TRUE"))
    }
}

#[async_trait]
impl WorkoutSessionRepository for PgWorkoutSessionRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<WorkoutSession>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<WorkoutSessionModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(WorkoutSession::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<WorkoutSession>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<WorkoutSessionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(WorkoutSession::from).collect())
    }

    #[instrument(skip(self, session), fields(session_id = %session.id))]
    async fn create(&self, session: &WorkoutSession) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_member(&mut tx, session.member_id).await?;

        sqlx::query(
            r"
            INSERT INTO workout_sessions (id, member_id, workout_plan_id, start_time, end_time,
                                          total_calories_burned, completed, rating, feedback,
                                          created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(session.id.into_inner())
        .bind(session.member_id.into_inner())
        .bind(session.workout_plan_id.into_inner())
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.total_calories_burned)
        .bind(session.completed)
        .bind(session.rating)
        .bind(&session.feedback)
        .bind(session.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, session), fields(session_id = %session.id))]
    async fn update(&self, session: &WorkoutSession) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workout_sessions
            SET start_time = $2, end_time = $3, total_calories_burned = $4, completed = $5,
                rating = $6, feedback = $7
            WHERE id = $1
            ",
        )
        .bind(session.id.into_inner())
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.total_calories_burned)
        .bind(session.completed)
        .bind(session.rating)
        .bind(&session.feedback)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), session.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }
}
