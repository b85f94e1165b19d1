//! PostgreSQL implementation of WorkoutPlanRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::{Goal, WorkoutPlan};
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, RepoResult, WorkoutPlanRepository};
use gym_core::value_objects::Snowflake;

use crate::mappers::try_collect;
use crate::models::WorkoutPlanModel;

use super::error::map_db_error;
use super::lifecycle::{self, Table};
use super::locks::guard_assignment;
use super::scope::{push_page, push_scope, ScopeColumns, MAX_PAGE};

const TABLE: Table = Table::new("workout_plans", EntityKind::WorkoutPlan).with_updated_at();

const COLUMNS: &str = "id, trainer_id, member_id, name, description, goal, day_of_week, \
     duration_weeks, calories_target, is_active, created_at, updated_at";

const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: Some("trainer_id"),
    member: Some("member_id"),
    live: "is_active",
};

/// PostgreSQL implementation of WorkoutPlanRepository
#[derive(Clone)]
pub struct PgWorkoutPlanRepository {
    pool: PgPool,
}

impl PgWorkoutPlanRepository {
    /// Create a new PgWorkoutPlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM workout_plans WHERE TRUE"))
    }
}

#[async_trait]
impl WorkoutPlanRepository for PgWorkoutPlanRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<WorkoutPlan>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<WorkoutPlanModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(WorkoutPlan::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<WorkoutPlan>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<WorkoutPlanModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self))]
    async fn recommended(
        &self,
        scope: &RowScope,
        goals: &[Goal],
        limit: i64,
    ) -> RepoResult<Vec<WorkoutPlan>> {
        let goals: Vec<&'static str> = goals.iter().map(|g| g.as_str()).collect();

        let mut qb = Self::select();
        qb.push(" AND goal = ANY(").push_bind(goals).push(")");
        push_scope(&mut qb, scope, &SCOPE);
        qb.push(" ORDER BY id LIMIT ").push_bind(limit.clamp(1, MAX_PAGE));

        let models = qb
            .build_query_as::<WorkoutPlanModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self, plan), fields(plan_id = %plan.id))]
    async fn create(&self, plan: &WorkoutPlan) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_assignment(&mut tx, plan.trainer_id, plan.member_id).await?;

        sqlx::query(
            r"
            INSERT INTO workout_plans (id, trainer_id, member_id, name, description, goal,
                                       day_of_week, duration_weeks, calories_target, is_active,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(plan.id.into_inner())
        .bind(plan.trainer_id.into_inner())
        .bind(plan.member_id.into_inner())
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.goal.as_str())
        .bind(plan.day_of_week.as_str())
        .bind(plan.duration_weeks)
        .bind(plan.calories_target)
        .bind(plan.is_active)
        .bind(plan.created_at)
        .bind(plan.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, plan), fields(plan_id = %plan.id))]
    async fn update(&self, plan: &WorkoutPlan) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workout_plans
            SET name = $2, description = $3, goal = $4, day_of_week = $5,
                duration_weeks = $6, calories_target = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(plan.id.into_inner())
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.goal.as_str())
        .bind(plan.day_of_week.as_str())
        .bind(plan.duration_weeks)
        .bind(plan.calories_target)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), plan.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }
}
