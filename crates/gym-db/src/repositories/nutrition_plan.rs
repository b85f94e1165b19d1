//! PostgreSQL implementation of NutritionPlanRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::NutritionPlan;
use gym_core::error::DomainError;
use gym_core::policy::{CalorieRange, EntityKind, RowScope};
use gym_core::traits::{ListQuery, NutritionPlanRepository, RepoResult};
use gym_core::value_objects::Snowflake;

use crate::mappers::try_collect;
use crate::models::NutritionPlanModel;

use super::error::map_db_error;
use super::lifecycle::{self, Table};
use super::locks::guard_assignment;
use super::scope::{push_page, push_scope, ScopeColumns, MAX_PAGE};

const TABLE: Table = Table::new("nutrition_plans", EntityKind::NutritionPlan);

const COLUMNS: &str = "id, trainer_id, member_id, name, description, meal_type, calories, \
     protein_grams, carbs_grams, fat_grams, meal_details, is_active, created_at";

const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: Some("trainer_id"),
    member: Some("member_id"),
    live: "is_active",
};

/// PostgreSQL implementation of NutritionPlanRepository
#[derive(Clone)]
pub struct PgNutritionPlanRepository {
    pool: PgPool,
}

impl PgNutritionPlanRepository {
    /// Create a new PgNutritionPlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM nutrition_plans WHERE TRUE"))
    }
}

#[async_trait]
impl NutritionPlanRepository for PgNutritionPlanRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<NutritionPlan>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<NutritionPlanModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(NutritionPlan::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<NutritionPlan>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<NutritionPlanModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self))]
    async fn recommended(
        &self,
        scope: &RowScope,
        calories: CalorieRange,
        limit: i64,
    ) -> RepoResult<Vec<NutritionPlan>> {
        let mut qb = Self::select();
        if let Some(min) = calories.min {
            qb.push(" AND calories >= ").push_bind(min);
        }
        if let Some(max) = calories.max {
            qb.push(" AND calories <= ").push_bind(max);
        }
        push_scope(&mut qb, scope, &SCOPE);
        qb.push(" ORDER BY id LIMIT ").push_bind(limit.clamp(1, MAX_PAGE));

        let models = qb
            .build_query_as::<NutritionPlanModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self, plan), fields(plan_id = %plan.id))]
    async fn create(&self, plan: &NutritionPlan) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_assignment(&mut tx, plan.trainer_id, plan.member_id).await?;

        sqlx::query(
            r"
            INSERT INTO nutrition_plans (id, trainer_id, member_id, name, description, meal_type,
                                         calories, protein_grams, carbs_grams, fat_grams,
                                         meal_details, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(plan.id.into_inner())
        .bind(plan.trainer_id.into_inner())
        .bind(plan.member_id.into_inner())
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.meal_type.as_str())
        .bind(plan.calories)
        .bind(plan.protein_grams)
        .bind(plan.carbs_grams)
        .bind(plan.fat_grams)
        .bind(&plan.meal_details)
        .bind(plan.is_active)
        .bind(plan.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, plan), fields(plan_id = %plan.id))]
    async fn update(&self, plan: &NutritionPlan) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE nutrition_plans
            SET name = $2, description = $3, meal_type = $4, calories = $5,
                protein_grams = $6, carbs_grams = $7, fat_grams = $8, meal_details = $9
            WHERE id = $1
            ",
        )
        .bind(plan.id.into_inner())
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.meal_type.as_str())
        .bind(plan.calories)
        .bind(plan.protein_grams)
        .bind(plan.carbs_grams)
        .bind(plan.fat_grams)
        .bind(&plan.meal_details)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgNutritionPlanRepository>();
    }
}
