//! PostgreSQL implementation of ExerciseRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::{Exercise, ExerciseCategory};
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ExerciseRepository, ListQuery, RepoResult};
use gym_core::value_objects::Snowflake;

use crate::mappers::try_collect;
use crate::models::ExerciseModel;

use super::error::map_db_error;
use super::lifecycle::{self, Table};
use super::scope::{push_page, push_scope, ScopeColumns, MAX_PAGE};

const TABLE: Table = Table::new("exercises", EntityKind::Exercise);

const COLUMNS: &str = "id, name, category, description, instructions, muscle_groups, \
     equipment_needed, difficulty_level, calories_per_minute, exercise_image, video_url, \
     is_active, created_at";

/// Global catalog: no owner columns
const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: None,
    member: None,
    live: "is_active",
};

/// PostgreSQL implementation of ExerciseRepository
#[derive(Clone)]
pub struct PgExerciseRepository {
    pool: PgPool,
}

impl PgExerciseRepository {
    /// Create a new PgExerciseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM exercises WHERE TRUE"))
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<Exercise>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<ExerciseModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(Exercise::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<Exercise>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<ExerciseModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self))]
    async fn recommended(
        &self,
        scope: &RowScope,
        categories: &[ExerciseCategory],
        limit: i64,
    ) -> RepoResult<Vec<Exercise>> {
        let categories: Vec<&'static str> = categories.iter().map(|c| c.as_str()).collect();

        let mut qb = Self::select();
        qb.push(" AND category = ANY(").push_bind(categories).push(")");
        push_scope(&mut qb, scope, &SCOPE);
        qb.push(" ORDER BY id LIMIT ").push_bind(limit.clamp(1, MAX_PAGE));

        let models = qb
            .build_query_as::<ExerciseModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self, exercise), fields(exercise_id = %exercise.id))]
    async fn create(&self, exercise: &Exercise) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO exercises (id, name, category, description, instructions, muscle_groups,
                                   equipment_needed, difficulty_level, calories_per_minute,
                                   exercise_image, video_url, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(exercise.id.into_inner())
        .bind(&exercise.name)
        .bind(exercise.category.as_str())
        .bind(&exercise.description)
        .bind(&exercise.instructions)
        .bind(&exercise.muscle_groups)
        .bind(&exercise.equipment_needed)
        .bind(exercise.difficulty_level.as_str())
        .bind(exercise.calories_per_minute)
        .bind(&exercise.exercise_image)
        .bind(&exercise.video_url)
        .bind(exercise.is_active)
        .bind(exercise.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, exercise), fields(exercise_id = %exercise.id))]
    async fn update(&self, exercise: &Exercise) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE exercises
            SET name = $2, category = $3, description = $4, instructions = $5,
                muscle_groups = $6, equipment_needed = $7, difficulty_level = $8,
                calories_per_minute = $9, exercise_image = $10, video_url = $11
            WHERE id = $1
            ",
        )
        .bind(exercise.id.into_inner())
        .bind(&exercise.name)
        .bind(exercise.category.as_str())
        .bind(&exercise.description)
        .bind(&exercise.instructions)
        .bind(&exercise.muscle_groups)
        .bind(&exercise.equipment_needed)
        .bind(exercise.difficulty_level.as_str())
        .bind(exercise.calories_per_minute)
        .bind(&exercise.exercise_image)
        .bind(&exercise.video_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), exercise.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }
}
