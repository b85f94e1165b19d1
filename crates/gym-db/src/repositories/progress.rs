//! PostgreSQL implementation of ProgressRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::MemberProgress;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, ProgressRepository, RepoResult};
use gym_core::value_objects::Snowflake;

use crate::models::ProgressModel;

use super::error::map_db_error;
use super::lifecycle::{self, Table};
use super::locks::guard_member;
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("member_progress", EntityKind::MemberProgress);

const COLUMNS: &str = "id, member_id, weight, body_fat_percentage, muscle_mass, measurements, \
     progress_photo, notes, recorded_date";

const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: None,
    member: Some("member_id"),
    live: "TRUE",
};

/// PostgreSQL implementation of ProgressRepository
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    /// Create a new PgProgressRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM member_progress WHERE TRUE"))
    }
}

#[async_trait]
impl ProgressRepository for PgProgressRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<MemberProgress>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<ProgressModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(MemberProgress::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<MemberProgress>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<ProgressModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(MemberProgress::from).collect())
    }

    #[instrument(skip(self, entry), fields(progress_id = %entry.id))]
    async fn create(&self, entry: &MemberProgress) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_member(&mut tx, entry.member_id).await?;

        sqlx::query(
            r"
            INSERT INTO member_progress (id, member_id, weight, body_fat_percentage, muscle_mass,
                                         measurements, progress_photo, notes, recorded_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(entry.id.into_inner())
        .bind(entry.member_id.into_inner())
        .bind(entry.weight)
        .bind(entry.body_fat_percentage)
        .bind(entry.muscle_mass)
        .bind(entry.measurements.as_ref().map(Json))
        .bind(&entry.progress_photo)
        .bind(&entry.notes)
        .bind(entry.recorded_date)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, entry), fields(progress_id = %entry.id))]
    async fn update(&self, entry: &MemberProgress) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE member_progress
            SET weight = $2, body_fat_percentage = $3, muscle_mass = $4, measurements = $5,
                progress_photo = $6, notes = $7
            WHERE id = $1
            ",
        )
        .bind(entry.id.into_inner())
        .bind(entry.weight)
        .bind(entry.body_fat_percentage)
        .bind(entry.muscle_mass)
        .bind(entry.measurements.as_ref().map(Json))
        .bind(&entry.progress_photo)
        .bind(&entry.notes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), entry.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }
}
