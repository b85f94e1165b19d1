//! PostgreSQL implementation of TrainerLinkRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::TrainerMemberLink;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, RepoResult, TrainerLinkRepository};
use gym_core::value_objects::Snowflake;

use crate::models::TrainerLinkModel;

use super::error::{map_db_error, map_unique_violation};
use super::lifecycle::{self, Table};
use super::locks::guard_assignment;
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("trainer_member_links", EntityKind::TrainerMemberLink);

const COLUMNS: &str = "id, trainer_id, member_id, assigned_date, notes, is_active, is_deleted";

/// A link is live while present; an inactive but present link is still listed
const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: Some("trainer_id"),
    member: Some("member_id"),
    live: "NOT is_deleted",
};

/// PostgreSQL implementation of TrainerLinkRepository
#[derive(Clone)]
pub struct PgTrainerLinkRepository {
    pool: PgPool,
}

impl PgTrainerLinkRepository {
    /// Create a new PgTrainerLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!(
            "SELECT {COLUMNS} FROM trainer_member_links WHERE TRUE"
        ))
    }
}

#[async_trait]
impl TrainerLinkRepository for PgTrainerLinkRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        id: Snowflake,
        scope: &RowScope,
    ) -> RepoResult<Option<TrainerMemberLink>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<TrainerLinkModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(TrainerMemberLink::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        scope: &RowScope,
        query: ListQuery,
    ) -> RepoResult<Vec<TrainerMemberLink>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<TrainerLinkModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(TrainerMemberLink::from).collect())
    }

    #[instrument(skip(self))]
    async fn assigned_members(&self, trainer_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT member_id FROM trainer_member_links
            WHERE trainer_id = $1 AND is_active AND NOT is_deleted
            ORDER BY member_id
            ",
        )
        .bind(trainer_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn create(&self, link: &TrainerMemberLink) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_assignment(&mut tx, link.trainer_id, link.member_id).await?;

        sqlx::query(
            r"
            INSERT INTO trainer_member_links
                (id, trainer_id, member_id, assigned_date, notes, is_active, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(link.id.into_inner())
        .bind(link.trainer_id.into_inner())
        .bind(link.member_id.into_inner())
        .bind(link.assigned_date)
        .bind(&link.notes)
        .bind(link.is_active)
        .bind(link.is_deleted)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateAssignment))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    /// Reactivating a paused link re-checks both roles under the same locks as create
    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn update(&self, link: &TrainerMemberLink) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let Some(was_active) = lock_link_state(&mut tx, link.id).await? else {
            return Err(DomainError::not_found(TABLE.kind.name(), link.id));
        };
        if link.is_active && !was_active {
            guard_assignment(&mut tx, link.trainer_id, link.member_id).await?;
        }

        sqlx::query(
            r"
            UPDATE trainer_member_links
            SET notes = $2, is_active = $3
            WHERE id = $1
            ",
        )
        .bind(link.id.into_inner())
        .bind(&link.notes)
        .bind(link.is_active)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }

    /// Restoring also reactivates, so the pair must still be a trainer and a member
    #[instrument(skip(self))]
    async fn restore(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let pair = sqlx::query_as::<_, (i64, i64)>(
            "SELECT trainer_id, member_id FROM trainer_member_links WHERE id = $1 FOR UPDATE",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let Some((trainer_id, member_id)) = pair else {
            return Err(DomainError::not_found(TABLE.kind.name(), id));
        };

        lifecycle::restore(&mut *tx, &TABLE, id).await?;
        guard_assignment(&mut tx, Snowflake::new(trainer_id), Snowflake::new(member_id)).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}

/// Current `is_active` of a present link, row-locked
async fn lock_link_state(conn: &mut PgConnection, id: Snowflake) -> RepoResult<Option<bool>> {
    sqlx::query_scalar::<_, bool>(
        "SELECT is_active FROM trainer_member_links WHERE id = $1 AND NOT is_deleted FOR UPDATE",
    )
    .bind(id.into_inner())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_db_error)
}
