//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::Membership;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ListQuery, MembershipRepository, RepoResult};
use gym_core::value_objects::Snowflake;

use crate::mappers::try_collect;
use crate::models::MembershipModel;

use super::error::{map_db_error, map_unique_violation};
use super::lifecycle::{self, Table};
use super::locks::guard_membership;
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("memberships", EntityKind::Membership);

const COLUMNS: &str = "id, member_id, plan_type, start_date, end_date, is_active, created_at";

const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: None,
    member: Some("member_id"),
    live: "is_active",
};

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM memberships WHERE TRUE"))
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<Membership>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<MembershipModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(Membership::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<Membership>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<MembershipModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self, membership), fields(membership_id = %membership.id))]
    async fn create(&self, membership: &Membership) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        guard_membership(
            &mut tx,
            membership.id,
            membership.member_id,
            membership.is_active,
        )
        .await?;

        sqlx::query(
            r"
            INSERT INTO memberships (id, member_id, plan_type, start_date, end_date, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(membership.id.into_inner())
        .bind(membership.member_id.into_inner())
        .bind(membership.plan_type.as_str())
        .bind(membership.start_date)
        .bind(membership.end_date)
        .bind(membership.is_active)
        .bind(membership.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| {
                DomainError::ActiveMembershipExists(membership.member_id)
            })
        })?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, membership), fields(membership_id = %membership.id))]
    async fn update(&self, membership: &Membership) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Deactivating never conflicts; only activation needs the lock and check
        if membership.is_active {
            guard_membership(&mut tx, membership.id, membership.member_id, true).await?;
        }

        let result = sqlx::query(
            r"
            UPDATE memberships
            SET plan_type = $2, start_date = $3, end_date = $4, is_active = $5
            WHERE id = $1
            ",
        )
        .bind(membership.id.into_inner())
        .bind(membership.plan_type.as_str())
        .bind(membership.start_date)
        .bind(membership.end_date)
        .bind(membership.is_active)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| {
                DomainError::ActiveMembershipExists(membership.member_id)
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(TABLE.kind.name(), membership.id));
        }

        tx.commit().await.map_err(map_db_error)?;
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
        assert_send_sync::<PgMembershipRepository>();
    }
}
