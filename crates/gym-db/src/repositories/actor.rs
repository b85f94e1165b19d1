//! PostgreSQL implementation of ActorRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use gym_core::entities::Actor;
use gym_core::error::DomainError;
use gym_core::policy::{EntityKind, RowScope};
use gym_core::traits::{ActorRepository, ListQuery, RepoResult};
use gym_core::value_objects::{Caller, Snowflake};

use crate::mappers::try_collect;
use crate::models::{ActorModel, CallerModel};

use super::error::{map_db_error, map_unique_violation};
use super::lifecycle::{self, Table};
use super::scope::{push_page, push_scope, ScopeColumns};

const TABLE: Table = Table::new("users", EntityKind::Actor).with_updated_at();

const COLUMNS: &str = "id, username, email, first_name, last_name, role, bio, gender, phone, \
     weight, height, age, profile_image, is_super, is_deleted, created_at, updated_at";

/// An actor row is "owned" by the actor itself
const SCOPE: ScopeColumns = ScopeColumns {
    id: "id",
    trainer: None,
    member: Some("id"),
    live: "NOT is_deleted",
};

fn map_actor_unique(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("users_email_key") => DomainError::EmailTaken,
        _ => DomainError::UsernameTaken,
    }
}

/// PostgreSQL implementation of ActorRepository
#[derive(Clone)]
pub struct PgActorRepository {
    pool: PgPool,
}

impl PgActorRepository {
    /// Create a new PgActorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM users WHERE TRUE"))
    }
}

#[async_trait]
impl ActorRepository for PgActorRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<Actor>> {
        let mut qb = Self::select();
        qb.push(" AND id = ").push_bind(id.into_inner());
        push_scope(&mut qb, scope, &SCOPE);

        let model = qb
            .build_query_as::<ActorModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(Actor::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Actor>> {
        let model = sqlx::query_as::<_, ActorModel>(&format!(
            "SELECT {COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Actor::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<Actor>> {
        let mut qb = Self::select();
        push_scope(&mut qb, scope, &SCOPE);
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<ActorModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self))]
    async fn list_deleted(&self, query: ListQuery) -> RepoResult<Vec<Actor>> {
        let mut qb = Self::select();
        qb.push(" AND is_deleted");
        push_page(&mut qb, SCOPE.id, query);

        let models = qb
            .build_query_as::<ActorModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        try_collect(models)
    }

    #[instrument(skip(self))]
    async fn find_caller(&self, id: Snowflake) -> RepoResult<Option<Caller>> {
        let model = sqlx::query_as::<_, CallerModel>(
            r"
            SELECT id, role, is_super
            FROM users
            WHERE id = $1 AND NOT is_deleted
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Caller::from))
    }

    #[instrument(skip(self, actor, password_hash), fields(actor_id = %actor.id))]
    async fn create(&self, actor: &Actor, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, email, password_hash, first_name, last_name, role,
                               bio, gender, phone, weight, height, age, profile_image,
                               is_super, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ",
        )
        .bind(actor.id.into_inner())
        .bind(&actor.username)
        .bind(&actor.email)
        .bind(password_hash)
        .bind(&actor.first_name)
        .bind(&actor.last_name)
        .bind(actor.role.as_str())
        .bind(&actor.bio)
        .bind(actor.gender.map(|g| g.as_str()))
        .bind(&actor.phone)
        .bind(actor.weight)
        .bind(actor.height)
        .bind(actor.age)
        .bind(&actor.profile_image)
        .bind(actor.is_super)
        .bind(actor.is_deleted)
        .bind(actor.created_at)
        .bind(actor.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, map_actor_unique))?;

        Ok(())
    }

    #[instrument(skip(self, actor, password_hash), fields(actor_id = %actor.id))]
    async fn update(&self, actor: &Actor, password_hash: Option<&str>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, email = $3, first_name = $4, last_name = $5, role = $6,
                bio = $7, gender = $8, phone = $9, weight = $10, height = $11, age = $12,
                profile_image = $13, is_super = $14,
                password_hash = COALESCE($15, password_hash), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(actor.id.into_inner())
        .bind(&actor.username)
        .bind(&actor.email)
        .bind(&actor.first_name)
        .bind(&actor.last_name)
        .bind(actor.role.as_str())
        .bind(&actor.bio)
        .bind(actor.gender.map(|g| g.as_str()))
        .bind(&actor.phone)
        .bind(actor.weight)
        .bind(actor.height)
        .bind(actor.age)
        .bind(&actor.profile_image)
        .bind(actor.is_super)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, map_actor_unique))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(EntityKind::Actor.name(), actor.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::delete(&self.pool, &TABLE, id).await
    }

    #[instrument(skip(self))]
    async fn restore(&self, id: Snowflake) -> RepoResult<()> {
        lifecycle::restore(&self.pool, &TABLE, id).await
    }

    #[instrument(skip(self))]
    async fn purge(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(EntityKind::Actor.name(), id));
        }

        Ok(())
    }
}
