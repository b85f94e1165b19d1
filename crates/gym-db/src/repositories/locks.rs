//! Row locks and fact loading for the invariant guards
//!
//! All helpers run on an open transaction so the facts they return stay valid
//! until commit.

use gym_core::entities::ActorRef;
use gym_core::policy::guards;
use gym_core::traits::RepoResult;
use gym_core::value_objects::Snowflake;
use sqlx::{PgConnection, Row};

use super::error::map_db_error;

#[derive(Debug, Clone, Copy)]
pub enum LockMode {
    Share,
    Update,
}

impl LockMode {
    fn clause(self) -> &'static str {
        match self {
            Self::Share => "FOR SHARE",
            Self::Update => "FOR UPDATE",
        }
    }
}

/// Load and lock the role facts of one actor
pub async fn lock_actor(
    conn: &mut PgConnection,
    id: Snowflake,
    mode: LockMode,
) -> RepoResult<Option<ActorRef>> {
    let sql = format!(
        "SELECT id, role, is_deleted FROM users WHERE id = $1 {}",
        mode.clause()
    );

    let row = sqlx::query(&sql)
        .bind(id.into_inner())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

    row.map(|row| -> Result<ActorRef, sqlx::Error> {
        let role: String = row.try_get("role")?;
        Ok(ActorRef {
            id: Snowflake::new(row.try_get("id")?),
            // Unknown roles never satisfy a role check
            role: role.parse().ok(),
            is_deleted: row.try_get("is_deleted")?,
        })
    })
    .transpose()
    .map_err(map_db_error)
}

/// Trainer/member pairing check with both actors share-locked
pub async fn guard_assignment(
    conn: &mut PgConnection,
    trainer_id: Snowflake,
    member_id: Snowflake,
) -> RepoResult<()> {
    let trainer = lock_actor(conn, trainer_id, LockMode::Share).await?;
    let member = lock_actor(conn, member_id, LockMode::Share).await?;
    guards::check_assignment(trainer_id, trainer.as_ref(), member_id, member.as_ref())
}

/// Member-side check with the member share-locked
pub async fn guard_member(conn: &mut PgConnection, member_id: Snowflake) -> RepoResult<()> {
    let member = lock_actor(conn, member_id, LockMode::Share).await?;
    guards::check_member(member_id, member.as_ref())
}

/// Member check plus single-active-membership check
///
/// The member row is locked `FOR UPDATE`, so concurrent membership writes for
/// the same member serialize here.
pub async fn guard_membership(
    conn: &mut PgConnection,
    membership_id: Snowflake,
    member_id: Snowflake,
    candidate_active: bool,
) -> RepoResult<()> {
    let member = lock_actor(conn, member_id, LockMode::Update).await?;
    guards::check_member(member_id, member.as_ref())?;

    if !candidate_active {
        return Ok(());
    }

    let other_active: Option<i64> = sqlx::query_scalar(
        r"
        SELECT id FROM memberships
        WHERE member_id = $1 AND is_active AND id <> $2
        LIMIT 1
        ",
    )
    .bind(member_id.into_inner())
    .bind(membership_id.into_inner())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_db_error)?;

    guards::check_single_active(member_id, candidate_active, other_active.map(Snowflake::new))
}
