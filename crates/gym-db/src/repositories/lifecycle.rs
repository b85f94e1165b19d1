//! Delete/restore statements derived from each kind's lifecycle

use gym_core::error::DomainError;
use gym_core::policy::{lifecycle, DeleteEffect, EntityKind};
use gym_core::traits::RepoResult;
use gym_core::value_objects::Snowflake;
use sqlx::{PgExecutor, PgPool};

use super::error::map_db_error;

/// Table backing one entity kind
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub kind: EntityKind,
    /// Bump `updated_at` alongside lifecycle changes
    pub touches_updated_at: bool,
}

impl Table {
    pub const fn new(name: &'static str, kind: EntityKind) -> Self {
        Self {
            name,
            kind,
            touches_updated_at: false,
        }
    }

    pub const fn with_updated_at(mut self) -> Self {
        self.touches_updated_at = true;
        self
    }

    fn touch(&self) -> &'static str {
        if self.touches_updated_at {
            ", updated_at = NOW()"
        } else {
            ""
        }
    }

    pub fn delete_sql(&self) -> String {
        match lifecycle::delete_effect(self.kind) {
            DeleteEffect::Deactivate => format!(
                "UPDATE {} SET is_active = FALSE{} WHERE id = $1",
                self.name,
                self.touch()
            ),
            DeleteEffect::MarkDeleted { deactivate } => format!(
                "UPDATE {} SET is_deleted = TRUE{}{} WHERE id = $1",
                self.name,
                if deactivate { ", is_active = FALSE" } else { "" },
                self.touch()
            ),
            DeleteEffect::Remove => format!("DELETE FROM {} WHERE id = $1", self.name),
        }
    }

    /// `None` for kinds without a way back
    pub fn restore_sql(&self) -> Option<String> {
        if !lifecycle::supports_restore(self.kind) {
            return None;
        }
        Some(format!(
            "UPDATE {} SET is_deleted = FALSE{}{} WHERE id = $1 AND is_deleted",
            self.name,
            if lifecycle::restore_reactivates(self.kind) {
                ", is_active = TRUE"
            } else {
                ""
            },
            self.touch()
        ))
    }

    fn not_found(&self, id: Snowflake) -> DomainError {
        DomainError::not_found(self.kind.name(), id)
    }
}

/// Apply the kind's delete effect to one row
///
/// Re-deleting an inactive or deleted row matches and changes nothing.
pub async fn delete(pool: &PgPool, table: &Table, id: Snowflake) -> RepoResult<()> {
    let result = sqlx::query(&table.delete_sql())
        .bind(id.into_inner())
        .execute(pool)
        .await
        .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(table.not_found(id));
    }

    Ok(())
}

/// Flip a deleted row back; a row that is not deleted reads as not found
pub async fn restore<'c, E>(executor: E, table: &Table, id: Snowflake) -> RepoResult<()>
where
    E: PgExecutor<'c>,
{
    let Some(sql) = table.restore_sql() else {
        return Err(table.not_found(id));
    };

    let result = sqlx::query(&sql)
        .bind(id.into_inner())
        .execute(executor)
        .await
        .map_err(map_db_error)?;

    if result.rows_affected() == 0 {
        return Err(table.not_found(id));
    }

    Ok(())
}
