//! Translate a [`RowScope`] into SQL predicates

use gym_core::policy::{OwnerFilter, RowScope};
use gym_core::traits::ListQuery;
use sqlx::{Postgres, QueryBuilder};

/// Hard cap on page size
pub const MAX_PAGE: i64 = 100;

/// Column expressions a scope is evaluated against
///
/// For actors `member` is the row's own id column.
#[derive(Debug, Clone, Copy)]
pub struct ScopeColumns {
    pub id: &'static str,
    pub trainer: Option<&'static str>,
    pub member: Option<&'static str>,
    /// Boolean expression that is true for live rows
    pub live: &'static str,
}

const ASSIGNED_MEMBERS: &str = "SELECT member_id FROM trainer_member_links \
     WHERE is_active AND NOT is_deleted AND trainer_id = ";

/// Append ` AND ...` predicates for `scope`; the query must already have a WHERE clause
pub fn push_scope(qb: &mut QueryBuilder<'_, Postgres>, scope: &RowScope, cols: &ScopeColumns) {
    if scope.live_only {
        qb.push(" AND ").push(cols.live);
    }

    match (scope.owner, cols.trainer, cols.member) {
        (OwnerFilter::Any, _, _) => {}
        (OwnerFilter::Trainer(id), Some(trainer), _) => {
            qb.push(" AND ").push(trainer).push(" = ").push_bind(id.into_inner());
        }
        (OwnerFilter::Member(id), _, Some(member)) => {
            qb.push(" AND ").push(member).push(" = ").push_bind(id.into_inner());
        }
        (OwnerFilter::AssignedTo(trainer_id), _, Some(member)) => {
            qb.push(" AND ")
                .push(member)
                .push(" IN (")
                .push(ASSIGNED_MEMBERS)
                .push_bind(trainer_id.into_inner())
                .push(")");
        }
        (OwnerFilter::TrainerAndAssigned(trainer_id), _, Some(member)) => {
            qb.push(" AND (")
                .push(member)
                .push(" = ")
                .push_bind(trainer_id.into_inner())
                .push(" OR ")
                .push(member)
                .push(" IN (")
                .push(ASSIGNED_MEMBERS)
                .push_bind(trainer_id.into_inner())
                .push("))");
        }
        // Nothing, or an owner filter on a column this table lacks
        _ => {
            qb.push(" AND FALSE");
        }
    }
}

/// Append keyset pagination and ordering
pub fn push_page(qb: &mut QueryBuilder<'_, Postgres>, id_column: &str, query: ListQuery) {
    if let Some(after) = query.after {
        qb.push(" AND ")
            .push(id_column)
            .push(" > ")
            .push_bind(after.into_inner());
    }
    qb.push(" ORDER BY ")
        .push(id_column)
        .push(" LIMIT ")
        .push_bind(query.limit.clamp(1, MAX_PAGE));
}
