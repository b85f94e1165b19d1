//! Caller-bound access checks shared by every resource service
//!
//! Reads are narrowed by the visibility scope. Writes first pass the action
//! table, then must land inside the caller's scope: updates and deletes only
//! reach visible rows, creates must place the new row where the caller could
//! see it.

use gym_core::entities::{Exercise, WorkoutPlan};
use gym_core::policy::{authorize, visible_rows, Action, EntityKind, RowOwner, RowScope};
use gym_core::traits::ListQuery;
use gym_core::{Caller, DomainError, Snowflake};

use crate::dto::PaginatedResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Listing options common to every collection endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub after: Option<Snowflake>,
    pub limit: i64,
    /// Admin full view; ignored for other roles
    pub include_inactive: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            after: None,
            limit: ListQuery::default().limit,
            include_inactive: false,
        }
    }
}

impl ListOptions {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            after: self.after,
            limit: self.limit,
        }
    }

    /// Wrap one page of rows; a full page means more may follow
    pub fn page<T, R>(&self, rows: Vec<T>, id: impl Fn(&T) -> Snowflake) -> PaginatedResponse<R>
    where
        R: From<T>,
    {
        let has_more = rows.len() as i64 == self.limit;
        let after = rows.last().map(|row| id(row).to_string());
        PaginatedResponse::new(
            rows.into_iter().map(R::from).collect(),
            after,
            has_more,
            self.limit,
        )
    }
}

/// Hidden and missing rows read the same way
pub fn missing(kind: EntityKind, id: Snowflake) -> ServiceError {
    ServiceError::not_found(kind.name(), id)
}

/// A referenced row the caller cannot reach
///
/// Hidden and missing references fail identically, as a bad field.
pub fn unknown_reference(field: &'static str, kind: EntityKind, id: Snowflake) -> ServiceError {
    DomainError::invalid_field(field, format!("{} {id} does not exist", kind.name())).into()
}

/// Access checks for one caller
pub struct Access<'a> {
    ctx: &'a ServiceContext,
    caller: Caller,
}

impl<'a> Access<'a> {
    pub fn new(ctx: &'a ServiceContext, caller: Caller) -> Self {
        Self { ctx, caller }
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    /// Rows of `kind` this caller may read
    pub fn read_scope(&self, kind: EntityKind, include_inactive: bool) -> RowScope {
        visible_rows(kind, &self.caller, include_inactive)
    }

    /// Rows an update or delete may reach
    ///
    /// Admins reach inactive rows as well so repeated deletes stay no-ops.
    pub fn write_scope(&self, action: Action, kind: EntityKind) -> ServiceResult<RowScope> {
        authorize(action, kind, &self.caller)?;
        Ok(visible_rows(kind, &self.caller, true))
    }

    /// Rows a restore may reach: the write scope without the live filter
    pub fn restore_scope(&self, kind: EntityKind) -> ServiceResult<RowScope> {
        authorize(Action::Restore, kind, &self.caller)?;
        Ok(RowScope {
            live_only: false,
            ..visible_rows(kind, &self.caller, true)
        })
    }

    /// Check that the caller may create a row with these owner columns
    pub async fn admit_new(&self, kind: EntityKind, owner: &RowOwner, live: bool) -> ServiceResult<()> {
        authorize(Action::Create, kind, &self.caller)?;

        let scope = visible_rows(kind, &self.caller, true);
        let assigned = match scope.assignment_trainer() {
            Some(trainer_id) => self.ctx.link_repo().assigned_members(trainer_id).await?,
            None => Vec::new(),
        };

        admission(kind, &scope, owner, live, &assigned)?;
        Ok(())
    }

    /// A workout plan the caller can read, for records that point at one
    pub async fn readable_plan(&self, plan_id: Snowflake) -> ServiceResult<WorkoutPlan> {
        let scope = self.read_scope(EntityKind::WorkoutPlan, false);
        self.plan_within(plan_id, &scope).await
    }

    /// A workout plan the caller could update, for entries added to it
    pub async fn writable_plan(&self, plan_id: Snowflake) -> ServiceResult<WorkoutPlan> {
        let scope = visible_rows(EntityKind::WorkoutPlan, &self.caller, true);
        self.plan_within(plan_id, &scope).await
    }

    pub async fn readable_exercise(&self, exercise_id: Snowflake) -> ServiceResult<Exercise> {
        let scope = self.read_scope(EntityKind::Exercise, false);
        self.ctx
            .exercise_repo()
            .find(exercise_id, &scope)
            .await?
            .ok_or_else(|| unknown_reference("exercise_id", EntityKind::Exercise, exercise_id))
    }

    async fn plan_within(&self, plan_id: Snowflake, scope: &RowScope) -> ServiceResult<WorkoutPlan> {
        self.ctx
            .workout_plan_repo()
            .find(plan_id, scope)
            .await?
            .ok_or_else(|| unknown_reference("workout_plan_id", EntityKind::WorkoutPlan, plan_id))
    }
}

/// Whether a new row with `owner` falls inside `scope`
pub fn admission(
    kind: EntityKind,
    scope: &RowScope,
    owner: &RowOwner,
    live: bool,
    assigned: &[Snowflake],
) -> Result<(), DomainError> {
    if scope.admits(owner, live, assigned) {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "cannot create {} outside your own records",
            kind.name()
        )))
    }
}
