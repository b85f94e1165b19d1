//! Row visibility
//!
//! Maps `(entity kind, caller)` to the predicate that narrows every read. The
//! same predicate also bounds writes: an update or delete only reaches rows the
//! caller can see, and a create must place its row inside the caller's scope.

use crate::value_objects::{Caller, Role, Snowflake};

use super::EntityKind;

/// Constraint on the owner columns of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerFilter {
    /// No owner constraint
    Any,
    /// `trainer_id = id`
    Trainer(Snowflake),
    /// `member_id = id`
    Member(Snowflake),
    /// `member_id` is one of the members assigned to trainer `id`
    AssignedTo(Snowflake),
    /// Actor rows only: trainer `id` itself and its assigned members
    TrainerAndAssigned(Snowflake),
    /// Matches nothing
    Nothing,
}

/// Readable row set for one caller and entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowScope {
    pub owner: OwnerFilter,
    /// Restrict to rows whose lifecycle flag is in its live state
    pub live_only: bool,
}

/// Owner columns of a concrete row
///
/// For actors the row's own id goes in `member_id`, so `Member(id)` reads as
/// "this account".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowOwner {
    pub trainer_id: Option<Snowflake>,
    pub member_id: Option<Snowflake>,
}

impl RowOwner {
    pub fn new(trainer_id: Snowflake, member_id: Snowflake) -> Self {
        Self {
            trainer_id: Some(trainer_id),
            member_id: Some(member_id),
        }
    }

    pub fn member(member_id: Snowflake) -> Self {
        Self {
            trainer_id: None,
            member_id: Some(member_id),
        }
    }

    /// Catalog rows with no owner
    pub fn none() -> Self {
        Self::default()
    }
}

impl RowScope {
    pub const fn unrestricted() -> Self {
        Self {
            owner: OwnerFilter::Any,
            live_only: false,
        }
    }

    pub const fn live(owner: OwnerFilter) -> Self {
        Self {
            owner,
            live_only: true,
        }
    }

    pub const fn nothing() -> Self {
        Self {
            owner: OwnerFilter::Nothing,
            live_only: true,
        }
    }

    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.owner == OwnerFilter::Nothing
    }

    /// Trainer whose assigned members this scope depends on, if any
    pub fn assignment_trainer(&self) -> Option<Snowflake> {
        match self.owner {
            OwnerFilter::AssignedTo(id) | OwnerFilter::TrainerAndAssigned(id) => Some(id),
            _ => None,
        }
    }

    /// Evaluate the predicate against one row
    ///
    /// `assigned` must hold the assigned members of [`Self::assignment_trainer`]
    /// when that is `Some`; it is ignored otherwise.
    pub fn admits(&self, owner: &RowOwner, live: bool, assigned: &[Snowflake]) -> bool {
        if self.live_only && !live {
            return false;
        }

        match self.owner {
            OwnerFilter::Any => true,
            OwnerFilter::Nothing => false,
            OwnerFilter::Trainer(id) => owner.trainer_id == Some(id),
            OwnerFilter::Member(id) => owner.member_id == Some(id),
            OwnerFilter::AssignedTo(_) => owner.member_id.is_some_and(|m| assigned.contains(&m)),
            OwnerFilter::TrainerAndAssigned(id) => owner
                .member_id
                .is_some_and(|m| m == id || assigned.contains(&m)),
        }
    }
}

/// Rows of `kind` the caller may see
///
/// `include_inactive` widens an admin's view to inactive and deleted rows; it
/// has no effect for any other role. Super-admins always see everything.
pub fn visible_rows(kind: EntityKind, caller: &Caller, include_inactive: bool) -> RowScope {
    if caller.is_super {
        return RowScope::unrestricted();
    }

    let Some(role) = caller.role else {
        return RowScope::nothing();
    };

    match role {
        Role::Admin => RowScope {
            owner: OwnerFilter::Any,
            live_only: !include_inactive,
        },
        Role::Trainer => RowScope::live(trainer_filter(kind, caller.id)),
        Role::Member => RowScope::live(member_filter(kind, caller.id)),
    }
}

fn trainer_filter(kind: EntityKind, id: Snowflake) -> OwnerFilter {
    match kind {
        EntityKind::Exercise => OwnerFilter::Any,
        EntityKind::Actor => OwnerFilter::TrainerAndAssigned(id),
        EntityKind::WorkoutPlan
        | EntityKind::NutritionPlan
        | EntityKind::TrainerMemberLink
        | EntityKind::WorkoutPlanExercise => OwnerFilter::Trainer(id),
        EntityKind::WorkoutLog
        | EntityKind::MemberProgress
        | EntityKind::WorkoutSession
        | EntityKind::Membership => OwnerFilter::AssignedTo(id),
    }
}

fn member_filter(kind: EntityKind, id: Snowflake) -> OwnerFilter {
    match kind {
        EntityKind::Exercise => OwnerFilter::Any,
        _ => OwnerFilter::Member(id),
    }
}
