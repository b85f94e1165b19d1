//! Action gating by role
//!
//! A static table keyed by `(entity kind, action)` lists the roles allowed to
//! act. Super-admins bypass the table entirely.

use crate::error::DomainError;
use crate::value_objects::{Caller, RoleSet};

use super::EntityKind;

/// Operation requested on an entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    /// Undo a soft delete
    Restore,
    /// List soft-deleted rows
    ListDeleted,
    /// Irreversible removal
    Purge,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Restore => "restore",
            Self::ListDeleted => "list deleted",
            Self::Purge => "purge",
        }
    }
}

/// Roles allowed to perform `action` on `kind`
pub fn allowed_roles(kind: EntityKind, action: Action) -> RoleSet {
    use Action::{Create, Delete, ListDeleted, Purge, Read, Restore, Update};
    use EntityKind::{
        Actor, Exercise, MemberProgress, Membership, NutritionPlan, TrainerMemberLink,
        WorkoutLog, WorkoutPlan, WorkoutPlanExercise, WorkoutSession,
    };

    match (kind, action) {
        (_, Read) => RoleSet::EVERYONE,

        // Everyone may edit their own profile; visibility bounds the rows
        (Actor, Update) => RoleSet::EVERYONE,
        (Actor, Create | Delete | Restore | ListDeleted) => RoleSet::ADMINS,
        (Actor, Purge) => RoleSet::SUPER,

        (TrainerMemberLink, Create | Update | Delete | Restore) => RoleSet::STAFF,

        (
            WorkoutPlan | NutritionPlan | Exercise | WorkoutPlanExercise | Membership,
            Create | Update | Delete,
        ) => RoleSet::STAFF,

        (WorkoutLog | MemberProgress | WorkoutSession, Create | Update | Delete) => {
            RoleSet::EVERYONE
        }

        _ => RoleSet::empty(),
    }
}

/// Whether `caller` may perform `action` on `kind`
pub fn may_perform(action: Action, kind: EntityKind, caller: &Caller) -> bool {
    if caller.is_super {
        return true;
    }
    allowed_roles(kind, action).admits(caller)
}

/// Like [`may_perform`] but yields a forbidden error on denial
pub fn authorize(action: Action, kind: EntityKind, caller: &Caller) -> Result<(), DomainError> {
    if may_perform(action, kind, caller) {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "not allowed to {} {}",
            action.as_str(),
            kind.name()
        )))
    }
}
