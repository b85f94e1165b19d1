//! Soft-delete state machines

use crate::error::DomainError;
use crate::value_objects::Snowflake;

use super::EntityKind;

/// How an entity kind represents deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// `is_active`: ACTIVE -> INACTIVE, no way back through delete/restore
    OneWay,
    /// `is_deleted`: PRESENT <-> DELETED
    TwoWay,
    /// No flag; delete removes the row
    Untracked,
}

/// Position of a row on the two-way (`is_deleted`) machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Present,
    Deleted,
}

/// Storage-level effect of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteEffect {
    /// `SET is_active = FALSE`
    Deactivate,
    /// `SET is_deleted = TRUE`, and `is_active = FALSE` alongside when the row has one
    MarkDeleted { deactivate: bool },
    /// `DELETE`
    Remove,
}

pub fn delete_effect(kind: EntityKind) -> DeleteEffect {
    match kind.lifecycle() {
        Lifecycle::OneWay => DeleteEffect::Deactivate,
        Lifecycle::TwoWay => DeleteEffect::MarkDeleted {
            deactivate: kind == EntityKind::TrainerMemberLink,
        },
        Lifecycle::Untracked => DeleteEffect::Remove,
    }
}

/// Whether a restore also flips `is_active` back on
pub fn restore_reactivates(kind: EntityKind) -> bool {
    kind == EntityKind::TrainerMemberLink
}

pub fn supports_restore(kind: EntityKind) -> bool {
    kind.lifecycle() == Lifecycle::TwoWay
}

/// State after a restore
///
/// Only a DELETED row can be restored; anything else reads as not found so a
/// second restore of the same row fails the same way a missing row does.
pub fn after_restore(
    kind: EntityKind,
    id: Snowflake,
    state: LifecycleState,
) -> Result<LifecycleState, DomainError> {
    if supports_restore(kind) && state == LifecycleState::Deleted {
        Ok(LifecycleState::Present)
    } else {
        Err(DomainError::not_found(kind.name(), id))
    }
}
