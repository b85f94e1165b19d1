//! Cross-row invariant checks
//!
//! These are pure decisions over facts the storage layer loads inside the
//! write transaction, under row locks, right before it writes.

use crate::entities::ActorRef;
use crate::error::DomainError;
use crate::value_objects::{Role, Snowflake};

/// The referenced actor must exist, be present, and hold `expected`
///
/// A missing actor is a validation error on `field`; a deleted actor or one
/// with another role is a conflict.
pub fn require_role(
    field: &'static str,
    id: Snowflake,
    actor: Option<&ActorRef>,
    expected: Role,
) -> Result<(), DomainError> {
    let Some(actor) = actor else {
        return Err(DomainError::invalid_field(
            field,
            format!("user {id} does not exist"),
        ));
    };

    if actor.is_deleted {
        return Err(DomainError::DeletedActor { field });
    }

    if actor.role != Some(expected) {
        return Err(DomainError::RoleMismatch {
            field,
            expected: expected.as_str(),
        });
    }

    Ok(())
}

/// Trainer/member pairing used by links, workout plans and nutrition plans
pub fn check_assignment(
    trainer_id: Snowflake,
    trainer: Option<&ActorRef>,
    member_id: Snowflake,
    member: Option<&ActorRef>,
) -> Result<(), DomainError> {
    if trainer_id == member_id {
        return Err(DomainError::SelfAssignment);
    }
    require_role("trainer_id", trainer_id, trainer, Role::Trainer)?;
    require_role("member_id", member_id, member, Role::Member)
}

/// Member-only reference used by memberships and activity records
pub fn check_member(member_id: Snowflake, member: Option<&ActorRef>) -> Result<(), DomainError> {
    require_role("member_id", member_id, member, Role::Member)
}

/// At most one active membership per member
///
/// `other_active` is any active membership of the member other than the row
/// being written. Inactive candidates never conflict.
pub fn check_single_active(
    member_id: Snowflake,
    candidate_active: bool,
    other_active: Option<Snowflake>,
) -> Result<(), DomainError> {
    if candidate_active && other_active.is_some() {
        return Err(DomainError::ActiveMembershipExists(member_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: i64, role: Role) -> ActorRef {
        ActorRef {
            id: Snowflake::new(id),
            role: Some(role),
            is_deleted: false,
        }
    }

    #[test]
    fn test_valid_assignment() {
        let t = actor(1, Role::Trainer);
        let m = actor(2, Role::Member);
        assert!(check_assignment(t.id, Some(&t), m.id, Some(&m)).is_ok());
    }

    #[test]
    fn test_trainer_with_member_role_conflicts() {
        let t = actor(1, Role::Member);
        let m = actor(2, Role::Member);
        let err = check_assignment(t.id, Some(&t), m.id, Some(&m)).unwrap_err();
        assert!(err.is_conflict());
        assert!(matches!(err, DomainError::RoleMismatch { field: "trainer_id", .. }));
    }

    #[test]
    fn test_member_with_trainer_role_conflicts() {
        let t = actor(1, Role::Trainer);
        let m = actor(2, Role::Trainer);
        let err = check_assignment(t.id, Some(&t), m.id, Some(&m)).unwrap_err();
        assert!(matches!(err, DomainError::RoleMismatch { field: "member_id", .. }));
    }

    #[test]
    fn test_self_assignment() {
        let t = actor(1, Role::Trainer);
        let err = check_assignment(t.id, Some(&t), t.id, Some(&t)).unwrap_err();
        assert!(matches!(err, DomainError::SelfAssignment));
        assert!(err.is_conflict());
    }

    #[test]
    fn test_missing_actor_is_validation() {
        let err = check_member(Snowflake::new(99), None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_deleted_actor_conflicts() {
        let mut m = actor(2, Role::Member);
        m.is_deleted = true;
        let err = check_member(m.id, Some(&m)).unwrap_err();
        assert!(matches!(err, DomainError::DeletedActor { field: "member_id" }));
    }

    #[test]
    fn test_unknown_role_never_matches() {
        let m = ActorRef {
            id: Snowflake::new(2),
            role: None,
            is_deleted: false,
        };
        assert!(check_member(m.id, Some(&m)).unwrap_err().is_conflict());
    }

    #[test]
    fn test_single_active_membership() {
        let member = Snowflake::new(2);
        assert!(check_single_active(member, true, None).is_ok());
        assert!(check_single_active(member, false, Some(Snowflake::new(8))).is_ok());

        let err = check_single_active(member, true, Some(Snowflake::new(8))).unwrap_err();
        assert!(matches!(err, DomainError::ActiveMembershipExists(id) if id == member));
    }
}
