//! Trainer-member assignment

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Assignment of a member to a trainer
///
/// Unique per `(trainer_id, member_id)`. Only links that are active and not
/// deleted count towards a trainer's assigned members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerMemberLink {
    pub id: Snowflake,
    pub trainer_id: Snowflake,
    pub member_id: Snowflake,
    pub assigned_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl TrainerMemberLink {
    pub fn new(id: Snowflake, trainer_id: Snowflake, member_id: Snowflake) -> Self {
        Self {
            id,
            trainer_id,
            member_id,
            assigned_date: Utc::now(),
            notes: None,
            is_active: true,
            is_deleted: false,
        }
    }

    /// Whether this link grants the trainer access to the member
    #[inline]
    pub fn is_effective(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}
