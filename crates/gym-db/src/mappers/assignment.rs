//! Trainer link and membership mappers

use gym_core::entities::{Membership, TrainerMemberLink};
use gym_core::error::DomainError;
use gym_core::value_objects::Snowflake;

use crate::models::{MembershipModel, TrainerLinkModel};

impl From<TrainerLinkModel> for TrainerMemberLink {
    fn from(model: TrainerLinkModel) -> Self {
        TrainerMemberLink {
            id: Snowflake::new(model.id),
            trainer_id: Snowflake::new(model.trainer_id),
            member_id: Snowflake::new(model.member_id),
            assigned_date: model.assigned_date,
            notes: model.notes,
            is_active: model.is_active,
            is_deleted: model.is_deleted,
        }
    }
}

impl TryFrom<MembershipModel> for Membership {
    type Error = DomainError;

    fn try_from(model: MembershipModel) -> Result<Self, Self::Error> {
        Ok(Membership {
            id: Snowflake::new(model.id),
            member_id: Snowflake::new(model.member_id),
            plan_type: model.plan_type.parse()?,
            start_date: model.start_date,
            end_date: model.end_date,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
