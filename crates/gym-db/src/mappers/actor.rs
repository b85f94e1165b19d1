//! Actor entity <-> model mapper

use gym_core::entities::{Actor, Gender};
use gym_core::error::DomainError;
use gym_core::value_objects::{Caller, Snowflake};

use crate::models::{ActorModel, CallerModel};

impl TryFrom<ActorModel> for Actor {
    type Error = DomainError;

    fn try_from(model: ActorModel) -> Result<Self, Self::Error> {
        Ok(Actor {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            role: model.role.parse()?,
            bio: model.bio,
            gender: model.gender.as_deref().map(str::parse::<Gender>).transpose()?,
            phone: model.phone,
            weight: model.weight,
            height: model.height,
            age: model.age,
            profile_image: model.profile_image,
            is_super: model.is_super,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Unknown role strings resolve to a caller with no role, which sees nothing
impl From<CallerModel> for Caller {
    fn from(model: CallerModel) -> Self {
        Caller::new(
            Snowflake::new(model.id),
            model.role.parse().ok(),
            model.is_super,
        )
    }
}
