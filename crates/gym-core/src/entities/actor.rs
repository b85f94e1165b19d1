//! Actor entity - a user account with a gym role

use chrono::{DateTime, Utc};

use crate::value_objects::{string_enum, Role, Snowflake};

string_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

/// A user of the system: admin, trainer or member
///
/// `is_super` is independent of `role` and overrides every role-based check.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimetres
    pub height: Option<f64>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
    pub is_super: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Actor {
    pub fn new(id: Snowflake, username: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            first_name: String::new(),
            last_name: String::new(),
            role,
            bio: None,
            gender: None,
            phone: None,
            weight: None,
            height: None,
            age: None,
            profile_image: None,
            is_super: false,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Weight in kg and height in metres, when both are on file
    pub fn body_metrics(&self) -> Option<(f64, f64)> {
        match (self.weight, self.height) {
            (Some(weight), Some(height_cm)) => Some((weight, height_cm / 100.0)),
            _ => None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Role facts about a referenced actor, as loaded by the invariant guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorRef {
    pub id: Snowflake,
    pub role: Option<Role>,
    pub is_deleted: bool,
}

impl From<&Actor> for ActorRef {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id,
            role: Some(actor.role),
            is_deleted: actor.is_deleted,
        }
    }
}
