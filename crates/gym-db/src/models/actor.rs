//! Actor database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
///
/// `password_hash` is deliberately absent; it is only ever written.
#[derive(Debug, Clone, FromRow)]
pub struct ActorModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub bio: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
    pub is_super: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal row used to resolve an authenticated caller
#[derive(Debug, Clone, FromRow)]
pub struct CallerModel {
    pub id: i64,
    pub role: String,
    pub is_super: bool,
}
