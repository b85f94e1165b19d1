//! Trainer-member link database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TrainerLinkModel {
    pub id: i64,
    pub trainer_id: i64,
    pub member_id: i64,
    pub assigned_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
}
