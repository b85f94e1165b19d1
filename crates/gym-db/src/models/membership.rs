//! Membership database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub id: i64,
    pub member_id: i64,
    /// 'basic', 'quarterly' or 'yearly'
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
