//! Membership entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{string_enum, Snowflake};

string_enum! {
    pub enum PlanType {
        Basic => "basic",
        Quarterly => "quarterly",
        Yearly => "yearly",
    }
}

/// A member's subscription period
///
/// At most one membership per member is active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub id: Snowflake,
    pub member_id: Snowflake,
    pub plan_type: PlanType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    /// Whether `day` falls inside the paid period
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive() {
        let membership = Membership {
            id: Snowflake::new(1),
            member_id: Snowflake::new(2),
            plan_type: PlanType::Quarterly,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            is_active: true,
            created_at: Utc::now(),
        };

        assert!(membership.covers(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(membership.covers(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
        assert!(!membership.covers(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }
}
