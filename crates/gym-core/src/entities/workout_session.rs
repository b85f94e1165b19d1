//! Workout session entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// One gym visit following a workout plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: Snowflake,
    pub member_id: Snowflake,
    pub workout_plan_id: Snowflake,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_calories_burned: Option<i32>,
    pub completed: bool,
    pub rating: Option<i16>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// Whole minutes between start and end, once the session has ended
    pub fn duration_minutes(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_duration_minutes() {
        let start = Utc::now();
        let mut session = WorkoutSession {
            id: Snowflake::new(1),
            member_id: Snowflake::new(2),
            workout_plan_id: Snowflake::new(3),
            start_time: start,
            end_time: None,
            total_calories_burned: None,
            completed: false,
            rating: None,
            feedback: None,
            created_at: start,
        };
        assert_eq!(session.duration_minutes(), None);

        session.end_time = Some(start + Duration::seconds(95 * 60 + 30));
        assert_eq!(session.duration_minutes(), Some(95));
    }
}
