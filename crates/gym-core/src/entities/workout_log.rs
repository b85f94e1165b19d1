//! Workout log entry

use chrono::NaiveDate;

use crate::value_objects::Snowflake;

/// A member's record of one performed exercise
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: Snowflake,
    pub member_id: Snowflake,
    pub workout_plan_id: Option<Snowflake>,
    pub exercise_id: Snowflake,
    pub date: NaiveDate,
    pub sets_completed: i32,
    pub reps_completed: i32,
    pub weight_used: Option<f64>,
    pub notes: Option<String>,
    pub duration_minutes: Option<i32>,
}

impl WorkoutLog {
    /// Total lifted volume (sets x reps x weight), when a weight was used
    pub fn volume(&self) -> Option<f64> {
        self.weight_used
            .map(|w| f64::from(self.sets_completed) * f64::from(self.reps_completed) * w)
    }
}
