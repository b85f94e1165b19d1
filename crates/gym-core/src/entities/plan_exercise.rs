//! Exercise slot inside a workout plan

use crate::value_objects::Snowflake;

/// One exercise prescription within a plan
///
/// `(workout_plan_id, exercise_id, order)` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlanExercise {
    pub id: Snowflake,
    pub workout_plan_id: Snowflake,
    pub exercise_id: Snowflake,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<f64>,
    pub rest_time_seconds: i32,
    pub order: i32,
    pub notes: Option<String>,
}

impl WorkoutPlanExercise {
    pub const DEFAULT_REST_SECONDS: i32 = 60;
}
