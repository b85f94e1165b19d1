//! Activity record mappers

use gym_core::entities::{MemberProgress, WorkoutLog, WorkoutSession};
use gym_core::value_objects::Snowflake;

use crate::models::{ProgressModel, WorkoutLogModel, WorkoutSessionModel};

impl From<WorkoutLogModel> for WorkoutLog {
    fn from(model: WorkoutLogModel) -> Self {
        WorkoutLog {
            id: Snowflake::new(model.id),
            member_id: Snowflake::new(model.member_id),
            workout_plan_id: model.workout_plan_id.map(Snowflake::new),
            exercise_id: Snowflake::new(model.exercise_id),
            date: model.date,
            sets_completed: model.sets_completed,
            reps_completed: model.reps_completed,
            weight_used: model.weight_used,
            notes: model.notes,
            duration_minutes: model.duration_minutes,
        }
    }
}

impl From<ProgressModel> for MemberProgress {
    fn from(model: ProgressModel) -> Self {
        MemberProgress {
            id: Snowflake::new(model.id),
            member_id: Snowflake::new(model.member_id),
            weight: model.weight,
            body_fat_percentage: model.body_fat_percentage,
            muscle_mass: model.muscle_mass,
            measurements: model.measurements.map(|json| json.0),
            progress_photo: model.progress_photo,
            notes: model.notes,
            recorded_date: model.recorded_date,
        }
    }
}

impl From<WorkoutSessionModel> for WorkoutSession {
    fn from(model: WorkoutSessionModel) -> Self {
        WorkoutSession {
            id: Snowflake::new(model.id),
            member_id: Snowflake::new(model.member_id),
            workout_plan_id: Snowflake::new(model.workout_plan_id),
            start_time: model.start_time,
            end_time: model.end_time,
            total_calories_burned: model.total_calories_burned,
            completed: model.completed,
            rating: model.rating,
            feedback: model.feedback,
            created_at: model.created_at,
        }
    }
}
