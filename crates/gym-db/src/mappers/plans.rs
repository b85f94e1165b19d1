//! Workout plan, plan exercise, nutrition plan and exercise mappers

use gym_core::entities::{Exercise, NutritionPlan, WorkoutPlan, WorkoutPlanExercise};
use gym_core::error::DomainError;
use gym_core::value_objects::Snowflake;

use crate::models::{ExerciseModel, NutritionPlanModel, PlanExerciseModel, WorkoutPlanModel};

impl TryFrom<WorkoutPlanModel> for WorkoutPlan {
    type Error = DomainError;

    fn try_from(model: WorkoutPlanModel) -> Result<Self, Self::Error> {
        Ok(WorkoutPlan {
            id: Snowflake::new(model.id),
            trainer_id: Snowflake::new(model.trainer_id),
            member_id: Snowflake::new(model.member_id),
            name: model.name,
            description: model.description,
            goal: model.goal.parse()?,
            day_of_week: model.day_of_week.parse()?,
            duration_weeks: model.duration_weeks,
            calories_target: model.calories_target,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<PlanExerciseModel> for WorkoutPlanExercise {
    fn from(model: PlanExerciseModel) -> Self {
        WorkoutPlanExercise {
            id: Snowflake::new(model.id),
            workout_plan_id: Snowflake::new(model.workout_plan_id),
            exercise_id: Snowflake::new(model.exercise_id),
            sets: model.sets,
            reps: model.reps,
            weight: model.weight,
            rest_time_seconds: model.rest_time_seconds,
            order: model.order,
            notes: model.notes,
        }
    }
}

impl TryFrom<NutritionPlanModel> for NutritionPlan {
    type Error = DomainError;

    fn try_from(model: NutritionPlanModel) -> Result<Self, Self::Error> {
        Ok(NutritionPlan {
            id: Snowflake::new(model.id),
            trainer_id: Snowflake::new(model.trainer_id),
            member_id: Snowflake::new(model.member_id),
            name: model.name,
            description: model.description,
            meal_type: model.meal_type.parse()?,
            calories: model.calories,
            protein_grams: model.protein_grams,
            carbs_grams: model.carbs_grams,
            fat_grams: model.fat_grams,
            meal_details: model.meal_details,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<ExerciseModel> for Exercise {
    type Error = DomainError;

    fn try_from(model: ExerciseModel) -> Result<Self, Self::Error> {
        Ok(Exercise {
            id: Snowflake::new(model.id),
            name: model.name,
            category: model.category.parse()?,
            description: model.description,
            instructions: model.instructions,
            muscle_groups: model.muscle_groups,
            equipment_needed: model.equipment_needed,
            difficulty_level: model.difficulty_level.parse()?,
            calories_per_minute: model.calories_per_minute,
            exercise_image: model.exercise_image,
            video_url: model.video_url,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gym_core::entities::{DayOfWeek, Goal};

    #[test]
    fn test_plan_vocabulary_parses() {
        let plan = WorkoutPlan::try_from(WorkoutPlanModel {
            id: 1,
            trainer_id: 2,
            member_id: 3,
            name: "Cut".to_string(),
            description: String::new(),
            goal: "fat_loss".to_string(),
            day_of_week: "monday".to_string(),
            duration_weeks: 4,
            calories_target: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();

        assert_eq!(plan.goal, Goal::FatLoss);
        assert_eq!(plan.day_of_week, DayOfWeek::Monday);
    }

    #[test]
    fn test_bad_category_is_an_error() {
        let result = Exercise::try_from(ExerciseModel {
            id: 1,
            name: "Row".to_string(),
            category: "arms".to_string(),
            description: None,
            instructions: None,
            muscle_groups: String::new(),
            equipment_needed: None,
            difficulty_level: "beginner".to_string(),
            calories_per_minute: None,
            exercise_image: None,
            video_url: None,
            is_active: true,
            created_at: Utc::now(),
        });

        assert!(matches!(result, Err(DomainError::UnknownChoice(_))));
    }
}
