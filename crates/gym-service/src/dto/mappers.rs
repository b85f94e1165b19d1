//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use gym_core::entities::{
    Actor, Exercise, MemberProgress, Membership, NutritionPlan, TrainerMemberLink, WorkoutLog,
    WorkoutPlan, WorkoutPlanExercise, WorkoutSession,
};

use super::responses::{
    ActorResponse, ExerciseResponse, MembershipResponse, NutritionPlanResponse,
    PlanExerciseResponse, ProgressResponse, TrainerLinkResponse, WorkoutLogResponse,
    WorkoutPlanResponse, WorkoutSessionResponse,
};

/// Implements the owned conversion in terms of the borrowed one
macro_rules! from_owned {
    ($($entity:ty => $dto:ty),+ $(,)?) => {
        $(
            impl From<$entity> for $dto {
                fn from(value: $entity) -> Self {
                    Self::from(&value)
                }
            }
        )+
    };
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Actor> for ActorResponse {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.to_string(),
            username: actor.username.clone(),
            email: actor.email.clone(),
            first_name: actor.first_name.clone(),
            last_name: actor.last_name.clone(),
            role: actor.role,
            bio: actor.bio.clone(),
            gender: actor.gender,
            phone: actor.phone.clone(),
            weight: actor.weight,
            height: actor.height,
            age: actor.age,
            profile_image: actor.profile_image.clone(),
            is_super: actor.is_super,
            is_deleted: actor.is_deleted,
            created_at: actor.created_at,
            updated_at: actor.updated_at,
        }
    }
}

// ============================================================================
// Assignment Mappers
// ============================================================================

impl From<&TrainerMemberLink> for TrainerLinkResponse {
    fn from(link: &TrainerMemberLink) -> Self {
        Self {
            id: link.id.to_string(),
            trainer_id: link.trainer_id.to_string(),
            member_id: link.member_id.to_string(),
            assigned_date: link.assigned_date,
            notes: link.notes.clone(),
            is_active: link.is_active,
            is_deleted: link.is_deleted,
        }
    }
}

impl From<&Membership> for MembershipResponse {
    fn from(membership: &Membership) -> Self {
        Self {
            id: membership.id.to_string(),
            member_id: membership.member_id.to_string(),
            plan_type: membership.plan_type,
            start_date: membership.start_date,
            end_date: membership.end_date,
            is_active: membership.is_active,
            created_at: membership.created_at,
        }
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.to_string(),
            name: exercise.name.clone(),
            category: exercise.category,
            description: exercise.description.clone(),
            instructions: exercise.instructions.clone(),
            muscle_groups: exercise.muscle_groups.clone(),
            equipment_needed: exercise.equipment_needed.clone(),
            difficulty_level: exercise.difficulty_level,
            calories_per_minute: exercise.calories_per_minute,
            exercise_image: exercise.exercise_image.clone(),
            video_url: exercise.video_url.clone(),
            is_active: exercise.is_active,
            created_at: exercise.created_at,
        }
    }
}

impl From<&WorkoutPlan> for WorkoutPlanResponse {
    fn from(plan: &WorkoutPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            trainer_id: plan.trainer_id.to_string(),
            member_id: plan.member_id.to_string(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            goal: plan.goal,
            day_of_week: plan.day_of_week,
            duration_weeks: plan.duration_weeks,
            calories_target: plan.calories_target,
            is_active: plan.is_active,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

impl From<&WorkoutPlanExercise> for PlanExerciseResponse {
    fn from(entry: &WorkoutPlanExercise) -> Self {
        Self {
            id: entry.id.to_string(),
            workout_plan_id: entry.workout_plan_id.to_string(),
            exercise_id: entry.exercise_id.to_string(),
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight,
            rest_time_seconds: entry.rest_time_seconds,
            order: entry.order,
            notes: entry.notes.clone(),
        }
    }
}

impl From<&NutritionPlan> for NutritionPlanResponse {
    fn from(plan: &NutritionPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            trainer_id: plan.trainer_id.to_string(),
            member_id: plan.member_id.to_string(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            meal_type: plan.meal_type,
            calories: plan.calories,
            protein_grams: plan.protein_grams,
            carbs_grams: plan.carbs_grams,
            fat_grams: plan.fat_grams,
            meal_details: plan.meal_details.clone(),
            is_active: plan.is_active,
            created_at: plan.created_at,
        }
    }
}

// ============================================================================
// Activity Mappers
// ============================================================================

impl From<&WorkoutLog> for WorkoutLogResponse {
    fn from(log: &WorkoutLog) -> Self {
        Self {
            id: log.id.to_string(),
            member_id: log.member_id.to_string(),
            workout_plan_id: log.workout_plan_id.map(|id| id.to_string()),
            exercise_id: log.exercise_id.to_string(),
            date: log.date,
            sets_completed: log.sets_completed,
            reps_completed: log.reps_completed,
            weight_used: log.weight_used,
            notes: log.notes.clone(),
            duration_minutes: log.duration_minutes,
        }
    }
}

impl From<&MemberProgress> for ProgressResponse {
    fn from(progress: &MemberProgress) -> Self {
        Self {
            id: progress.id.to_string(),
            member_id: progress.member_id.to_string(),
            weight: progress.weight,
            body_fat_percentage: progress.body_fat_percentage,
            muscle_mass: progress.muscle_mass,
            measurements: progress.measurements.clone(),
            progress_photo: progress.progress_photo.clone(),
            notes: progress.notes.clone(),
            recorded_date: progress.recorded_date,
        }
    }
}

impl From<&WorkoutSession> for WorkoutSessionResponse {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            id: session.id.to_string(),
            member_id: session.member_id.to_string(),
            workout_plan_id: session.workout_plan_id.to_string(),
            start_time: session.start_time,
            end_time: session.end_time,
            duration_minutes: session.duration_minutes(),
            total_calories_burned: session.total_calories_burned,
            completed: session.completed,
            rating: session.rating,
            feedback: session.feedback.clone(),
            created_at: session.created_at,
        }
    }
}

from_owned! {
    Actor => ActorResponse,
    TrainerMemberLink => TrainerLinkResponse,
    Membership => MembershipResponse,
    Exercise => ExerciseResponse,
    WorkoutPlan => WorkoutPlanResponse,
    WorkoutPlanExercise => PlanExerciseResponse,
    NutritionPlan => NutritionPlanResponse,
    WorkoutLog => WorkoutLogResponse,
    MemberProgress => ProgressResponse,
    WorkoutSession => WorkoutSessionResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use gym_core::{Role, Snowflake};

    #[test]
    fn test_actor_ids_are_strings() {
        let actor = Actor::new(
            Snowflake::new(123456789012345678),
            "jdoe".to_string(),
            "jdoe@example.com".to_string(),
            Role::Member,
        );
        let json = serde_json::to_value(ActorResponse::from(&actor)).unwrap();
        assert_eq!(json["id"], "123456789012345678");
        assert_eq!(json["role"], "member");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_session_exposes_duration() {
        let start = Utc::now();
        let session = WorkoutSession {
            id: Snowflake::new(1),
            member_id: Snowflake::new(2),
            workout_plan_id: Snowflake::new(3),
            start_time: start,
            end_time: Some(start + Duration::minutes(45)),
            total_calories_burned: Some(350),
            completed: true,
            rating: Some(4),
            feedback: None,
            created_at: start,
        };
        let response = WorkoutSessionResponse::from(session);
        assert_eq!(response.duration_minutes, Some(45));
        assert_eq!(response.workout_plan_id, "3");
    }
}
