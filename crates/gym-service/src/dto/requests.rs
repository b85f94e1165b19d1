//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Owner ids the caller leaves out default to the caller in the services.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use gym_core::entities::{
    DayOfWeek, Difficulty, ExerciseCategory, Gender, Goal, MealType, PlanType, WorkoutPlan,
    WorkoutPlanExercise,
};
use gym_core::{Role, Snowflake};
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(invalid("alphabetic", "Name may only contain letters"))
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() >= 10 && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("phone", "Phone number must be at least 10 digits"))
    }
}

fn validate_plan_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() >= 3 {
        Ok(())
    } else {
        Err(invalid("length", "Name must be at least 3 characters"))
    }
}

fn validate_exercise_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() >= 2 {
        Ok(())
    } else {
        Err(invalid("length", "Name must be at least 2 characters"))
    }
}

fn validate_measurements(value: &serde_json::Value) -> Result<(), ValidationError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(invalid("object", "Measurements must be a JSON object"))
    }
}

fn default_true() -> bool {
    true
}

fn default_duration_weeks() -> i32 {
    WorkoutPlan::DEFAULT_DURATION_WEEKS
}

fn default_rest_seconds() -> i32 {
    WorkoutPlanExercise::DEFAULT_REST_SECONDS
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request (admins only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActorRequest {
    #[validate(length(min = 3, max = 150, message = "Username must be 3-150 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(max = 150), custom(function = "validate_person_name"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150), custom(function = "validate_person_name"))]
    pub last_name: String,

    pub role: Role,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    pub gender: Option<Gender>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    /// Kilograms
    #[validate(range(exclusive_min = 0.0, max = 1000.0, message = "Weight must be in (0, 1000]"))]
    pub weight: Option<f64>,

    /// Centimetres
    #[validate(range(exclusive_min = 0.0, max = 300.0, message = "Height must be in (0, 300]"))]
    pub height: Option<f64>,

    #[validate(range(min = 1, max = 150, message = "Age must be 1-150"))]
    pub age: Option<i32>,

    pub profile_image: Option<String>,

    #[serde(default)]
    pub is_super: bool,
}

/// Partial profile update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActorRequest {
    #[validate(length(min = 3, max = 150, message = "Username must be 3-150 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: Option<String>,

    #[validate(length(max = 150), custom(function = "validate_person_name"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150), custom(function = "validate_person_name"))]
    pub last_name: Option<String>,

    /// Admins only
    pub role: Option<Role>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    pub gender: Option<Gender>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(range(exclusive_min = 0.0, max = 1000.0, message = "Weight must be in (0, 1000]"))]
    pub weight: Option<f64>,

    #[validate(range(exclusive_min = 0.0, max = 300.0, message = "Height must be in (0, 300]"))]
    pub height: Option<f64>,

    #[validate(range(min = 1, max = 150, message = "Age must be 1-150"))]
    pub age: Option<i32>,

    pub profile_image: Option<String>,

    /// Super-admins only
    pub is_super: Option<bool>,
}

// ============================================================================
// Assignment Requests
// ============================================================================

/// Assign a member to a trainer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrainerLinkRequest {
    /// Defaults to the caller
    pub trainer_id: Option<Snowflake>,

    pub member_id: Snowflake,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrainerLinkRequest {
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    pub is_active: Option<bool>,
}

fn validate_new_membership(request: &CreateMembershipRequest) -> Result<(), ValidationError> {
    if request.end_date <= request.start_date {
        return Err(invalid("date_order", "End date must be after start date"));
    }
    if request.start_date < Utc::now().date_naive() {
        return Err(invalid("past_date", "Start date cannot be in the past"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_new_membership"))]
pub struct CreateMembershipRequest {
    pub member_id: Snowflake,
    pub plan_type: PlanType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Date order is checked after merging with the stored row
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMembershipRequest {
    pub plan_type: Option<PlanType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

// ============================================================================
// Catalog Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(length(max = 200), custom(function = "validate_exercise_name"))]
    pub name: String,

    pub category: ExerciseCategory,

    pub description: Option<String>,

    pub instructions: Option<String>,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub muscle_groups: String,

    #[validate(length(max = 500))]
    pub equipment_needed: Option<String>,

    #[serde(default)]
    pub difficulty_level: Difficulty,

    #[validate(range(min = 0.0, message = "Calories per minute cannot be negative"))]
    pub calories_per_minute: Option<f64>,

    pub exercise_image: Option<String>,

    #[validate(url(message = "Invalid video URL"))]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExerciseRequest {
    #[validate(length(max = 200), custom(function = "validate_exercise_name"))]
    pub name: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    #[validate(length(max = 500))]
    pub muscle_groups: Option<String>,
    #[validate(length(max = 500))]
    pub equipment_needed: Option<String>,
    pub difficulty_level: Option<Difficulty>,
    #[validate(range(min = 0.0, message = "Calories per minute cannot be negative"))]
    pub calories_per_minute: Option<f64>,
    pub exercise_image: Option<String>,
    #[validate(url(message = "Invalid video URL"))]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkoutPlanRequest {
    /// Defaults to the caller
    pub trainer_id: Option<Snowflake>,

    pub member_id: Snowflake,

    #[validate(length(max = 200), custom(function = "validate_plan_name"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub goal: Goal,

    pub day_of_week: DayOfWeek,

    #[serde(default = "default_duration_weeks")]
    #[validate(range(min = 1, max = 52, message = "Duration must be 1-52 weeks"))]
    pub duration_weeks: i32,

    #[validate(range(min = 1, message = "Calorie target must be positive"))]
    pub calories_target: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkoutPlanRequest {
    #[validate(length(max = 200), custom(function = "validate_plan_name"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub goal: Option<Goal>,
    pub day_of_week: Option<DayOfWeek>,
    #[validate(range(min = 1, max = 52, message = "Duration must be 1-52 weeks"))]
    pub duration_weeks: Option<i32>,
    #[validate(range(min = 1, message = "Calorie target must be positive"))]
    pub calories_target: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlanExerciseRequest {
    pub workout_plan_id: Snowflake,

    pub exercise_id: Snowflake,

    #[validate(range(min = 1, max = 20, message = "Sets must be 1-20"))]
    pub sets: i32,

    #[validate(range(min = 1, max = 100, message = "Reps must be 1-100"))]
    pub reps: i32,

    #[validate(range(min = 0.0, message = "Weight cannot be negative"))]
    pub weight: Option<f64>,

    #[serde(default = "default_rest_seconds")]
    #[validate(range(min = 0, max = 600, message = "Rest time must be 0-600 seconds"))]
    pub rest_time_seconds: i32,

    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order: i32,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlanExerciseRequest {
    pub exercise_id: Option<Snowflake>,
    #[validate(range(min = 1, max = 20, message = "Sets must be 1-20"))]
    pub sets: Option<i32>,
    #[validate(range(min = 1, max = 100, message = "Reps must be 1-100"))]
    pub reps: Option<i32>,
    #[validate(range(min = 0.0, message = "Weight cannot be negative"))]
    pub weight: Option<f64>,
    #[validate(range(min = 0, max = 600, message = "Rest time must be 0-600 seconds"))]
    pub rest_time_seconds: Option<i32>,
    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNutritionPlanRequest {
    /// Defaults to the caller
    pub trainer_id: Option<Snowflake>,

    pub member_id: Snowflake,

    #[validate(length(max = 200), custom(function = "validate_plan_name"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub meal_type: MealType,

    #[validate(range(min = 1, message = "Calories must be positive"))]
    pub calories: i32,

    #[validate(range(min = 0.0, message = "Protein cannot be negative"))]
    pub protein_grams: f64,

    #[validate(range(min = 0.0, message = "Carbs cannot be negative"))]
    pub carbs_grams: f64,

    #[validate(range(min = 0.0, message = "Fat cannot be negative"))]
    pub fat_grams: f64,

    #[serde(default)]
    pub meal_details: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNutritionPlanRequest {
    #[validate(length(max = 200), custom(function = "validate_plan_name"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub meal_type: Option<MealType>,
    #[validate(range(min = 1, message = "Calories must be positive"))]
    pub calories: Option<i32>,
    #[validate(range(min = 0.0, message = "Protein cannot be negative"))]
    pub protein_grams: Option<f64>,
    #[validate(range(min = 0.0, message = "Carbs cannot be negative"))]
    pub carbs_grams: Option<f64>,
    #[validate(range(min = 0.0, message = "Fat cannot be negative"))]
    pub fat_grams: Option<f64>,
    pub meal_details: Option<String>,
}

// ============================================================================
// Activity Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkoutLogRequest {
    /// Defaults to the caller
    pub member_id: Option<Snowflake>,

    pub workout_plan_id: Option<Snowflake>,

    pub exercise_id: Snowflake,

    /// Defaults to today
    pub date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Sets completed must be positive"))]
    pub sets_completed: i32,

    #[validate(range(min = 1, message = "Reps completed must be positive"))]
    pub reps_completed: i32,

    #[validate(range(min = 0.0, message = "Weight used cannot be negative"))]
    pub weight_used: Option<f64>,

    pub notes: Option<String>,

    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkoutLogRequest {
    pub workout_plan_id: Option<Snowflake>,
    pub exercise_id: Option<Snowflake>,
    pub date: Option<NaiveDate>,
    #[validate(range(min = 1, message = "Sets completed must be positive"))]
    pub sets_completed: Option<i32>,
    #[validate(range(min = 1, message = "Reps completed must be positive"))]
    pub reps_completed: Option<i32>,
    #[validate(range(min = 0.0, message = "Weight used cannot be negative"))]
    pub weight_used: Option<f64>,
    pub notes: Option<String>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgressRequest {
    /// Defaults to the caller
    pub member_id: Option<Snowflake>,

    #[validate(range(exclusive_min = 0.0, max = 500.0, message = "Weight must be in (0, 500]"))]
    pub weight: f64,

    #[validate(range(min = 0.0, max = 100.0, message = "Body fat must be 0-100%"))]
    pub body_fat_percentage: Option<f64>,

    #[validate(range(exclusive_min = 0.0, message = "Muscle mass must be positive"))]
    pub muscle_mass: Option<f64>,

    #[validate(custom(function = "validate_measurements"))]
    pub measurements: Option<serde_json::Value>,

    pub progress_photo: Option<String>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProgressRequest {
    #[validate(range(exclusive_min = 0.0, max = 500.0, message = "Weight must be in (0, 500]"))]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "Body fat must be 0-100%"))]
    pub body_fat_percentage: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "Muscle mass must be positive"))]
    pub muscle_mass: Option<f64>,
    #[validate(custom(function = "validate_measurements"))]
    pub measurements: Option<serde_json::Value>,
    pub progress_photo: Option<String>,
    pub notes: Option<String>,
}

fn validate_new_session(request: &CreateWorkoutSessionRequest) -> Result<(), ValidationError> {
    match request.end_time {
        Some(end) if end <= request.start_time => {
            Err(invalid("time_order", "End time must be after start time"))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_new_session"))]
pub struct CreateWorkoutSessionRequest {
    /// Defaults to the caller
    pub member_id: Option<Snowflake>,

    pub workout_plan_id: Snowflake,

    pub start_time: DateTime<Utc>,

    pub end_time: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "Calories burned cannot be negative"))]
    pub total_calories_burned: Option<i32>,

    #[serde(default)]
    pub completed: bool,

    #[validate(range(min = 1, max = 5, message = "Rating must be 1-5"))]
    pub rating: Option<i16>,

    pub feedback: Option<String>,
}

/// Time order is checked after merging with the stored row
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkoutSessionRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[validate(range(min = 0, message = "Calories burned cannot be negative"))]
    pub total_calories_burned: Option<i32>,
    pub completed: Option<bool>,
    #[validate(range(min = 1, max = 5, message = "Rating must be 1-5"))]
    pub rating: Option<i16>,
    pub feedback: Option<String>,
}

// ============================================================================
// Recommendation Query
// ============================================================================

/// Body metrics override; missing values come from the caller's profile
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BmiQuery {
    /// Kilograms
    pub weight: Option<f64>,
    /// Centimetres
    pub height: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_actor_field_rules() {
        let json = serde_json::json!({
            "username": "coach_k",
            "email": "coach@example.com",
            "password": "longenough",
            "first_name": "Kim",
            "last_name": "Lee",
            "role": "trainer",
            "phone": "01012345678",
            "weight": 72.5,
            "height": 180.0,
            "age": 31
        });
        let request: CreateActorRequest = serde_json::from_value(json).unwrap();
        assert!(request.validate().is_ok());

        let mut bad = request.clone();
        bad.phone = Some("010-1234".to_string());
        bad.first_name = "K1m".to_string();
        bad.password = "short".to_string();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_weight_and_height_bounds() {
        let mut update = UpdateActorRequest {
            weight: Some(0.0),
            height: Some(301.0),
            ..Default::default()
        };
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("weight"));
        assert!(errors.field_errors().contains_key("height"));

        update.weight = Some(1000.0);
        update.height = Some(300.0);
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_unknown_role_is_rejected_by_serde() {
        let json = serde_json::json!({
            "username": "x_user", "email": "x@example.com", "password": "longenough",
            "role": "coach"
        });
        assert!(serde_json::from_value::<CreateActorRequest>(json).is_err());
    }

    #[test]
    fn test_membership_dates() {
        let today = Utc::now().date_naive();
        let request = CreateMembershipRequest {
            member_id: Snowflake::new(1),
            plan_type: PlanType::Yearly,
            start_date: today,
            end_date: today + Duration::days(365),
            is_active: true,
        };
        assert!(request.validate().is_ok());

        let reversed = CreateMembershipRequest {
            end_date: today,
            ..request.clone()
        };
        assert!(reversed.validate().is_err());

        let past = CreateMembershipRequest {
            start_date: today - Duration::days(1),
            ..request
        };
        assert!(past.validate().is_err());
    }

    #[test]
    fn test_plan_defaults_and_trimmed_name() {
        let json = serde_json::json!({
            "member_id": "42",
            "name": "  ab  ",
            "goal": "fat_loss",
            "day_of_week": "friday"
        });
        let request: CreateWorkoutPlanRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.duration_weeks, 4);
        assert!(request.trainer_id.is_none());
        assert!(request.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_plan_exercise_ranges() {
        let json = serde_json::json!({
            "workout_plan_id": 1, "exercise_id": 2, "sets": 21, "reps": 10, "order": 0
        });
        let request: CreatePlanExerciseRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.rest_time_seconds, 60);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sets"));
    }

    #[test]
    fn test_session_time_order_and_rating() {
        let start = Utc::now();
        let request = CreateWorkoutSessionRequest {
            member_id: None,
            workout_plan_id: Snowflake::new(3),
            start_time: start,
            end_time: Some(start - Duration::minutes(5)),
            total_calories_burned: Some(300),
            completed: true,
            rating: Some(6),
            feedback: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_measurements_must_be_object() {
        let request = CreateProgressRequest {
            member_id: None,
            weight: 80.0,
            body_fat_percentage: Some(18.0),
            muscle_mass: None,
            measurements: Some(serde_json::json!([1, 2])),
            progress_photo: None,
            notes: None,
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("measurements"));
    }
}
