//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{
    bmi, exercises, health, member_progress, memberships, nutrition_plans, plan_exercises,
    trainer_members, users, workout_logs, workout_plans, workout_sessions,
};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(trainer_member_routes())
        .merge(membership_routes())
        .merge(exercise_routes())
        .merge(workout_plan_routes())
        .merge(plan_exercise_routes())
        .merge(workout_log_routes())
        .merge(progress_routes())
        .merge(session_routes())
        .merge(nutrition_plan_routes())
        .route("/bmi/recommendations", get(bmi::recommendations))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/deleted", get(users::list_deleted_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/restore", post(users::restore_user))
        .route("/users/:id/permanent", delete(users::purge_user))
}

fn trainer_member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/trainer-members",
            get(trainer_members::list_links).post(trainer_members::create_link),
        )
        .route(
            "/trainer-members/:id",
            get(trainer_members::get_link)
                .patch(trainer_members::update_link)
                .delete(trainer_members::delete_link),
        )
        .route("/trainer-members/:id/restore", post(trainer_members::restore_link))
}

fn membership_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/memberships",
            get(memberships::list_memberships).post(memberships::create_membership),
        )
        .route(
            "/memberships/:id",
            get(memberships::get_membership)
                .patch(memberships::update_membership)
                .delete(memberships::delete_membership),
        )
}

fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/exercises",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route(
            "/exercises/:id",
            get(exercises::get_exercise)
                .patch(exercises::update_exercise)
                .delete(exercises::delete_exercise),
        )
}

fn workout_plan_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workout-plans",
            get(workout_plans::list_workout_plans).post(workout_plans::create_workout_plan),
        )
        .route(
            "/workout-plans/:id",
            get(workout_plans::get_workout_plan)
                .patch(workout_plans::update_workout_plan)
                .delete(workout_plans::delete_workout_plan),
        )
}

fn plan_exercise_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workout-plan-exercises",
            get(plan_exercises::list_plan_exercises).post(plan_exercises::create_plan_exercise),
        )
        .route(
            "/workout-plan-exercises/:id",
            get(plan_exercises::get_plan_exercise)
                .patch(plan_exercises::update_plan_exercise)
                .delete(plan_exercises::delete_plan_exercise),
        )
}

fn workout_log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workout-logs",
            get(workout_logs::list_workout_logs).post(workout_logs::create_workout_log),
        )
        .route(
            "/workout-logs/:id",
            get(workout_logs::get_workout_log)
                .patch(workout_logs::update_workout_log)
                .delete(workout_logs::delete_workout_log),
        )
}

fn progress_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/member-progress",
            get(member_progress::list_progress_entries)
                .post(member_progress::create_progress_entry),
        )
        .route(
            "/member-progress/:id",
            get(member_progress::get_progress_entry)
                .patch(member_progress::update_progress_entry)
                .delete(member_progress::delete_progress_entry),
        )
}

fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workout-sessions",
            get(workout_sessions::list_workout_sessions)
                .post(workout_sessions::create_workout_session),
        )
        .route(
            "/workout-sessions/:id",
            get(workout_sessions::get_workout_session)
                .patch(workout_sessions::update_workout_session)
                .delete(workout_sessions::delete_workout_session),
        )
}

fn nutrition_plan_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/nutrition-plans",
            get(nutrition_plans::list_nutrition_plans)
                .post(nutrition_plans::create_nutrition_plan),
        )
        .route(
            "/nutrition-plans/:id",
            get(nutrition_plans::get_nutrition_plan)
                .patch(nutrition_plans::update_nutrition_plan)
                .delete(nutrition_plans::delete_nutrition_plan),
        )
}
