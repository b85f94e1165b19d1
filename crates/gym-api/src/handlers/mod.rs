//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod bmi;
pub mod exercises;
pub mod health;
pub mod member_progress;
pub mod memberships;
pub mod nutrition_plans;
pub mod plan_exercises;
pub mod trainer_members;
pub mod users;
pub mod workout_logs;
pub mod workout_plans;
pub mod workout_sessions;
