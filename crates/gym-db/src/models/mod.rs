//! Database models - SQLx-compatible structs for PostgreSQL tables

mod activity;
mod actor;
mod exercise;
mod membership;
mod nutrition_plan;
mod trainer_link;
mod workout_plan;

pub use activity::{ProgressModel, WorkoutLogModel, WorkoutSessionModel};
pub use actor::{ActorModel, CallerModel};
pub use exercise::ExerciseModel;
pub use membership::MembershipModel;
pub use nutrition_plan::NutritionPlanModel;
pub use trainer_link::TrainerLinkModel;
pub use workout_plan::{PlanExerciseModel, WorkoutPlanModel};
