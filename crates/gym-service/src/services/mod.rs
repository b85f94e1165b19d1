//! Business logic services
//!
//! One service per resource. Every method takes the resolved [`gym_core::Caller`]
//! and applies the access policies before touching a repository.

pub mod access;
pub mod activity;
pub mod actor;
pub mod auth;
pub mod context;
pub mod error;
pub mod exercise;
pub mod membership;
pub mod nutrition_plan;
pub mod plan_exercise;
pub mod recommendation;
pub mod trainer_link;
pub mod workout_plan;

pub use access::{Access, ListOptions};
pub use activity::{ProgressService, WorkoutLogService, WorkoutSessionService};
pub use actor::ActorService;
pub use auth::AuthService;
pub use context::{Repositories, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use exercise::ExerciseService;
pub use membership::MembershipService;
pub use nutrition_plan::NutritionPlanService;
pub use plan_exercise::PlanExerciseService;
pub use recommendation::RecommendationService;
pub use trainer_link::TrainerLinkService;
pub use workout_plan::WorkoutPlanService;
