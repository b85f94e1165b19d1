//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gym-core.
//! Reads take a [`RowScope`](gym_core::policy::RowScope) and translate it into
//! SQL predicates; guarded writes lock the referenced actor rows inside their
//! transaction before checking roles.

mod actor;
mod error;
mod exercise;
mod lifecycle;
mod locks;
mod membership;
mod nutrition_plan;
mod plan_exercise;
mod progress;
mod scope;
mod trainer_link;
mod workout_log;
mod workout_plan;
mod workout_session;

pub use actor::PgActorRepository;
pub use exercise::PgExerciseRepository;
pub use membership::PgMembershipRepository;
pub use nutrition_plan::PgNutritionPlanRepository;
pub use plan_exercise::PgPlanExerciseRepository;
pub use progress::PgProgressRepository;
pub use scope::MAX_PAGE;
pub use trainer_link::PgTrainerLinkRepository;
pub use workout_log::PgWorkoutLogRepository;
pub use workout_plan::PgWorkoutPlanRepository;
pub use workout_session::PgWorkoutSessionRepository;
