//! # gym-db
//!
//! PostgreSQL persistence for the gym domain via SQLx.
//!
//! - Connection pool and runtime migrations
//! - Row models with `FromRow` derives and their entity mappers
//! - Repository implementations that apply visibility scopes, lifecycle
//!   transitions and in-transaction invariant guards
//!
//! ```rust,ignore
//! use gym_core::policy::RowScope;
//! use gym_core::traits::{ExerciseRepository, ListQuery};
//! use gym_db::{create_pool, PgExerciseRepository};
//!
//! let pool = create_pool(&config.database).await?;
//! let exercises = PgExerciseRepository::new(pool)
//!     .list(&RowScope::unrestricted(), ListQuery::default())
//!     .await?;
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgActorRepository, PgExerciseRepository, PgMembershipRepository, PgNutritionPlanRepository,
    PgPlanExerciseRepository, PgProgressRepository, PgTrainerLinkRepository,
    PgWorkoutLogRepository, PgWorkoutPlanRepository, PgWorkoutSessionRepository,
};
