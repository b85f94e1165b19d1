//! # gym-core
//!
//! Domain layer: entities, value objects, access and lifecycle policies, and
//! repository traits. No dependencies on infrastructure (database, web
//! framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Actor, ActorRef, DayOfWeek, Difficulty, Exercise, ExerciseCategory, Gender, Goal, MealType,
    MemberProgress, Membership, NutritionPlan, PlanType, TrainerMemberLink, WorkoutLog,
    WorkoutPlan, WorkoutPlanExercise, WorkoutSession,
};
pub use error::DomainError;
pub use policy::{Action, EntityKind, RowOwner, RowScope};
pub use traits::{
    ActorRepository, ExerciseRepository, ListQuery, MembershipRepository, NutritionPlanRepository,
    PlanExerciseRepository, ProgressRepository, RepoResult, TrainerLinkRepository,
    WorkoutLogRepository, WorkoutPlanRepository, WorkoutSessionRepository,
};
pub use value_objects::{
    Caller, Role, RoleSet, Snowflake, SnowflakeGenerator, SnowflakeParseError, UnknownChoice,
};
