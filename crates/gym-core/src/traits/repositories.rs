//! Repository traits (ports) - define the interface for data access
//!
//! Every read takes the caller's [`RowScope`] so visibility is applied in the
//! query itself. Writes that carry cross-row invariants run the guards from
//! [`crate::policy::guards`] inside their own transaction.

use async_trait::async_trait;

use crate::entities::{
    Actor, Exercise, ExerciseCategory, Goal, MemberProgress, Membership, NutritionPlan,
    TrainerMemberLink, WorkoutLog, WorkoutPlan, WorkoutPlanExercise, WorkoutSession,
};
use crate::error::DomainError;
use crate::policy::{CalorieRange, RowScope};
use crate::value_objects::{Caller, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Keyset pagination over ascending ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub after: Option<Snowflake>,
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            after: None,
            limit: 50,
        }
    }
}

// ============================================================================
// Actor Repository
// ============================================================================

#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Find actor by ID within scope
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<Actor>>;

    /// Find actor by username, deleted or not
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Actor>>;

    /// List actors within scope
    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<Actor>>;

    /// List soft-deleted actors
    async fn list_deleted(&self, query: ListQuery) -> RepoResult<Vec<Actor>>;

    /// Resolve an authenticated caller; deleted actors resolve to `None`
    async fn find_caller(&self, id: Snowflake) -> RepoResult<Option<Caller>>;

    /// Create a new actor
    async fn create(&self, actor: &Actor, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields, role and super flag, and the password hash when given
    async fn update(&self, actor: &Actor, password_hash: Option<&str>) -> RepoResult<()>;

    /// Soft delete an actor
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Undo a soft delete; only matches deleted rows
    async fn restore(&self, id: Snowflake) -> RepoResult<()>;

    /// Remove the row for good
    async fn purge(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Trainer-Member Link Repository
// ============================================================================

#[async_trait]
pub trait TrainerLinkRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope)
        -> RepoResult<Option<TrainerMemberLink>>;

    async fn list(&self, scope: &RowScope, query: ListQuery)
        -> RepoResult<Vec<TrainerMemberLink>>;

    /// Member ids of the trainer's active, non-deleted links
    async fn assigned_members(&self, trainer_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Create a link after checking both parties' roles
    async fn create(&self, link: &TrainerMemberLink) -> RepoResult<()>;

    /// Update notes and active flag
    async fn update(&self, link: &TrainerMemberLink) -> RepoResult<()>;

    /// Soft delete and deactivate
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Undelete and reactivate; only matches deleted rows
    async fn restore(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<Membership>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<Membership>>;

    /// Create a membership, enforcing a single active membership per member
    async fn create(&self, membership: &Membership) -> RepoResult<()>;

    /// Update a membership, re-checking the active invariant when activating
    async fn update(&self, membership: &Membership) -> RepoResult<()>;

    /// Deactivate
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Exercise Repository
// ============================================================================

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<Exercise>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<Exercise>>;

    /// Exercises in any of the given categories
    async fn recommended(
        &self,
        scope: &RowScope,
        categories: &[ExerciseCategory],
        limit: i64,
    ) -> RepoResult<Vec<Exercise>>;

    async fn create(&self, exercise: &Exercise) -> RepoResult<()>;

    async fn update(&self, exercise: &Exercise) -> RepoResult<()>;

    /// Deactivate
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Workout Plan Repository
// ============================================================================

#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<WorkoutPlan>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<WorkoutPlan>>;

    /// Plans whose goal is any of `goals`
    async fn recommended(
        &self,
        scope: &RowScope,
        goals: &[Goal],
        limit: i64,
    ) -> RepoResult<Vec<WorkoutPlan>>;

    /// Create a plan after checking trainer and member roles
    async fn create(&self, plan: &WorkoutPlan) -> RepoResult<()>;

    async fn update(&self, plan: &WorkoutPlan) -> RepoResult<()>;

    /// Deactivate
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Workout Plan Exercise Repository
// ============================================================================

#[async_trait]
pub trait PlanExerciseRepository: Send + Sync {
    /// Scope is evaluated against the parent plan
    async fn find(&self, id: Snowflake, scope: &RowScope)
        -> RepoResult<Option<WorkoutPlanExercise>>;

    /// List entries, optionally for one plan, ordered by plan then position
    async fn list(
        &self,
        scope: &RowScope,
        workout_plan_id: Option<Snowflake>,
        query: ListQuery,
    ) -> RepoResult<Vec<WorkoutPlanExercise>>;

    async fn create(&self, entry: &WorkoutPlanExercise) -> RepoResult<()>;

    async fn update(&self, entry: &WorkoutPlanExercise) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Activity Record Repositories
// ============================================================================

#[async_trait]
pub trait WorkoutLogRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<WorkoutLog>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<WorkoutLog>>;

    /// Create a log after checking the member's role
    async fn create(&self, log: &WorkoutLog) -> RepoResult<()>;

    async fn update(&self, log: &WorkoutLog) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<MemberProgress>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<MemberProgress>>;

    async fn create(&self, progress: &MemberProgress) -> RepoResult<()>;

    async fn update(&self, progress: &MemberProgress) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

#[async_trait]
pub trait WorkoutSessionRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<WorkoutSession>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<WorkoutSession>>;

    async fn create(&self, session: &WorkoutSession) -> RepoResult<()>;

    async fn update(&self, session: &WorkoutSession) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Nutrition Plan Repository
// ============================================================================

#[async_trait]
pub trait NutritionPlanRepository: Send + Sync {
    async fn find(&self, id: Snowflake, scope: &RowScope) -> RepoResult<Option<NutritionPlan>>;

    async fn list(&self, scope: &RowScope, query: ListQuery) -> RepoResult<Vec<NutritionPlan>>;

    /// Plans whose calories fall inside `calories`
    async fn recommended(
        &self,
        scope: &RowScope,
        calories: CalorieRange,
        limit: i64,
    ) -> RepoResult<Vec<NutritionPlan>>;

    /// Create a plan after checking trainer and member roles
    async fn create(&self, plan: &NutritionPlan) -> RepoResult<()>;

    async fn update(&self, plan: &NutritionPlan) -> RepoResult<()>;

    /// Deactivate
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
