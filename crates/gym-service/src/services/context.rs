//! Service context - dependency container for services
//!
//! Holds the repositories and shared helpers every service needs.

use std::sync::Arc;

use gym_common::auth::JwtService;
use gym_core::traits::{
    ActorRepository, ExerciseRepository, MembershipRepository, NutritionPlanRepository,
    PlanExerciseRepository, ProgressRepository, TrainerLinkRepository, WorkoutLogRepository,
    WorkoutPlanRepository, WorkoutSessionRepository,
};
use gym_core::{Snowflake, SnowflakeGenerator};
use gym_db::{
    PgActorRepository, PgExerciseRepository, PgMembershipRepository, PgNutritionPlanRepository,
    PgPlanExerciseRepository, PgPool, PgProgressRepository, PgTrainerLinkRepository,
    PgWorkoutLogRepository, PgWorkoutPlanRepository, PgWorkoutSessionRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Repository set behind the services
#[derive(Clone)]
pub struct Repositories {
    pub actors: Arc<dyn ActorRepository>,
    pub links: Arc<dyn TrainerLinkRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
    pub workout_plans: Arc<dyn WorkoutPlanRepository>,
    pub plan_exercises: Arc<dyn PlanExerciseRepository>,
    pub workout_logs: Arc<dyn WorkoutLogRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub sessions: Arc<dyn WorkoutSessionRepository>,
    pub nutrition_plans: Arc<dyn NutritionPlanRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            actors: Arc::new(PgActorRepository::new(pool.clone())),
            links: Arc::new(PgTrainerLinkRepository::new(pool.clone())),
            memberships: Arc::new(PgMembershipRepository::new(pool.clone())),
            exercises: Arc::new(PgExerciseRepository::new(pool.clone())),
            workout_plans: Arc::new(PgWorkoutPlanRepository::new(pool.clone())),
            plan_exercises: Arc::new(PgPlanExerciseRepository::new(pool.clone())),
            workout_logs: Arc::new(PgWorkoutLogRepository::new(pool.clone())),
            progress: Arc::new(PgProgressRepository::new(pool.clone())),
            sessions: Arc::new(PgWorkoutSessionRepository::new(pool.clone())),
            nutrition_plans: Arc::new(PgNutritionPlanRepository::new(pool.clone())),
        }
    }
}

/// Service context containing all dependencies
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    repos: Repositories,
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        pool: PgPool,
        repos: Repositories,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            repos,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn actor_repo(&self) -> &dyn ActorRepository {
        self.repos.actors.as_ref()
    }

    pub fn link_repo(&self) -> &dyn TrainerLinkRepository {
        self.repos.links.as_ref()
    }

    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.repos.memberships.as_ref()
    }

    pub fn exercise_repo(&self) -> &dyn ExerciseRepository {
        self.repos.exercises.as_ref()
    }

    pub fn workout_plan_repo(&self) -> &dyn WorkoutPlanRepository {
        self.repos.workout_plans.as_ref()
    }

    pub fn plan_exercise_repo(&self) -> &dyn PlanExerciseRepository {
        self.repos.plan_exercises.as_ref()
    }

    pub fn workout_log_repo(&self) -> &dyn WorkoutLogRepository {
        self.repos.workout_logs.as_ref()
    }

    pub fn progress_repo(&self) -> &dyn ProgressRepository {
        self.repos.progress.as_ref()
    }

    pub fn session_repo(&self) -> &dyn WorkoutSessionRepository {
        self.repos.sessions.as_ref()
    }

    pub fn nutrition_plan_repo(&self) -> &dyn NutritionPlanRepository {
        self.repos.nutrition_plans.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories default to the PostgreSQL implementations over `pool`.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    repos: Option<Repositories>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn repositories(mut self, repos: Repositories) -> Self {
        self.repos = Some(repos);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;
        let repos = self
            .repos
            .unwrap_or_else(|| Repositories::postgres(&pool));

        Ok(ServiceContext::new(
            pool,
            repos,
            self.jwt_service
                .ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::internal("snowflake_generator is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_pool() {
        let result = ServiceContextBuilder::new()
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .build();
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
