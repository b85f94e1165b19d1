mod repositories;

pub use repositories::{
    ActorRepository, ExerciseRepository, ListQuery, MembershipRepository, NutritionPlanRepository,
    PlanExerciseRepository, ProgressRepository, RepoResult, TrainerLinkRepository,
    WorkoutLogRepository, WorkoutPlanRepository, WorkoutSessionRepository,
};
