//! Domain entities - core business objects

mod actor;
mod exercise;
mod membership;
mod nutrition_plan;
mod plan_exercise;
mod progress;
mod trainer_link;
mod workout_log;
mod workout_plan;
mod workout_session;

pub use actor::{Actor, ActorRef, Gender};
pub use exercise::{Difficulty, Exercise, ExerciseCategory};
pub use membership::{Membership, PlanType};
pub use nutrition_plan::{MealType, NutritionPlan};
pub use plan_exercise::WorkoutPlanExercise;
pub use progress::MemberProgress;
pub use trainer_link::TrainerMemberLink;
pub use workout_log::WorkoutLog;
pub use workout_plan::{DayOfWeek, Goal, WorkoutPlan};
pub use workout_session::WorkoutSession;
