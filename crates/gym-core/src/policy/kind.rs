//! Entity kinds the policies are keyed by

use super::lifecycle::Lifecycle;

/// Every record type exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Actor,
    TrainerMemberLink,
    Membership,
    WorkoutPlan,
    WorkoutPlanExercise,
    Exercise,
    WorkoutLog,
    MemberProgress,
    WorkoutSession,
    NutritionPlan,
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        Self::Actor,
        Self::TrainerMemberLink,
        Self::Membership,
        Self::WorkoutPlan,
        Self::WorkoutPlanExercise,
        Self::Exercise,
        Self::WorkoutLog,
        Self::MemberProgress,
        Self::WorkoutSession,
        Self::NutritionPlan,
    ];

    /// Human-readable resource name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Actor => "User",
            Self::TrainerMemberLink => "TrainerMember",
            Self::Membership => "Membership",
            Self::WorkoutPlan => "WorkoutPlan",
            Self::WorkoutPlanExercise => "WorkoutPlanExercise",
            Self::Exercise => "Exercise",
            Self::WorkoutLog => "WorkoutLog",
            Self::MemberProgress => "MemberProgress",
            Self::WorkoutSession => "WorkoutSession",
            Self::NutritionPlan => "NutritionPlan",
        }
    }

    pub fn lifecycle(self) -> Lifecycle {
        match self {
            Self::Actor | Self::TrainerMemberLink => Lifecycle::TwoWay,
            Self::Membership | Self::WorkoutPlan | Self::Exercise | Self::NutritionPlan => {
                Lifecycle::OneWay
            }
            Self::WorkoutPlanExercise
            | Self::WorkoutLog
            | Self::MemberProgress
            | Self::WorkoutSession => Lifecycle::Untracked,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
