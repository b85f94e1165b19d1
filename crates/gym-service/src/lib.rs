//! # gym-service
//!
//! Application layer: per-resource services, request validation, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ActorService, AuthService, ExerciseService, ListOptions, MembershipService,
    NutritionPlanService, PlanExerciseService, ProgressService, RecommendationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TrainerLinkService,
    WorkoutLogService, WorkoutPlanService, WorkoutSessionService,
};
