//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BmiQuery, CreateActorRequest, CreateExerciseRequest, CreateMembershipRequest,
    CreateNutritionPlanRequest, CreatePlanExerciseRequest, CreateProgressRequest,
    CreateTrainerLinkRequest, CreateWorkoutLogRequest, CreateWorkoutPlanRequest,
    CreateWorkoutSessionRequest, UpdateActorRequest, UpdateExerciseRequest,
    UpdateMembershipRequest, UpdateNutritionPlanRequest, UpdatePlanExerciseRequest,
    UpdateProgressRequest, UpdateTrainerLinkRequest, UpdateWorkoutLogRequest,
    UpdateWorkoutPlanRequest, UpdateWorkoutSessionRequest,
};

pub use responses::{
    ActorResponse, ExerciseResponse, HealthChecks, HealthResponse,
    MembershipResponse, NutritionPlanResponse, PaginatedResponse, PaginationMeta,
    PlanExerciseResponse, ProgressResponse, ReadinessResponse, RecommendationCriteria,
    RecommendationResponse, TrainerLinkResponse, WorkoutLogResponse, WorkoutPlanResponse,
    WorkoutSessionResponse,
};
