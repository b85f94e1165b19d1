//! BMI-based recommendations
//!
//! Classifies the caller's body metrics and returns plans, nutrition plans and
//! exercises matching the band, each narrowed to what the caller may see.

use gym_core::policy::{classify, BmiReading, EntityKind, RowScope};
use gym_core::{Caller, Snowflake};
use tracing::{debug, instrument};

use crate::dto::{
    BmiQuery, ExerciseResponse, NutritionPlanResponse, RecommendationCriteria,
    RecommendationResponse, WorkoutPlanResponse,
};

use super::access::{missing, Access};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rows returned per recommended list
pub const RECOMMENDATION_LIMIT: i64 = 20;

pub struct RecommendationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecommendationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Recommendations for explicit metrics, falling back to the caller's profile
    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        caller: Caller,
        query: BmiQuery,
    ) -> ServiceResult<RecommendationResponse> {
        let (weight, height_cm) = self.body_metrics(caller.id, query).await?;
        let reading = classify(weight, height_cm / 100.0)?;
        let recommendation = reading.category.recommendation();

        debug!(bmi = reading.bmi, category = %reading.category, "BMI classified");

        let access = Access::new(self.ctx, caller);
        let plans = self
            .ctx
            .workout_plan_repo()
            .recommended(
                &access.read_scope(EntityKind::WorkoutPlan, false),
                recommendation.goals,
                RECOMMENDATION_LIMIT,
            )
            .await?;
        let nutrition = self
            .ctx
            .nutrition_plan_repo()
            .recommended(
                &access.read_scope(EntityKind::NutritionPlan, false),
                recommendation.calories,
                RECOMMENDATION_LIMIT,
            )
            .await?;
        let categories = recommendation.focus.categories();
        let exercises = self
            .ctx
            .exercise_repo()
            .recommended(
                &access.read_scope(EntityKind::Exercise, false),
                categories,
                RECOMMENDATION_LIMIT,
            )
            .await?;

        Ok(RecommendationResponse {
            bmi: round_bmi(&reading),
            category: reading.category.label().to_string(),
            criteria: RecommendationCriteria {
                goals: recommendation.goals.to_vec(),
                calories: recommendation.calories,
                exercise_focus: recommendation.focus,
                exercise_categories: categories.to_vec(),
            },
            workout_plans: plans.into_iter().map(WorkoutPlanResponse::from).collect(),
            nutrition_plans: nutrition.into_iter().map(NutritionPlanResponse::from).collect(),
            exercises: exercises.into_iter().map(ExerciseResponse::from).collect(),
        })
    }

    /// Weight in kg and height in cm, query values first
    async fn body_metrics(&self, actor_id: Snowflake, query: BmiQuery) -> ServiceResult<(f64, f64)> {
        if let (Some(weight), Some(height)) = (query.weight, query.height) {
            return Ok((weight, height));
        }

        let actor = self
            .ctx
            .actor_repo()
            .find(actor_id, &RowScope::unrestricted())
            .await?
            .ok_or_else(|| missing(EntityKind::Actor, actor_id))?;

        match (query.weight.or(actor.weight), query.height.or(actor.height)) {
            (Some(weight), Some(height)) => Ok((weight, height)),
            _ => Err(ServiceError::validation(
                "weight and height are required; pass them as query parameters or set them on your profile",
            )),
        }
    }
}

fn round_bmi(reading: &BmiReading) -> f64 {
    (reading.bmi * 100.0).round() / 100.0
}
