//! Test fixtures and data generators
//!
//! Request bodies for seeding data and the subset of response fields the
//! tests assert on.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Suffix unique across test runs against the same database
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}x{n}", Utc::now().timestamp_micros())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_from_today(days: u64) -> NaiveDate {
    today() + Days::new(days)
}

/// Create user request
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl NewUser {
    pub fn with_role(role: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("{role}{suffix}"),
            email: format!("{role}{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: role.to_string(),
            weight: None,
            height: None,
        }
    }

    pub fn admin() -> Self {
        Self::with_role("admin")
    }

    pub fn trainer() -> Self {
        Self::with_role("trainer")
    }

    pub fn member() -> Self {
        Self::with_role("member")
    }

    pub fn with_metrics(mut self, weight: f64, height: f64) -> Self {
        self.weight = Some(weight);
        self.height = Some(height);
        self
    }
}

/// Create workout plan request
#[derive(Debug, Clone, Serialize)]
pub struct NewWorkoutPlan {
    pub member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    pub name: String,
    pub goal: String,
    pub day_of_week: String,
    pub duration_weeks: i32,
}

impl NewWorkoutPlan {
    pub fn for_member(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            trainer_id: None,
            name: format!("Plan {}", unique_suffix()),
            goal: "general_fitness".to_string(),
            day_of_week: "monday".to_string(),
            duration_weeks: 4,
        }
    }
}

/// Create membership request
#[derive(Debug, Clone, Serialize)]
pub struct NewMembership {
    pub member_id: String,
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewMembership {
    pub fn monthly(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            plan_type: "basic".to_string(),
            start_date: today(),
            end_date: days_from_today(30),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub role: String,
    pub is_super: bool,
    pub is_deleted: bool,
}

#[derive(Debug, Deserialize)]
pub struct LinkView {
    pub id: String,
    pub trainer_id: String,
    pub member_id: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlanView {
    pub id: String,
    pub trainer_id: String,
    pub member_id: String,
    pub name: String,
    pub goal: String,
}

#[derive(Debug, Deserialize)]
pub struct MembershipView {
    pub id: String,
    pub member_id: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct IdView {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub after: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    pub fn ids(&self, id: impl Fn(&T) -> &str) -> Vec<String> {
        self.data.iter().map(|row| id(row).to_string()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationView {
    pub bmi: f64,
    pub category: String,
    pub workout_plans: Vec<PlanView>,
    pub nutrition_plans: Vec<IdView>,
    pub exercises: Vec<IdView>,
}
