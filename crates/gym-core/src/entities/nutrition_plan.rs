//! Nutrition plan entity

use chrono::{DateTime, Utc};

use crate::value_objects::{string_enum, Snowflake};

string_enum! {
    pub enum MealType {
        Breakfast => "breakfast",
        Lunch => "lunch",
        Dinner => "dinner",
        Snack => "snack",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionPlan {
    pub id: Snowflake,
    pub trainer_id: Snowflake,
    pub member_id: Snowflake,
    pub name: String,
    pub description: String,
    pub meal_type: MealType,
    pub calories: i32,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub meal_details: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NutritionPlan {
    /// Energy from macronutrients (4/4/9 kcal per gram)
    pub fn macro_calories(&self) -> f64 {
        self.protein_grams * 4.0 + self.carbs_grams * 4.0 + self.fat_grams * 9.0
    }
}
