//! Nutrition panel projection.

use macrolog_core::models::Food;

use crate::common::round_display;

const DEFAULT_GRAMS: f64 = 100.0;

/// Whether submitting creates a new entry or updates the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionPanel {
    pub food_id: i64,
    pub name: String,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub mode: DetailMode,
}

/// Grams the panel is computed for: the input when it is a positive number,
/// otherwise 100.
pub fn effective_grams(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|grams| grams.is_finite() && *grams > 0.0)
        .unwrap_or(DEFAULT_GRAMS)
}

pub fn project_food_detail(food: &Food, grams_input: &str, mode: DetailMode) -> NutritionPanel {
    let multiplier = effective_grams(grams_input) / 100.0;
    NutritionPanel {
        food_id: food.id,
        name: food.name.clone(),
        calories: round_display(food.calories_per_100g * multiplier),
        protein: round_display(food.protein_per_100g * multiplier),
        carbs: round_display(food.carbs_per_100g * multiplier),
        fat: round_display(food.fat_per_100g * multiplier),
        mode,
    }
}
