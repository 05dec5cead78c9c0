use macrolog_core::models::Food;

/// The food being viewed and the raw grams input.
#[derive(Debug, Clone, Default)]
pub struct FoodDetailState {
    pub food: Option<Food>,
    pub grams: String,
}

impl FoodDetailState {
    /// Longest grams input accepted, in characters.
    pub const MAX_GRAMS_LEN: usize = 7;
}
