//! Search results projection.

use macrolog_core::models::Food;

pub const NO_RESULTS: &str = "No results found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchResultsView {
    /// Nothing searched yet, or the query got too short.
    #[default]
    Cleared,
    Empty(&'static str),
    Rows(Vec<FoodRow>),
}

pub fn project_search_results(foods: &[Food]) -> SearchResultsView {
    if foods.is_empty() {
        return SearchResultsView::Empty(NO_RESULTS);
    }
    SearchResultsView::Rows(
        foods
            .iter()
            .map(|food| FoodRow {
                id: food.id,
                name: food.name.clone(),
            })
            .collect(),
    )
}
