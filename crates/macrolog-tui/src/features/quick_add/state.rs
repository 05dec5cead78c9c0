//! Quick add search state.

use std::time::Duration;

use macrolog_core::models::Food;

use super::debounce::Debouncer;

#[derive(Debug, Clone)]
pub struct QuickAddState {
    pub query: String,
    /// Foods from the last accepted search, in server order.
    pub results: Vec<Food>,
    pub selected: usize,
    pub debouncer: Debouncer,
    pub min_chars: usize,
}

impl QuickAddState {
    pub fn new(debounce: Duration, min_chars: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            debouncer: Debouncer::new(debounce),
            min_chars,
        }
    }

    /// Whether `query` is long enough to search for.
    pub fn is_searchable(&self, query: &str) -> bool {
        query.chars().count() >= self.min_chars
    }

    pub fn selected_food(&self) -> Option<&Food> {
        self.results.get(self.selected)
    }

    /// Empties the input and results (entering the page fresh).
    pub fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = 0;
        self.debouncer.cancel();
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
