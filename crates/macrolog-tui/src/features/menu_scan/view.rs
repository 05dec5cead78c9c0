//! Menu scan results projection.

use macrolog_core::menu::{ANALYZE_FAILED, NO_RECOMMENDATIONS};
use macrolog_core::models::{FoodContext, MenuAnalysis, MenuRecommendation};

use crate::common::round_display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub name: String,
    pub reasoning: String,
    /// One line per grounding food, e.g. `Chicken breast · 165 kcal · 31g protein`.
    pub context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuScanView {
    #[default]
    Idle,
    Loading,
    Empty(&'static str),
    Failed(&'static str),
    Results(Vec<RecommendationCard>),
}

pub fn project_menu_analysis(analysis: &MenuAnalysis) -> MenuScanView {
    if analysis.recommendations.is_empty() {
        return MenuScanView::Empty(NO_RECOMMENDATIONS);
    }
    MenuScanView::Results(
        analysis
            .recommendations
            .iter()
            .map(project_recommendation)
            .collect(),
    )
}

pub fn project_scan_failure() -> MenuScanView {
    MenuScanView::Failed(ANALYZE_FAILED)
}

fn project_recommendation(rec: &MenuRecommendation) -> RecommendationCard {
    RecommendationCard {
        name: rec.name.clone(),
        reasoning: rec.reasoning.clone(),
        context: rec.context.iter().map(context_line).collect(),
    }
}

fn context_line(context: &FoodContext) -> String {
    format!(
        "{} · {} kcal · {}g protein",
        context.food_name,
        round_display(context.calories),
        round_display(context.protein)
    )
}
