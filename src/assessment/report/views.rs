use super::super::domain::{OverallRating, Rank, RiskCategory, RiskItem};
use serde::Serialize;

/// 3x3 count grid keyed by likelihood (rows) and impact (columns), ready for
/// heatmap or scatter rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeatmapGrid {
    counts: [[u32; 3]; 3],
}

impl HeatmapGrid {
    pub fn from_items(items: &[RiskItem]) -> Self {
        let mut grid = Self::default();
        for item in items {
            grid.counts[(item.likelihood.value() - 1) as usize]
                [(item.impact.value() - 1) as usize] += 1;
        }
        grid
    }

    pub fn count(&self, likelihood: Rank, impact: Rank) -> u32 {
        self.counts[(likelihood.value() - 1) as usize][(impact.value() - 1) as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }
}

/// One spoke of the category radar / one bar of the category chart.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub weighted_total: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedFlagView {
    pub risk_name: String,
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub score: u8,
    pub mitigation: String,
}

/// Read-only view bundle handed to the visualization collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub overall_rating: OverallRating,
    pub rating_label: &'static str,
    pub heatmap: HeatmapGrid,
    pub category_scores: Vec<CategoryScoreEntry>,
    pub red_flags: Vec<RedFlagView>,
    pub items_evaluated: usize,
    pub items_at_risk: usize,
    pub total_score: u16,
    pub max_cell: u8,
}
