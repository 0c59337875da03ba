mod dataset;
mod views;

pub use dataset::{build_rows, DatasetRow};
pub use views::{AssessmentSummary, CategoryScoreEntry, HeatmapGrid, RedFlagView};

use super::domain::RiskCategory;
use super::evaluation::AssessmentResult;

impl AssessmentResult {
    /// Projects the result into chart-ready views. Category entries follow the
    /// fixed category order and cover only categories that accrued a total.
    pub fn summary(&self) -> AssessmentSummary {
        let category_scores = RiskCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                self.category_totals
                    .get(&category)
                    .map(|total| CategoryScoreEntry {
                        category,
                        category_label: category.label(),
                        weighted_total: *total,
                    })
            })
            .collect();

        let red_flags = self
            .red_flags
            .iter()
            .map(|item| RedFlagView {
                risk_name: item.risk_name.clone(),
                category: item.category,
                category_label: item.category.label(),
                score: item.score,
                mitigation: item.mitigation.clone(),
            })
            .collect();

        AssessmentSummary {
            overall_rating: self.overall_rating,
            rating_label: self.overall_rating.label(),
            heatmap: HeatmapGrid::from_items(&self.risk_items),
            category_scores,
            red_flags,
            items_evaluated: self.items_evaluated,
            items_at_risk: self.items_at_risk,
            total_score: self.total_score,
            max_cell: self.max_cell,
        }
    }
}
