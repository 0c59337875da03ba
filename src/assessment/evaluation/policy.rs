use super::super::domain::{OverallRating, RiskItem};
use super::config::AssessmentConfig;

/// Rates the whole assessment from at-risk scores only. Priority order: a
/// single hot cell wins over the accumulated total.
pub(crate) fn overall_rating(at_risk_scores: &[u8], config: &AssessmentConfig) -> OverallRating {
    let max_cell = at_risk_scores.iter().copied().max().unwrap_or(0);
    let total: u16 = at_risk_scores.iter().map(|score| u16::from(*score)).sum();

    if max_cell >= config.high_cell_threshold {
        OverallRating::High
    } else if total >= config.medium_total_threshold {
        OverallRating::Medium
    } else {
        OverallRating::Low
    }
}

/// Selects red flags: at-risk items at or above the threshold, score
/// descending, ties keeping insertion order, truncated to the limit.
pub(crate) fn red_flags(items: &[RiskItem], config: &AssessmentConfig) -> Vec<RiskItem> {
    let mut flagged: Vec<RiskItem> = items
        .iter()
        .filter(|item| item.score >= config.red_flag_threshold)
        .cloned()
        .collect();
    // sort_by is stable, so equal scores preserve catalog/insertion order
    flagged.sort_by(|a, b| b.score.cmp(&a.score));
    flagged.truncate(config.red_flag_limit);
    flagged
}
