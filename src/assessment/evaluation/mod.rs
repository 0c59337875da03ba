mod config;
mod policy;
mod rules;
mod signals;

pub use config::{
    AssessmentConfig, DEFAULT_HIGH_CELL_THRESHOLD, DEFAULT_MEDIUM_TOTAL_THRESHOLD,
    DEFAULT_RED_FLAG_LIMIT, DEFAULT_RED_FLAG_THRESHOLD, MAX_CATEGORY_WEIGHT, MIN_CATEGORY_WEIGHT,
};
pub use signals::{DefectCounts, GateCheck, SignalInputs, DEFECT_LOAD_THRESHOLD};

use super::catalog::RiskCatalog;
use super::domain::{risk_score, Answer, AssessmentContext, OverallRating, RiskCategory, RiskItem};
use rules::evaluate_entry;
use serde::Serialize;
use signals::evaluate_signals;
use std::collections::HashMap;
use tracing::debug;

/// Stateless engine turning one answered checklist plus live signals into an
/// assessment result. Each `assess` call works over its own input snapshot;
/// nothing is shared across invocations.
pub struct AssessmentEngine {
    config: AssessmentConfig,
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

impl AssessmentEngine {
    pub fn new(config: AssessmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Evaluates every catalog entry against its answer (answers are parallel
    /// to `catalog.entries()`), runs the signal evaluators, and aggregates.
    pub fn assess(
        &self,
        catalog: &RiskCatalog,
        answers: &[Answer],
        signals: &SignalInputs,
        context: AssessmentContext,
    ) -> Result<AssessmentResult, EvaluationError> {
        if answers.len() != catalog.len() {
            return Err(EvaluationError::AnswerCountMismatch {
                expected: catalog.len(),
                actual: answers.len(),
            });
        }

        let mut risk_items = Vec::new();
        let mut category_totals: HashMap<RiskCategory, f32> = HashMap::new();
        let mut at_risk_scores: Vec<u8> = Vec::new();

        for (entry, answer) in catalog.entries().iter().zip(answers) {
            let evaluation = evaluate_entry(entry, answer);
            let weight = self.config.weight(entry.category);

            // Category totals span every evaluated item; safe items still
            // contribute their floor score of 1.
            *category_totals.entry(entry.category).or_default() +=
                f32::from(evaluation.score) * weight;

            if evaluation.at_risk {
                at_risk_scores.push(evaluation.score);
                risk_items.push(RiskItem {
                    category: entry.category,
                    risk_name: entry.risk_name.to_string(),
                    likelihood: evaluation.likelihood,
                    impact: evaluation.impact,
                    score: evaluation.score,
                    weighted_score: f32::from(evaluation.score) * weight,
                    mitigation: entry.mitigation.to_string(),
                    evidence: answer.evidence.clone().unwrap_or_default(),
                });
            }
        }

        for signal in evaluate_signals(signals) {
            let weight = self.config.weight(signal.category);
            let score = risk_score(signal.likelihood, signal.impact);
            *category_totals.entry(signal.category).or_default() += f32::from(score) * weight;
            at_risk_scores.push(score);
            risk_items.push(RiskItem {
                category: signal.category,
                risk_name: signal.risk_name,
                likelihood: signal.likelihood,
                impact: signal.impact,
                score,
                weighted_score: f32::from(score) * weight,
                mitigation: signal.mitigation,
                evidence: signal.evidence,
            });
        }

        let overall_rating = policy::overall_rating(&at_risk_scores, &self.config);
        let red_flags = policy::red_flags(&risk_items, &self.config);
        let total_score: u16 = at_risk_scores.iter().map(|score| u16::from(*score)).sum();
        let max_cell = at_risk_scores.iter().copied().max().unwrap_or(0);

        debug!(
            domain = context.domain.label(),
            items_evaluated = catalog.len(),
            items_at_risk = risk_items.len(),
            rating = overall_rating.label(),
            "assessment complete"
        );

        Ok(AssessmentResult {
            context,
            items_evaluated: catalog.len(),
            items_at_risk: risk_items.len(),
            total_score,
            max_cell,
            risk_items,
            category_totals,
            overall_rating,
            red_flags,
        })
    }
}

/// Full outcome of one assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub context: AssessmentContext,
    /// At-risk items only: catalog order first, then signal order (release,
    /// defects, gates).
    pub risk_items: Vec<RiskItem>,
    /// Weighted totals over every evaluated item, flagged or not. This is a
    /// checklist-coverage signal and is intentionally distinct from
    /// `total_score`, which spans at-risk items only.
    pub category_totals: HashMap<RiskCategory, f32>,
    pub overall_rating: OverallRating,
    /// Top at-risk items at or above the red-flag threshold, score descending.
    pub red_flags: Vec<RiskItem>,
    pub items_evaluated: usize,
    pub items_at_risk: usize,
    pub total_score: u16,
    pub max_cell: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("expected {expected} answers to match the catalog, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },
}
