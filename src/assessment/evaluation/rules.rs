use super::super::catalog::CatalogEntry;
use super::super::domain::{risk_score, Answer, Rank};

/// Outcome of evaluating one checklist entry against its collected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemEvaluation {
    pub at_risk: bool,
    pub likelihood: Rank,
    pub impact: Rank,
    pub score: u8,
}

/// Applies the polarity rule: the item is at risk when the answer deviates
/// from the safe default. Safe items are floored to (1, 1) and overrides are
/// ignored; overrides only apply to items actually at risk.
pub(crate) fn evaluate_entry(entry: &CatalogEntry, answer: &Answer) -> ItemEvaluation {
    let at_risk = entry.polarity.is_risk(answer.answered_yes);

    let (likelihood, impact) = if at_risk {
        (
            answer.likelihood_override.unwrap_or(entry.base_likelihood),
            answer.impact_override.unwrap_or(entry.base_impact),
        )
    } else {
        (Rank::Low, Rank::Low)
    };

    ItemEvaluation {
        at_risk,
        likelihood,
        impact,
        score: risk_score(likelihood, impact),
    }
}
