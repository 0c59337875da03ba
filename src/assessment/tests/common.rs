use crate::assessment::catalog::{CatalogEntry, RiskCatalog};
use crate::assessment::domain::{AssessmentContext, Polarity, Rank, RiskCategory, RiskDomain};
use crate::assessment::evaluation::{AssessmentConfig, AssessmentEngine, SignalInputs};
use chrono::NaiveDate;

pub(super) fn context() -> AssessmentContext {
    AssessmentContext {
        project_name: "Atlas CMS".to_string(),
        version: "2025.3".to_string(),
        assessor: "R. Vega".to_string(),
        notes: "pre-release review".to_string(),
        assessment_date: NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date"),
        domain: RiskDomain::Localization,
    }
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(AssessmentConfig::default())
}

pub(super) fn entry(
    risk_name: &'static str,
    category: RiskCategory,
    polarity: Polarity,
    base_likelihood: Rank,
    base_impact: Rank,
) -> CatalogEntry {
    CatalogEntry {
        category,
        risk_name,
        question: "Is the safeguard in place?",
        polarity,
        base_likelihood,
        base_impact,
        mitigation: "Put the safeguard in place",
        group: "Fixture",
    }
}

pub(super) fn catalog_of(entries: Vec<CatalogEntry>) -> RiskCatalog {
    RiskCatalog::from_entries(RiskDomain::Localization, entries)
}

pub(super) fn no_signals() -> SignalInputs {
    SignalInputs::default()
}
