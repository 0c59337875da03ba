//! Checklist evaluation, signal rules, aggregation, and report shaping.
//!
//! The flow per submission: a [`catalog::RiskCatalog`] is paired with collected
//! [`domain::Answer`]s and optional [`evaluation::SignalInputs`], evaluated by
//! the [`evaluation::AssessmentEngine`] into an
//! [`evaluation::AssessmentResult`], then projected into chart views and
//! export rows by the [`report`] module.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod report;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogEntry, RiskCatalog};
pub use domain::{
    risk_score, Answer, AssessmentContext, DomainError, GateStatus, OverallRating, Polarity, Rank,
    RiskCategory, RiskDomain, RiskItem,
};
pub use evaluation::{
    AssessmentConfig, AssessmentEngine, AssessmentResult, DefectCounts, EvaluationError, GateCheck,
    SignalInputs,
};
pub use report::{build_rows, AssessmentSummary, DatasetRow, HeatmapGrid};
