use super::super::evaluation::AssessmentResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exported row. Field order is the fixed column order of the dataset;
/// numeric fields stay numeric so a re-parse reconstructs identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub project_name: String,
    pub version: String,
    pub assessment_date: NaiveDate,
    pub tab: String,
    pub category: String,
    pub risk_name: String,
    pub likelihood: u8,
    pub impact: u8,
    pub score: u8,
    pub weighted_score: f32,
    pub mitigation: String,
    pub evidence: String,
    pub assessor: String,
    pub notes: String,
}

/// Formats the at-risk items as export rows, one per item, preserving the
/// result's order (catalog declaration order, then signal order).
pub fn build_rows(result: &AssessmentResult) -> Vec<DatasetRow> {
    let context = &result.context;
    result
        .risk_items
        .iter()
        .map(|item| DatasetRow {
            project_name: context.project_name.clone(),
            version: context.version.clone(),
            assessment_date: context.assessment_date,
            tab: context.domain.label().to_string(),
            category: item.category.label().to_string(),
            risk_name: item.risk_name.clone(),
            likelihood: item.likelihood.value(),
            impact: item.impact.value(),
            score: item.score,
            weighted_score: item.weighted_score,
            mitigation: item.mitigation.clone(),
            evidence: item.evidence.clone(),
            assessor: context.assessor.clone(),
            notes: context.notes.clone(),
        })
        .collect()
}
