use super::super::domain::{DomainError, RiskCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Any at-risk item scoring at or above this is a red flag.
pub const DEFAULT_RED_FLAG_THRESHOLD: u8 = 6;
/// A single cell at or above this pushes the overall rating to High.
pub const DEFAULT_HIGH_CELL_THRESHOLD: u8 = 7;
/// At-risk totals at or above this (without a High cell) rate Medium.
pub const DEFAULT_MEDIUM_TOTAL_THRESHOLD: u16 = 12;
/// Red-flag lists are truncated to this many entries.
pub const DEFAULT_RED_FLAG_LIMIT: usize = 5;

pub const MIN_CATEGORY_WEIGHT: f32 = 0.5;
pub const MAX_CATEGORY_WEIGHT: f32 = 2.0;

/// Per-session engine configuration: category weight multipliers plus the
/// rating and red-flag thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub category_weights: HashMap<RiskCategory, f32>,
    pub red_flag_threshold: u8,
    pub high_cell_threshold: u8,
    pub medium_total_threshold: u16,
    pub red_flag_limit: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            category_weights: HashMap::new(),
            red_flag_threshold: DEFAULT_RED_FLAG_THRESHOLD,
            high_cell_threshold: DEFAULT_HIGH_CELL_THRESHOLD,
            medium_total_threshold: DEFAULT_MEDIUM_TOTAL_THRESHOLD,
            red_flag_limit: DEFAULT_RED_FLAG_LIMIT,
        }
    }
}

impl AssessmentConfig {
    /// Sets a category weight, rejecting multipliers outside the supported
    /// 0.5..=2.0 range.
    pub fn with_weight(mut self, category: RiskCategory, weight: f32) -> Result<Self, DomainError> {
        if !(MIN_CATEGORY_WEIGHT..=MAX_CATEGORY_WEIGHT).contains(&weight) {
            return Err(DomainError::WeightOutOfRange { category, weight });
        }
        self.category_weights.insert(category, weight);
        Ok(self)
    }

    /// Weight multiplier for a category; unconfigured categories count at 1.0.
    pub fn weight(&self, category: RiskCategory) -> f32 {
        self.category_weights.get(&category).copied().unwrap_or(1.0)
    }
}
