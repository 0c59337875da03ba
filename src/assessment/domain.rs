use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Assessment domain selecting which checklist catalog applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDomain {
    Localization,
    LocalizationOps,
    General,
}

impl RiskDomain {
    pub const fn ordered() -> [Self; 3] {
        [Self::Localization, Self::LocalizationOps, Self::General]
    }

    /// Short tab label used in dataset rows and export filenames.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Localization => "L10n",
            Self::LocalizationOps => "LocOps",
            Self::General => "General",
        }
    }
}

/// Three-step likelihood/impact scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Low,
    Moderate,
    High,
}

impl Rank {
    pub const fn value(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Medium",
            Self::High => "High",
        }
    }

    /// Validates a raw scale value at the boundary; anything outside 1..=3 is a
    /// caller bug, not a user-facing condition.
    pub fn try_from_value(value: u8) -> Result<Self, DomainError> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::High),
            other => Err(DomainError::RankOutOfRange(other)),
        }
    }
}

/// Cell score for a likelihood/impact pair, range 1..=9.
pub const fn risk_score(likelihood: Rank, impact: Rank) -> u8 {
    likelihood.value() * impact.value()
}

/// Which answer to a checklist question signals risk. The safe answer is always
/// the default; deviating from it, in either direction, flags the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    AffirmativeIsRisk,
    NegativeIsRisk,
}

impl Polarity {
    pub const fn is_risk(self, answered_yes: bool) -> bool {
        match self {
            Self::AffirmativeIsRisk => answered_yes,
            Self::NegativeIsRisk => !answered_yes,
        }
    }
}

/// Release-gate status reported by the delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Unknown,
    Draft,
    InProgress,
    Ready,
    Blocked,
}

impl GateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Draft => "Draft",
            Self::InProgress => "In Progress",
            Self::Ready => "Ready",
            Self::Blocked => "Blocked",
        }
    }
}

impl FromStr for GateStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "draft" => Ok(Self::Draft),
            "in_progress" | "in progress" => Ok(Self::InProgress),
            "ready" => Ok(Self::Ready),
            "blocked" => Ok(Self::Blocked),
            _ => Err(DomainError::UnknownGateStatus(value.to_string())),
        }
    }
}

/// Categorical rating summarizing one whole assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    Low,
    Medium,
    High,
}

impl OverallRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Risk category grouping checklist and signal items for weighting and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    FileHandling,
    Tooling,
    Quality,
    Schedule,
    Resources,
    Knowledge,
    Stakeholders,
    Release,
    QualityMetrics,
    Process,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::FileHandling,
            Self::Tooling,
            Self::Quality,
            Self::Schedule,
            Self::Resources,
            Self::Knowledge,
            Self::Stakeholders,
            Self::Release,
            Self::QualityMetrics,
            Self::Process,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FileHandling => "File Handling",
            Self::Tooling => "Tooling",
            Self::Quality => "Quality",
            Self::Schedule => "Schedule",
            Self::Resources => "Resources",
            Self::Knowledge => "Knowledge",
            Self::Stakeholders => "Stakeholders",
            Self::Release => "Release",
            Self::QualityMetrics => "Quality Metrics",
            Self::Process => "Process",
        }
    }
}

/// One collected response for a checklist entry. Overrides replace the catalog's
/// default ranks only when the item turns out to be at risk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answered_yes: bool,
    pub likelihood_override: Option<Rank>,
    pub impact_override: Option<Rank>,
    pub evidence: Option<String>,
}

impl Answer {
    pub fn yes() -> Self {
        Self {
            answered_yes: true,
            ..Self::default()
        }
    }

    pub fn no() -> Self {
        Self {
            answered_yes: false,
            ..Self::default()
        }
    }

    pub fn with_overrides(mut self, likelihood: Rank, impact: Rank) -> Self {
        self.likelihood_override = Some(likelihood);
        self.impact_override = Some(impact);
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

/// Session metadata stamped onto every dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub project_name: String,
    pub version: String,
    pub assessor: String,
    pub notes: String,
    pub assessment_date: NaiveDate,
    pub domain: RiskDomain,
}

/// One flagged risk, catalog-derived or signal-derived. Exists only for items
/// judged at risk; safe items never materialize as rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub category: RiskCategory,
    pub risk_name: String,
    pub likelihood: Rank,
    pub impact: Rank,
    pub score: u8,
    pub weighted_score: f32,
    pub mitigation: String,
    pub evidence: String,
}

/// Boundary validation failures. These indicate caller or configuration bugs;
/// engine inputs are otherwise pre-validated by the collecting layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("likelihood/impact rank must be 1, 2, or 3 (got {0})")]
    RankOutOfRange(u8),
    #[error("unknown release gate status '{0}'")]
    UnknownGateStatus(String),
    #[error("category weight for {category:?} must be within 0.5..=2.0 (got {weight})")]
    WeightOutOfRange { category: RiskCategory, weight: f32 },
}
