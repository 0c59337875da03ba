use super::super::domain::{GateStatus, Rank, RiskCategory};
use serde::{Deserialize, Serialize};

/// Weighted defect load at or above this emits a Quality Metrics risk item.
pub const DEFECT_LOAD_THRESHOLD: u32 = 12;

const BLOCKER_WEIGHT: u32 = 6;
const CRITICAL_WEIGHT: u32 = 4;
const MAJOR_WEIGHT: u32 = 2;
const MINOR_WEIGHT: u32 = 1;

/// Blockers or more than this many criticals escalate the defect item to (3,3).
const CRITICAL_ESCALATION_COUNT: u32 = 2;

/// Gates whose absence is tolerable near-term; they flag at (2,2) instead of (2,3).
const SOFT_GATES: [&str; 2] = ["Font/glyph readiness", "Locale list finalized"];

/// Open defect counts by severity, as reported by the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectCounts {
    pub blockers: u32,
    pub criticals: u32,
    pub majors: u32,
    pub minors: u32,
}

impl DefectCounts {
    /// Severity-weighted defect load.
    pub fn load(&self) -> u32 {
        self.blockers * BLOCKER_WEIGHT
            + self.criticals * CRITICAL_WEIGHT
            + self.majors * MAJOR_WEIGHT
            + self.minors * MINOR_WEIGHT
    }

    fn summary(&self) -> String {
        format!(
            "blockers={}, criticals={}, majors={}, minors={}",
            self.blockers, self.criticals, self.majors, self.minors
        )
    }
}

/// One named process gate and whether it has been completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCheck {
    pub name: String,
    pub completed: bool,
}

impl GateCheck {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }
}

/// Auxiliary live inputs evaluated alongside the checklist. Every field is
/// optional; absent signals simply emit nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalInputs {
    pub release_gate: Option<GateStatus>,
    pub defects: Option<DefectCounts>,
    pub process_gates: Vec<GateCheck>,
}

/// Synthetic risk item produced by a signal evaluator, shaped like a catalog
/// evaluation so it flows through the same weighting and red-flag promotion.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SignalItem {
    pub category: RiskCategory,
    pub risk_name: String,
    pub likelihood: Rank,
    pub impact: Rank,
    pub mitigation: String,
    pub evidence: String,
}

/// Runs the signal evaluators in fixed order: release gate, defect load,
/// process gates.
pub(crate) fn evaluate_signals(inputs: &SignalInputs) -> Vec<SignalItem> {
    let mut items = Vec::new();
    if let Some(status) = inputs.release_gate {
        items.extend(release_gate_item(status));
    }
    if let Some(defects) = &inputs.defects {
        items.extend(defect_load_item(defects));
    }
    items.extend(process_gate_items(&inputs.process_gates));
    items
}

fn release_gate_item(status: GateStatus) -> Option<SignalItem> {
    let (likelihood, impact) = match status {
        GateStatus::Unknown => (Rank::Moderate, Rank::High),
        GateStatus::Blocked => (Rank::High, Rank::High),
        GateStatus::Draft | GateStatus::InProgress | GateStatus::Ready => return None,
    };
    Some(SignalItem {
        category: RiskCategory::Release,
        risk_name: format!("Release gate {}", status.label().to_ascii_lowercase()),
        likelihood,
        impact,
        mitigation: "Resolve release gate status with the release manager before the drop"
            .to_string(),
        evidence: format!("gate status: {}", status.label()),
    })
}

fn defect_load_item(defects: &DefectCounts) -> Option<SignalItem> {
    if defects.load() < DEFECT_LOAD_THRESHOLD {
        return None;
    }
    let escalated = defects.blockers > 0 || defects.criticals > CRITICAL_ESCALATION_COUNT;
    let (likelihood, impact) = if escalated {
        (Rank::High, Rank::High)
    } else {
        (Rank::Moderate, Rank::High)
    };
    Some(SignalItem {
        category: RiskCategory::QualityMetrics,
        risk_name: "Open defect load".to_string(),
        likelihood,
        impact,
        mitigation: "Burn down blockers/criticals before sign-off; triage majors".to_string(),
        evidence: defects.summary(),
    })
}

fn process_gate_items(gates: &[GateCheck]) -> Vec<SignalItem> {
    gates
        .iter()
        .filter(|gate| !gate.completed)
        .map(|gate| {
            let impact = if is_soft_gate(&gate.name) {
                Rank::Moderate
            } else {
                Rank::High
            };
            SignalItem {
                category: RiskCategory::Process,
                risk_name: format!("Gate missing: {}", gate.name),
                likelihood: Rank::Moderate,
                impact,
                mitigation: format!("Complete the '{}' gate before release", gate.name),
                evidence: String::new(),
            }
        })
        .collect()
}

fn is_soft_gate(name: &str) -> bool {
    SOFT_GATES
        .iter()
        .any(|soft| soft.eq_ignore_ascii_case(name.trim()))
}
