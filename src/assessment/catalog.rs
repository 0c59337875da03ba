use super::domain::{Polarity, Rank, RiskCategory, RiskDomain};

/// One predefined checklist question with its default risk parameters.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub category: RiskCategory,
    pub risk_name: &'static str,
    pub question: &'static str,
    pub polarity: Polarity,
    pub base_likelihood: Rank,
    pub base_impact: Rank,
    pub mitigation: &'static str,
    pub group: &'static str,
}

/// Versioned, read-only checklist table for one assessment domain.
#[derive(Debug)]
pub struct RiskCatalog {
    domain: RiskDomain,
    entries: Vec<CatalogEntry>,
}

impl RiskCatalog {
    pub fn for_domain(domain: RiskDomain) -> Self {
        let entries = match domain {
            RiskDomain::Localization => localization_entries(),
            RiskDomain::LocalizationOps => localization_ops_entries(),
            RiskDomain::General => general_entries(),
        };
        Self { domain, entries }
    }

    /// Builds a catalog from caller-supplied entries, for domain-specific
    /// tailoring or test fixtures.
    pub fn from_entries(domain: RiskDomain, entries: Vec<CatalogEntry>) -> Self {
        Self { domain, entries }
    }

    pub fn domain(&self) -> RiskDomain {
        self.domain
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entries_for_category(&self, category: RiskCategory) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn localization_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            category: RiskCategory::FileHandling,
            risk_name: "FTP used instead of Git",
            question: "Are handoffs still using FTP instead of Git?",
            polarity: Polarity::AffirmativeIsRisk,
            base_likelihood: Rank::High,
            base_impact: Rank::High,
            mitigation: "Switch all handoffs to Git; deprecate FTP",
            group: "Handoff",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Mixed HTTPS/SSH setup",
            question: "Is there a mixed HTTPS/SSH Git setup that may cause token/login failures?",
            polarity: Polarity::AffirmativeIsRisk,
            base_likelihood: Rank::High,
            base_impact: Rank::Moderate,
            mitigation: "Standardize to HTTPS and document PAT setup",
            group: "Git",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Wrong clone URLs",
            question: "Are correct clone URLs guaranteed (no Gerrit admin URLs)?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Provide canonical clone URL list; CI guardrails",
            group: "Git",
        },
        CatalogEntry {
            category: RiskCategory::Quality,
            risk_name: "Automation disabled",
            question: "Are automated checks (SourceChecker/TransChecker) enabled?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Enable and gate on automated pre-checks",
            group: "Quality",
        },
        CatalogEntry {
            category: RiskCategory::Schedule,
            risk_name: "Drops misaligned",
            question: "Are translation drops aligned with the sprint calendar?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::High,
            base_impact: Rank::High,
            mitigation: "Publish drop calendar; align with PI planning",
            group: "Planning",
        },
        CatalogEntry {
            category: RiskCategory::Resources,
            risk_name: "Screenshot bandwidth",
            question: "Is screenshot validation bandwidth planned (with vendor support)?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Plan capacity; share build early; vendor assist",
            group: "QA",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Permissions missing",
            question: "Are all Git/Gerrit permissions granted pre-drop?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Raise access requests early; track in KT docs",
            group: "Access",
        },
        CatalogEntry {
            category: RiskCategory::FileHandling,
            risk_name: "Parser/encoding not standardized",
            question: "Are parser/encoding settings standardized (e.g., Passolo UTF-8)?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Standardize and version parser configs",
            group: "Parsers",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "ezL10n mapping absent",
            question: "Is the Git repo mapped for ezL10n automation?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Map repo to ezL10n; validate jobs",
            group: "ezL10n",
        },
    ]
}

fn localization_ops_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Pipeline instability",
            question: "Have pipelines been \u{2265}95% green in the last 14 days?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Blue/green runners; staggered rollout; rollback plan",
            group: "CI",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "License server outage risk",
            question: "Are license servers monitored with alerting?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Add HA; monitoring; vendor support",
            group: "Infrastructure",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Secrets management gaps",
            question: "Are credentials rotated and stored in a vault?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Use secrets vault; rotation policy",
            group: "Security",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Parser regressions",
            question: "Are parser/plugin versions pinned with canary tests?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Pin versions; canary pipelines; rollback artifact",
            group: "Parsers",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Staging/server availability",
            question: "Is staging/artifact server availability monitored?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "SLOs; uptime monitoring; escalation",
            group: "Infrastructure",
        },
        CatalogEntry {
            category: RiskCategory::Resources,
            risk_name: "Agent env drift",
            question: "Are build agents standardized (toolchain pinned)?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Golden images; config mgmt; audits",
            group: "CI",
        },
        CatalogEntry {
            category: RiskCategory::Knowledge,
            risk_name: "Guardrails missing",
            question: "Are MR templates and required approvals enforced?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Templates; protected branches; reviewers",
            group: "Governance",
        },
        CatalogEntry {
            category: RiskCategory::Knowledge,
            risk_name: "Backup/restore gaps",
            question: "Are backups verified with periodic restore tests?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Nightly backups; quarterly restore drills",
            group: "Governance",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "Monitoring SLAs",
            question: "Are monitoring SLAs (MTTD/MTTR) defined and met?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Define SLAs; alert tuning; postmortems",
            group: "Infrastructure",
        },
    ]
}

fn general_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            category: RiskCategory::Schedule,
            risk_name: "Sprint misalignment",
            question: "Are milestones aligned with sprint/PI and dependencies tracked?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::High,
            base_impact: Rank::High,
            mitigation: "Dependency board; early alignment",
            group: "Planning",
        },
        CatalogEntry {
            category: RiskCategory::Quality,
            risk_name: "Missing reviews",
            question: "Are design/quality/accessibility reviews scheduled?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Schedule formal reviews; checklist",
            group: "Quality",
        },
        CatalogEntry {
            category: RiskCategory::Knowledge,
            risk_name: "Specs/KT gaps",
            question: "Are specs/KT complete and up-to-date?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "KT docs; owner assignment; versioning",
            group: "Documentation",
        },
        CatalogEntry {
            category: RiskCategory::Tooling,
            risk_name: "CI/CD & repo stability",
            question: "Are CI/CD and repo configs stable and documented?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::High,
            mitigation: "Harden CI; doc configs; change control",
            group: "CI",
        },
        CatalogEntry {
            category: RiskCategory::Resources,
            risk_name: "Bandwidth & time zones",
            question: "Are bandwidth and time zones planned into the schedule?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "Follow-the-sun plan; handoff SOP",
            group: "Planning",
        },
        CatalogEntry {
            category: RiskCategory::Stakeholders,
            risk_name: "Signoffs missing",
            question: "Are early stakeholder signoffs scheduled and tracked?",
            polarity: Polarity::NegativeIsRisk,
            base_likelihood: Rank::Moderate,
            base_impact: Rank::Moderate,
            mitigation: "RACI; signoff gates",
            group: "Governance",
        },
    ]
}
