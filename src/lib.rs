//! RiskRadar: a checklist-driven risk assessment engine.
//!
//! For a named domain (localization, localization operations, or general
//! project delivery) the crate evaluates a fixed yes/no checklist plus
//! optional live signals into a deterministic risk dataset: per-item scores,
//! weighted category totals, an overall Low/Medium/High rating, a ranked
//! red-flag list, chart-ready views, and a dated CSV export.
//!
//! The engine is pure and stateless across invocations; the interactive shell
//! collecting answers and the chart rendering are external collaborators.

pub mod assessment;
pub mod config;
pub mod export;
pub mod telemetry;
