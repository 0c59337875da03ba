//! CSV export collaborator: dated, sanitized filenames and the dataset write.

use crate::assessment::report::build_rows;
use crate::assessment::{AssessmentResult, RiskDomain};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub enum ExportError {
    /// Project name and version must be non-empty before an export is allowed.
    MissingProjectMetadata,
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::MissingProjectMetadata => {
                write!(f, "project name and version are required before export")
            }
            ExportError::Io(err) => write!(f, "failed to write results file: {}", err),
            ExportError::Csv(err) => write!(f, "failed to serialize results: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::MissingProjectMetadata => None,
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Strips everything except letters, digits, `.`, `_`, `-`; spaces become
/// underscores first.
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// `<project>_<version>_<YYYY-MM-DD>_<tab>.csv`, every free-text part sanitized.
pub fn export_filename(
    project: &str,
    version: &str,
    date: NaiveDate,
    domain: RiskDomain,
) -> String {
    format!(
        "{}_{}_{}_{}.csv",
        sanitize_filename(project),
        sanitize_filename(version),
        date.format("%Y-%m-%d"),
        sanitize_filename(domain.label()),
    )
}

/// Writes assessment datasets into a results directory.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    results_dir: PathBuf,
}

impl CsvExporter {
    pub fn new<P: Into<PathBuf>>(results_dir: P) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Builds the dataset rows and writes them under a dated filename,
    /// creating the results directory if needed. Returns the written path.
    pub fn write(&self, result: &AssessmentResult) -> Result<PathBuf, ExportError> {
        let context = &result.context;
        if context.project_name.trim().is_empty() || context.version.trim().is_empty() {
            return Err(ExportError::MissingProjectMetadata);
        }

        std::fs::create_dir_all(&self.results_dir)?;
        let path = self.results_dir.join(export_filename(
            &context.project_name,
            &context.version,
            context.assessment_date,
            context.domain,
        ));

        let mut writer = csv::Writer::from_path(&path)?;
        for row in build_rows(result) {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!(
            path = %path.display(),
            rows = result.risk_items.len(),
            "assessment exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_unsafe_characters() {
        assert_eq!(sanitize_filename("  My Project! v2 "), "My_Project_v2");
        assert_eq!(sanitize_filename("rel/1.4+hotfix"), "rel1.4hotfix");
        assert_eq!(sanitize_filename("plain-name_1.0"), "plain-name_1.0");
    }

    #[test]
    fn filename_combines_sanitized_parts_with_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date");
        let name = export_filename("Atlas CMS", "2025.3", date, RiskDomain::Localization);
        assert_eq!(name, "Atlas_CMS_2025.3_2025-09-30_L10n.csv");
    }
}
