//! Cross-file aggregation of disposition findings
//!
//! Aggregation is best-effort: tables and rows that cannot be interpreted are
//! dropped, and a file that cannot be read is skipped with a warning.

pub mod findings;
pub mod scan;
pub mod stats;

pub use findings::{assign_round, document_findings, findings_from_tables, parse_file_findings};
pub use scan::collect_documents;
pub use stats::convergence_series;

use crate::models::{AggregateStats, Finding, ScanConfig};
use crate::parser::{ensure_directory, read_document};
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// Result of aggregating a directory
#[derive(Debug, Clone, Serialize)]
pub struct AggregateRun {
    /// Documents examined
    pub scanned_files: usize,
    /// Documents contributing at least one finding
    pub files_with_findings: usize,
    #[serde(skip)]
    pub findings: Vec<Finding>,
    #[serde(flatten)]
    pub stats: AggregateStats,
}

impl AggregateRun {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Aggregate findings from a list of documents.
///
/// Findings are attributed to each document's path relative to `root`.
pub fn aggregate_documents(root: &Path, documents: &[impl AsRef<Path>]) -> AggregateRun {
    let mut findings = Vec::new();
    let mut files_with_findings = 0;

    for document in documents {
        let path = document.as_ref();
        let content = match read_document(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("skipping {}: {}", path.display(), err);
                continue;
            }
        };

        let display_path = path.strip_prefix(root).unwrap_or(path);
        let file_findings = document_findings(display_path, &content);
        tracing::debug!(file = %display_path.display(), findings = file_findings.len(), "scanned document");

        if !file_findings.is_empty() {
            files_with_findings += 1;
            findings.extend(file_findings);
        }
    }

    let stats = AggregateStats::from_findings(&findings);
    AggregateRun {
        scanned_files: documents.len(),
        files_with_findings,
        findings,
        stats,
    }
}

/// Collect and aggregate every matching document under `root`
pub fn aggregate_directory(root: &Path, config: &ScanConfig) -> Result<AggregateRun> {
    ensure_directory(root)?;
    let documents = collect_documents(root, config)?;
    Ok(aggregate_documents(root, &documents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::InputError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_aggregate_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("one.md"),
            "## Round 1 Review Disposition\n| Severity | Disposition |\n|---|---|\n| P0 | Incorporated |\n| P1 | Deferred |\n",
        )
        .unwrap();
        fs::write(temp.path().join("two.md"), "# Nothing reviewed yet\n").unwrap();

        let run = aggregate_directory(temp.path(), &ScanConfig::default()).unwrap();
        assert_eq!(run.scanned_files, 2);
        assert_eq!(run.files_with_findings, 1);
        assert_eq!(run.findings.len(), 2);
        assert_eq!(run.findings[0].file, PathBuf::from("one.md"));
        assert_eq!(run.stats.overall.total, 2);
    }

    #[test]
    fn test_aggregate_empty_directory_is_ok() {
        let temp = TempDir::new().unwrap();
        let run = aggregate_directory(temp.path(), &ScanConfig::default()).unwrap();
        assert!(run.is_empty());
        assert!(run.stats.is_empty());
    }

    #[test]
    fn test_aggregate_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plan.md");
        fs::write(&file, "").unwrap();

        let err = aggregate_directory(&file, &ScanConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_unreadable_document_is_skipped() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.md");
        fs::write(
            &good,
            "## Review Disposition\n| Severity | Disposition |\n|---|---|\n| Low | n/a |\n",
        )
        .unwrap();
        let missing = temp.path().join("missing.md");

        let run = aggregate_documents(temp.path(), &[missing, good]);
        assert_eq!(run.scanned_files, 2);
        assert_eq!(run.files_with_findings, 1);
    }
}
