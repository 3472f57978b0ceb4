use super::table::round_label;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A content defect found while validating a disposition table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum IssueKind {
    /// A mandatory column (Severity or Disposition) is absent
    #[error("Missing '{column}' column. Found columns: {found:?}")]
    MissingColumn {
        column: &'static str,
        found: Vec<String>,
    },

    /// Row cell count differs from the header's column count
    #[error("Expected {expected} columns, got {actual}. Row: {}", .cells.join("|"))]
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
        cells: Vec<String>,
    },

    #[error(
        "Unrecognized severity '{0}'. Expected one of: P0, P1, P2, P3, Critical, Blocker, High, Medium, Low, Info, etc."
    )]
    UnrecognizedSeverity(String),

    #[error(
        "Unrecognized disposition '{0}'. Expected: 'Incorporated', 'Not Incorporated', 'Deferred', 'Already Present', or 'Incorporated (...)'"
    )]
    UnrecognizedDisposition(String),
}

impl IssueKind {
    /// Whether the defect stops row-level checks for the whole table
    pub fn is_structural(&self) -> bool {
        matches!(self, IssueKind::MissingColumn { .. })
    }
}

/// A located validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Round of the offending table, `None` when unlabeled
    pub round: Option<u64>,
    /// Source line (1-indexed)
    pub line: usize,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(round: Option<u64>, line: usize, kind: IssueKind) -> Self {
        Self { round, line, kind }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}): {}",
            round_label(self.round),
            self.line,
            self.kind
        )
    }
}

/// Outcome of validating one document
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub file: PathBuf,
    pub tables_found: usize,
    /// Issues in document order
    pub issues: Vec<ValidationIssue>,
}

impl FileValidation {
    /// A file passes when no table produced an issue (zero tables passes too)
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human-readable issue messages in document order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.to_string()).collect()
    }

    pub fn to_json_output(&self) -> ValidationJsonOutput {
        ValidationJsonOutput {
            file: self.file.clone(),
            passed: self.passed(),
            tables_found: self.tables_found,
            errors: self.messages(),
        }
    }
}

/// JSON shape printed by `validate --json`
#[derive(Debug, Clone, Serialize)]
pub struct ValidationJsonOutput {
    pub file: PathBuf,
    pub passed: bool,
    pub tables_found: usize,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_labeled_round() {
        let issue = ValidationIssue::new(
            Some(2),
            14,
            IssueKind::UnrecognizedSeverity("Severe".to_string()),
        );
        let text = issue.to_string();
        assert!(text.starts_with("Round 2 (line 14): Unrecognized severity 'Severe'"));
    }

    #[test]
    fn test_issue_display_unlabeled_round() {
        let issue = ValidationIssue::new(
            None,
            3,
            IssueKind::MissingColumn {
                column: "Disposition",
                found: vec!["Finding".to_string(), "Severity".to_string()],
            },
        );
        assert_eq!(
            issue.to_string(),
            "Review Disposition (line 3): Missing 'Disposition' column. Found columns: [\"Finding\", \"Severity\"]"
        );
        assert!(issue.kind.is_structural());
    }

    #[test]
    fn test_column_count_mismatch_message() {
        let kind = IssueKind::ColumnCountMismatch {
            expected: 3,
            actual: 2,
            cells: vec!["F1".to_string(), "P0".to_string()],
        };
        assert_eq!(kind.to_string(), "Expected 3 columns, got 2. Row: F1|P0");
        assert!(!kind.is_structural());
    }

    #[test]
    fn test_file_validation_passed() {
        let validation = FileValidation {
            file: PathBuf::from("plan.md"),
            tables_found: 0,
            issues: Vec::new(),
        };
        assert!(validation.passed());
        let json = validation.to_json_output();
        assert!(json.passed);
        assert!(json.errors.is_empty());
    }
}
