use crate::models::{Disposition, DispositionTable, Finding, Severity};
use crate::parser::{find_disposition_tables, read_document, ColumnMap, InputError};
use std::path::Path;

/// Resolve a table's round against the per-file implicit round counter.
///
/// `next_unlabeled` is the number the next unlabeled table receives (starts
/// at 1). Returns the resolved round and the updated counter, which always
/// stays above every round seen so far in the file.
pub fn assign_round(next_unlabeled: u64, labeled: Option<u64>) -> (u64, u64) {
    let round = labeled.unwrap_or(next_unlabeled);
    (round, next_unlabeled.max(round.saturating_add(1)))
}

/// Turn one document's tables into findings.
///
/// Headerless tables and tables without Severity/Disposition columns are
/// skipped. Rows whose cell count differs from the header are dropped.
pub fn findings_from_tables(file: &Path, tables: &[DispositionTable]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut next_unlabeled = 1;

    for table in tables {
        if table.is_headerless() {
            continue;
        }

        let columns = ColumnMap::resolve(&table.header_cells);
        let Some((severity_idx, disposition_idx)) = columns.mandatory() else {
            tracing::warn!(
                file = %file.display(),
                line = table.heading_line,
                "skipping disposition table without Severity/Disposition columns"
            );
            continue;
        };

        let (round, next) = assign_round(next_unlabeled, table.round);
        next_unlabeled = next;

        for row in &table.rows {
            if row.cells.len() != table.column_count() {
                tracing::trace!(
                    file = %file.display(),
                    line = row.line,
                    "dropping malformed row"
                );
                continue;
            }

            let cell = |idx: Option<usize>| idx.map(|i| row.cells[i].clone());
            let severity_raw = row.cells[severity_idx].trim().to_string();
            let disposition_raw = row.cells[disposition_idx].trim().to_string();

            findings.push(Finding {
                file: file.to_path_buf(),
                round,
                finding_id: cell(columns.finding_id),
                reviewer: cell(columns.reviewer),
                severity: Severity::normalize(&severity_raw),
                severity_raw,
                summary: cell(columns.summary),
                disposition: Disposition::normalize(&disposition_raw),
                disposition_raw,
                notes: cell(columns.notes),
            });
        }
    }

    findings
}

/// Parse one document's text into findings, attributed to `file`
pub fn document_findings(file: &Path, content: &str) -> Vec<Finding> {
    let tables = find_disposition_tables(content);
    findings_from_tables(file, &tables)
}

/// Read one file and extract its findings
pub fn parse_file_findings(path: &Path) -> Result<Vec<Finding>, InputError> {
    let content = read_document(path)?;
    Ok(document_findings(path, &content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(content: &str) -> Vec<Finding> {
        document_findings(Path::new("plan.md"), content)
    }

    #[test]
    fn test_assign_round() {
        assert_eq!(assign_round(1, None), (1, 2));
        assert_eq!(assign_round(2, None), (2, 3));
        assert_eq!(assign_round(1, Some(5)), (5, 6));
        assert_eq!(assign_round(6, Some(2)), (2, 6));
        assert_eq!(assign_round(1, Some(u64::MAX)), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_full_finding() {
        let content = "## Round 2 Review Disposition\n| Finding ID | Reviewer | Severity | Summary | Disposition | Notes |\n|---|---|---|---|---|---|\n| F1 | alice | P0/Blocker | Race in init | Incorporated (Option B) | fixed |\n";
        let found = findings(content);
        assert_eq!(found.len(), 1);

        let finding = &found[0];
        assert_eq!(finding.round, 2);
        assert_eq!(finding.finding_id.as_deref(), Some("F1"));
        assert_eq!(finding.reviewer.as_deref(), Some("alice"));
        assert_eq!(finding.severity, Severity::P0);
        assert_eq!(finding.severity_raw, "P0/Blocker");
        assert_eq!(finding.summary.as_deref(), Some("Race in init"));
        assert_eq!(finding.disposition, Disposition::Incorporated);
        assert_eq!(finding.disposition_raw, "Incorporated (Option B)");
        assert_eq!(finding.notes.as_deref(), Some("fixed"));
    }

    #[test]
    fn test_optional_columns_absent() {
        let found = findings("## Review Disposition\n| Severity | Disposition |\n|---|---|\n| High | Deferred |\n");
        assert_eq!(found.len(), 1);
        assert!(found[0].finding_id.is_none());
        assert!(found[0].reviewer.is_none());
        assert!(found[0].summary.is_none());
        assert!(found[0].notes.is_none());
        assert_eq!(found[0].round, 1);
    }

    #[test]
    fn test_unrecognized_values_kept_raw() {
        let found = findings("## Review Disposition\n| Severity | Disposition |\n|---|---|\n| Severe | Rejected |\n");
        assert_eq!(found[0].severity, Severity::Other("Severe".to_string()));
        assert_eq!(found[0].disposition, Disposition::Other("Rejected".to_string()));
    }

    #[test]
    fn test_malformed_rows_dropped() {
        let content = "## Review Disposition\n| Finding | Severity | Disposition |\n|---|---|---|\n| F1 | P0 |\n| F2 | P1 | Deferred |\n| F3 | P2 | Deferred | extra |\n";
        let found = findings(content);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].finding_id.as_deref(), Some("F2"));
    }

    #[test]
    fn test_headerless_and_unusable_tables_skipped() {
        let content = "## Round 1 Review Disposition\nNo findings.\n\n## Round 2 Review Disposition\n| Finding | Severity |\n|---|---|\n| F1 | P0 |\n";
        assert!(findings(content).is_empty());
    }

    #[test]
    fn test_unlabeled_rounds_increase() {
        let content = "## Review Disposition\n| Severity | Disposition |\n|---|---|\n| P0 | Incorporated |\n\n## Review Disposition\n| Severity | Disposition |\n|---|---|\n| P1 | Incorporated |\n";
        let rounds: Vec<u64> = findings(content).iter().map(|f| f.round).collect();
        assert_eq!(rounds, vec![1, 2]);
    }

    #[test]
    fn test_unlabeled_after_labeled() {
        let content = "## Round 3 Review Disposition\n| Severity | Disposition |\n|---|---|\n| P0 | Incorporated |\n\n## Review Disposition\n| Severity | Disposition |\n|---|---|\n| P1 | Incorporated |\n\n## Round 1 Review Disposition\n| Severity | Disposition |\n|---|---|\n| P2 | Deferred |\n\n## Review Disposition\n| Severity | Disposition |\n|---|---|\n| P3 | Deferred |\n";
        let rounds: Vec<u64> = findings(content).iter().map(|f| f.round).collect();
        assert_eq!(rounds, vec![3, 4, 1, 5]);
    }

    #[test]
    fn test_large_labeled_round_is_kept() {
        let content = "## Round 99999999999 Review Disposition\n| Severity | Disposition |\n|---|---|\n| P0 | Incorporated |\n\n## Review Disposition\n| Severity | Disposition |\n|---|---|\n| P1 | Deferred |\n";
        let rounds: Vec<u64> = findings(content).iter().map(|f| f.round).collect();
        assert_eq!(rounds, vec![99_999_999_999, 100_000_000_000]);
    }

    #[test]
    fn test_heading_directly_after_heading_is_skipped() {
        let content = "## Round 2 Review Disposition\n## Round 3 Review Disposition\n| Severity | Disposition |\n|---|---|\n| P0 | Incorporated |\n\n## Review Disposition\n| Severity | Disposition |\n|---|---|\n| P1 | Deferred |\n";
        let tables = find_disposition_tables(content);
        assert_eq!(tables.len(), 2);
        assert!(tables[0].is_headerless());
        assert_eq!(tables[0].round, Some(2));

        let found = findings(content);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::P1);
        assert_eq!(found[0].round, 1);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_file_findings(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
    }
}
