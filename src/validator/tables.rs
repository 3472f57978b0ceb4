use crate::models::{
    Disposition, DispositionTable, FileValidation, IssueKind, Severity, ValidationIssue,
};
use crate::parser::{find_disposition_tables, read_document, ColumnMap, InputError};
use std::path::Path;

/// Validate a single disposition table.
///
/// Returns issues in row order; an empty list means the table is valid. A
/// headerless table is valid. Missing mandatory columns are reported once
/// each and stop row-level checks.
pub fn validate_table(table: &DispositionTable) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if table.is_headerless() {
        return issues;
    }

    let columns = ColumnMap::resolve(&table.header_cells);
    for role in columns.missing_mandatory() {
        issues.push(ValidationIssue::new(
            table.round,
            table.heading_line,
            IssueKind::MissingColumn {
                column: role.name(),
                found: table.header_cells.clone(),
            },
        ));
    }

    // Can't check rows without knowing where the values are
    let Some((severity_idx, disposition_idx)) = columns.mandatory() else {
        return issues;
    };

    let expected = table.column_count();
    for row in &table.rows {
        if row.cells.len() != expected {
            issues.push(ValidationIssue::new(
                table.round,
                row.line,
                IssueKind::ColumnCountMismatch {
                    expected,
                    actual: row.cells.len(),
                    cells: row.cells.clone(),
                },
            ));
            continue;
        }

        let severity = &row.cells[severity_idx];
        if Severity::classify(severity).is_none() {
            issues.push(ValidationIssue::new(
                table.round,
                row.line,
                IssueKind::UnrecognizedSeverity(severity.clone()),
            ));
        }

        let disposition = &row.cells[disposition_idx];
        if Disposition::classify(disposition).is_none() {
            issues.push(ValidationIssue::new(
                table.round,
                row.line,
                IssueKind::UnrecognizedDisposition(disposition.clone()),
            ));
        }
    }

    issues
}

/// Validate every disposition table in a document's text
pub fn validate_document(path: &Path, content: &str) -> FileValidation {
    let tables = find_disposition_tables(content);
    let issues: Vec<ValidationIssue> = tables.iter().flat_map(validate_table).collect();

    tracing::debug!(
        file = %path.display(),
        tables = tables.len(),
        issues = issues.len(),
        "validated document"
    );

    FileValidation {
        file: path.to_path_buf(),
        tables_found: tables.len(),
        issues,
    }
}

/// Read and validate one file.
///
/// A file with no disposition tables passes; it may not have been reviewed
/// yet.
pub fn validate_file(path: &Path) -> Result<FileValidation, InputError> {
    let content = read_document(path)?;
    Ok(validate_document(path, &content))
}
