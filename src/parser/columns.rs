//! Header cell → semantic column resolution

use serde::Serialize;
use std::fmt;

/// Semantic role of a disposition table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnRole {
    FindingId,
    Reviewer,
    Severity,
    Summary,
    Disposition,
    Notes,
}

/// Role → accepted header names (lowercase)
static COLUMN_ALIASES: &[(ColumnRole, &[&str])] = &[
    (ColumnRole::FindingId, &["finding id", "finding", "#", "id"]),
    (ColumnRole::Reviewer, &["reviewer"]),
    (ColumnRole::Severity, &["severity"]),
    (ColumnRole::Summary, &["summary", "description"]),
    (ColumnRole::Disposition, &["disposition"]),
    (ColumnRole::Notes, &["notes", "note", "comments", "comment"]),
];

impl ColumnRole {
    pub const ALL: [ColumnRole; 6] = [
        ColumnRole::FindingId,
        ColumnRole::Reviewer,
        ColumnRole::Severity,
        ColumnRole::Summary,
        ColumnRole::Disposition,
        ColumnRole::Notes,
    ];

    /// Header names accepted for this role
    pub fn aliases(self) -> &'static [&'static str] {
        COLUMN_ALIASES
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }

    /// Severity and Disposition must be present for a table to be usable
    pub fn is_mandatory(self) -> bool {
        matches!(self, ColumnRole::Severity | ColumnRole::Disposition)
    }

    pub fn name(self) -> &'static str {
        match self {
            ColumnRole::FindingId => "Finding",
            ColumnRole::Reviewer => "Reviewer",
            ColumnRole::Severity => "Severity",
            ColumnRole::Summary => "Summary",
            ColumnRole::Disposition => "Disposition",
            ColumnRole::Notes => "Notes",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a header cell for alias matching
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Index of the first header cell (left to right) whose normalized text is
/// one of `candidates`
pub fn find_column_index<S: AsRef<str>>(headers: &[S], candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| candidates.contains(&normalize_column_name(header.as_ref()).as_str()))
}

/// Resolved column positions for one table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub finding_id: Option<usize>,
    pub reviewer: Option<usize>,
    pub severity: Option<usize>,
    pub summary: Option<usize>,
    pub disposition: Option<usize>,
    pub notes: Option<usize>,
}

impl ColumnMap {
    /// Resolve every role against a table's header cells
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let find = |role: ColumnRole| find_column_index(headers, role.aliases());
        Self {
            finding_id: find(ColumnRole::FindingId),
            reviewer: find(ColumnRole::Reviewer),
            severity: find(ColumnRole::Severity),
            summary: find(ColumnRole::Summary),
            disposition: find(ColumnRole::Disposition),
            notes: find(ColumnRole::Notes),
        }
    }

    pub fn index(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::FindingId => self.finding_id,
            ColumnRole::Reviewer => self.reviewer,
            ColumnRole::Severity => self.severity,
            ColumnRole::Summary => self.summary,
            ColumnRole::Disposition => self.disposition,
            ColumnRole::Notes => self.notes,
        }
    }

    /// Mandatory roles that could not be resolved, in role order
    pub fn missing_mandatory(&self) -> Vec<ColumnRole> {
        ColumnRole::ALL
            .into_iter()
            .filter(|role| role.is_mandatory() && self.index(*role).is_none())
            .collect()
    }

    /// Severity and disposition indices, when both are present
    pub fn mandatory(&self) -> Option<(usize, usize)> {
        Some((self.severity?, self.disposition?))
    }
}
