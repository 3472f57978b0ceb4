use super::label::{Disposition, Severity};
use serde::Serialize;
use std::path::PathBuf;

/// One review finding extracted from a disposition table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// File the finding was read from
    pub file: PathBuf,
    /// Resolved round (unlabeled tables get an implicit number)
    pub round: u64,
    pub finding_id: Option<String>,
    pub reviewer: Option<String>,
    pub severity: Severity,
    pub severity_raw: String,
    pub summary: Option<String>,
    pub disposition: Disposition,
    pub disposition_raw: String,
    pub notes: Option<String>,
}
