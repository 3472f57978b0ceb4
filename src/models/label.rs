//! Canonical severity and disposition labels
//!
//! Reviewers write severity and disposition cells as free text, e.g.
//! `P0/Blocker` or `Incorporated (Option B)`. These types decide whether a raw
//! value is recognized and map it onto the small set of labels used for
//! aggregation. Accepted raw forms live in static lookup tables.

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical severity of a finding
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    P0,
    P1,
    P2,
    P3,
    Info,
    NotApplicable,
    /// Unrecognized raw text, kept verbatim (trimmed)
    Other(String),
}

/// Canonical severity → accepted raw forms (lowercase)
static SEVERITY_FORMS: &[(Severity, &[&str])] = &[
    (Severity::P0, &["p0", "critical", "blocker", "blocking"]),
    (Severity::P1, &["p1", "high"]),
    (Severity::P2, &["p2", "medium"]),
    (Severity::P3, &["p3", "low"]),
    (
        Severity::Info,
        &[
            "info",
            "informational",
            "non-blocking",
            "nonblocking",
            "note",
            "question",
            "gap",
        ],
    ),
    // em-dash is used in "no new findings" rows
    (Severity::NotApplicable, &["n/a", "none", "\u{2014}"]),
];

impl Severity {
    /// Canonical reporting order of the recognized labels
    pub const CANONICAL: [Severity; 6] = [
        Severity::P0,
        Severity::P1,
        Severity::P2,
        Severity::P3,
        Severity::Info,
        Severity::NotApplicable,
    ];

    /// Classify a raw severity cell.
    ///
    /// Returns `None` when the value is not recognized. Compound values such
    /// as `P0/Blocker` or `high, blocking` are split on `/` and `,` and the
    /// first recognized part wins.
    pub fn classify(raw: &str) -> Option<Severity> {
        let value = raw.trim().to_lowercase();
        if let Some(severity) = lookup_severity(&value) {
            return Some(severity);
        }

        value
            .split(['/', ','])
            .find_map(|part| lookup_severity(part.trim()))
    }

    /// Map a raw severity cell to its canonical label, passing unrecognized
    /// text through unchanged
    pub fn normalize(raw: &str) -> Severity {
        Self::classify(raw).unwrap_or_else(|| Severity::Other(raw.trim().to_string()))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Severity::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::P0 => "P0",
            Severity::P1 => "P1",
            Severity::P2 => "P2",
            Severity::P3 => "P3",
            Severity::Info => "Info",
            Severity::NotApplicable => "N/A",
            Severity::Other(raw) => raw,
        }
    }
}

fn lookup_severity(value: &str) -> Option<Severity> {
    SEVERITY_FORMS
        .iter()
        .find(|(_, forms)| forms.contains(&value))
        .map(|(severity, _)| severity.clone())
}

/// Canonical disposition of a finding
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disposition {
    Incorporated,
    NotIncorporated,
    Deferred,
    NotApplicable,
    /// Unrecognized raw text, kept verbatim (trimmed)
    Other(String),
}

/// Canonical disposition → accepted raw forms (lowercase, exact match)
static DISPOSITION_FORMS: &[(Disposition, &[&str])] = &[
    (
        Disposition::Incorporated,
        &["incorporated", "incorporate", "already present", "acknowledged"],
    ),
    (Disposition::NotIncorporated, &["not incorporated"]),
    (Disposition::Deferred, &["deferred"]),
    (Disposition::NotApplicable, &["n/a"]),
];

/// Prefixes that accept annotated values like "Incorporated (Option B)"
static DISPOSITION_PREFIXES: &[(&str, Disposition)] = &[
    ("incorporated", Disposition::Incorporated),
    ("incorporate", Disposition::Incorporated),
    ("not incorporated", Disposition::NotIncorporated),
];

/// Prefixes folded onto a canonical label when normalizing. Narrower than
/// [`DISPOSITION_PREFIXES`]: "Incorporate later" is accepted but keeps its
/// own category.
static NORMALIZED_PREFIXES: &[(&str, Disposition)] = &[
    ("incorporated", Disposition::Incorporated),
    ("not incorporated", Disposition::NotIncorporated),
];

impl Disposition {
    /// Canonical reporting order of the recognized labels
    pub const CANONICAL: [Disposition; 4] = [
        Disposition::Incorporated,
        Disposition::NotIncorporated,
        Disposition::Deferred,
        Disposition::NotApplicable,
    ];

    /// Classify a raw disposition cell, returning `None` when unrecognized
    pub fn classify(raw: &str) -> Option<Disposition> {
        let value = raw.trim().to_lowercase();
        lookup_disposition(&value).or_else(|| match_prefix(DISPOSITION_PREFIXES, &value))
    }

    /// Map a raw disposition cell to its canonical label, passing
    /// unrecognized text through as its own category
    pub fn normalize(raw: &str) -> Disposition {
        let value = raw.trim().to_lowercase();
        lookup_disposition(&value)
            .or_else(|| match_prefix(NORMALIZED_PREFIXES, &value))
            .unwrap_or_else(|| Disposition::Other(raw.trim().to_string()))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Disposition::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Disposition::Incorporated => "Incorporated",
            Disposition::NotIncorporated => "Not Incorporated",
            Disposition::Deferred => "Deferred",
            Disposition::NotApplicable => "N/A",
            Disposition::Other(raw) => raw,
        }
    }
}

fn lookup_disposition(value: &str) -> Option<Disposition> {
    DISPOSITION_FORMS
        .iter()
        .find(|(_, forms)| forms.contains(&value))
        .map(|(disposition, _)| disposition.clone())
}

fn match_prefix(prefixes: &[(&str, Disposition)], value: &str) -> Option<Disposition> {
    prefixes
        .iter()
        .find(|(prefix, _)| value.starts_with(prefix))
        .map(|(_, disposition)| disposition.clone())
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as their display labels so they can key JSON histograms.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Disposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
