use super::label::{Disposition, Severity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Severity and disposition histograms shared by every bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Breakdown {
    pub total: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_disposition: BTreeMap<Disposition, usize>,
}

impl Breakdown {
    pub fn record(&mut self, severity: &Severity, disposition: &Disposition) {
        self.total += 1;
        *self.by_severity.entry(severity.clone()).or_insert(0) += 1;
        *self.by_disposition.entry(disposition.clone()).or_insert(0) += 1;
    }

    pub fn severity_count(&self, severity: &Severity) -> usize {
        self.by_severity.get(severity).copied().unwrap_or(0)
    }

    pub fn disposition_count(&self, disposition: &Disposition) -> usize {
        self.by_disposition.get(disposition).copied().unwrap_or(0)
    }

    /// Incorporated findings over all findings that are not N/A.
    ///
    /// Returns `(incorporated, counted, percent)`, or `None` when every
    /// finding is N/A.
    pub fn incorporation_rate(&self) -> Option<(usize, usize, f64)> {
        let counted = self.total - self.disposition_count(&Disposition::NotApplicable);
        if counted == 0 {
            return None;
        }
        let incorporated = self.disposition_count(&Disposition::Incorporated);
        Some((
            incorporated,
            counted,
            incorporated as f64 / counted as f64 * 100.0,
        ))
    }
}

/// Per-round rollup
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoundStats {
    #[serde(flatten)]
    pub breakdown: Breakdown,
    /// Contributing files and their finding counts
    pub files: BTreeMap<PathBuf, usize>,
}

/// Per-file rollup
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileStats {
    #[serde(flatten)]
    pub breakdown: Breakdown,
    pub by_round: BTreeMap<u64, usize>,
}

/// Direction of a round-over-round change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Percentage change in total findings relative to the previous round
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Absolute magnitude in percent
    pub percent: f64,
}

impl Trend {
    /// Compute the change from `previous` to `current`.
    ///
    /// A zero previous total has no meaningful percentage and yields `None`.
    /// Non-positive changes are reported as `Down`.
    pub fn between(previous: usize, current: usize) -> Option<Trend> {
        if previous == 0 {
            return None;
        }
        let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
        let direction = if change <= 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Up
        };
        Some(Trend {
            direction,
            percent: change.abs(),
        })
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            TrendDirection::Up => '\u{2191}',
            TrendDirection::Down => '\u{2193}',
        };
        write!(f, "{}{:.0}%", arrow, self.percent)
    }
}

/// One entry of the convergence series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergencePoint {
    pub round: u64,
    pub total: usize,
    pub incorporated: usize,
    pub not_incorporated: usize,
    pub deferred: usize,
    pub not_applicable: usize,
    /// `None` for the first round or after an empty round
    pub trend: Option<Trend>,
}

/// Everything derived from one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub overall: Breakdown,
    pub per_round: BTreeMap<u64, RoundStats>,
    pub per_file: BTreeMap<PathBuf, FileStats>,
    /// Ordered by ascending round
    pub convergence: Vec<ConvergencePoint>,
}

impl AggregateStats {
    pub fn is_empty(&self) -> bool {
        self.overall.total == 0
    }

    /// Observed rounds in ascending order
    pub fn rounds(&self) -> impl Iterator<Item = u64> + '_ {
        self.per_round.keys().copied()
    }
}
