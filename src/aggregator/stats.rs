use crate::models::{
    AggregateStats, ConvergencePoint, Disposition, Finding, RoundStats, Trend,
};
use std::collections::BTreeMap;

impl AggregateStats {
    /// Compute per-round, per-file, and overall statistics plus the
    /// convergence series from a full set of findings
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut stats = AggregateStats::default();

        for finding in findings {
            let round = stats.per_round.entry(finding.round).or_default();
            round.breakdown.record(&finding.severity, &finding.disposition);
            *round.files.entry(finding.file.clone()).or_insert(0) += 1;

            let file = stats.per_file.entry(finding.file.clone()).or_default();
            file.breakdown.record(&finding.severity, &finding.disposition);
            *file.by_round.entry(finding.round).or_insert(0) += 1;

            stats
                .overall
                .record(&finding.severity, &finding.disposition);
        }

        stats.convergence = convergence_series(&stats.per_round);
        stats
    }
}

/// Round-over-round convergence, ordered by ascending round.
///
/// Each round is compared against the immediately preceding observed round;
/// the first round has no trend.
pub fn convergence_series(per_round: &BTreeMap<u64, RoundStats>) -> Vec<ConvergencePoint> {
    let mut previous_total: Option<usize> = None;

    per_round
        .iter()
        .map(|(&round, stats)| {
            let breakdown = &stats.breakdown;
            let trend = previous_total.and_then(|previous| Trend::between(previous, breakdown.total));
            previous_total = Some(breakdown.total);

            ConvergencePoint {
                round,
                total: breakdown.total,
                incorporated: breakdown.disposition_count(&Disposition::Incorporated),
                not_incorporated: breakdown.disposition_count(&Disposition::NotIncorporated),
                deferred: breakdown.disposition_count(&Disposition::Deferred),
                not_applicable: breakdown.disposition_count(&Disposition::NotApplicable),
                trend,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, TrendDirection};
    use std::path::PathBuf;

    fn finding(file: &str, round: u64, severity: Severity, disposition: Disposition) -> Finding {
        Finding {
            file: PathBuf::from(file),
            round,
            finding_id: None,
            reviewer: None,
            severity_raw: severity.to_string(),
            severity,
            summary: None,
            disposition_raw: disposition.to_string(),
            disposition,
            notes: None,
        }
    }

    fn repeat(file: &str, round: u64, count: usize) -> Vec<Finding> {
        (0..count)
            .map(|_| finding(file, round, Severity::P2, Disposition::Incorporated))
            .collect()
    }

    #[test]
    fn test_empty() {
        let stats = AggregateStats::from_findings(&[]);
        assert!(stats.is_empty());
        assert!(stats.convergence.is_empty());
    }

    #[test]
    fn test_convergence_decrease() {
        let mut findings = repeat("a.md", 1, 10);
        findings.extend(repeat("a.md", 2, 4));
        let stats = AggregateStats::from_findings(&findings);

        assert_eq!(stats.convergence.len(), 2);
        assert_eq!(stats.convergence[0].round, 1);
        assert!(stats.convergence[0].trend.is_none());

        let trend = stats.convergence[1].trend.unwrap();
        assert_eq!(trend.direction, TrendDirection::Down);
        assert!((trend.percent - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_convergence_uses_sorted_rounds() {
        let mut findings = repeat("a.md", 5, 3);
        findings.extend(repeat("b.md", 2, 2));
        let stats = AggregateStats::from_findings(&findings);

        let rounds: Vec<u64> = stats.convergence.iter().map(|c| c.round).collect();
        assert_eq!(rounds, vec![2, 5]);
        let trend = stats.convergence[1].trend.unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_buckets() {
        let findings = vec![
            finding("a.md", 1, Severity::P0, Disposition::Incorporated),
            finding("a.md", 1, Severity::P1, Disposition::Deferred),
            finding("b.md", 1, Severity::P0, Disposition::NotIncorporated),
            finding("b.md", 2, Severity::Info, Disposition::NotApplicable),
            finding(
                "b.md",
                2,
                Severity::Other("Severe".to_string()),
                Disposition::Other("Rejected".to_string()),
            ),
        ];
        let stats = AggregateStats::from_findings(&findings);

        assert_eq!(stats.overall.total, 5);
        assert_eq!(stats.overall.severity_count(&Severity::P0), 2);
        assert_eq!(
            stats.overall.severity_count(&Severity::Other("Severe".to_string())),
            1
        );

        let round1 = &stats.per_round[&1];
        assert_eq!(round1.breakdown.total, 3);
        assert_eq!(round1.files.len(), 2);
        assert_eq!(round1.files[&PathBuf::from("a.md")], 2);

        let file_b = &stats.per_file[&PathBuf::from("b.md")];
        assert_eq!(file_b.breakdown.total, 3);
        assert_eq!(file_b.by_round[&1], 1);
        assert_eq!(file_b.by_round[&2], 2);
        assert_eq!(
            file_b
                .breakdown
                .disposition_count(&Disposition::Other("Rejected".to_string())),
            1
        );

        let point = &stats.convergence[0];
        assert_eq!(
            (point.incorporated, point.not_incorporated, point.deferred, point.not_applicable),
            (1, 1, 1, 0)
        );
        assert_eq!(stats.rounds().collect::<Vec<_>>(), vec![1, 2]);
    }
}
