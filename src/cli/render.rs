//! Aggregate report rendering (markdown and JSON)

use crate::aggregator::AggregateRun;
use crate::models::{AggregateStats, Breakdown};
use crate::Result;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const EM_DASH: &str = "\u{2014}";

/// Markdown printed when no findings were aggregated
pub const EMPTY_MARKDOWN: &str = "No disposition tables found in any .md files.";

/// Full markdown report for an aggregation run
pub fn render_markdown(run: &AggregateRun) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "_Scanned {} files, found disposition tables in {} files._\n",
        run.scanned_files, run.files_with_findings
    );
    out.push_str(&render_stats_markdown(&run.stats));
    out
}

/// Markdown body for aggregated statistics
pub fn render_stats_markdown(stats: &AggregateStats) -> String {
    let mut lines: Vec<String> = Vec::new();
    let overall = &stats.overall;

    lines.push("# Disposition Table Aggregate Summary".to_string());
    lines.push(String::new());
    lines.push(format!(
        "**Total findings across all files and rounds:** {}",
        overall.total
    ));
    lines.push(String::new());

    lines.push("## Overall Severity Breakdown".to_string());
    lines.push(String::new());
    lines.push("| Severity | Count | Percentage |".to_string());
    lines.push("|----------|-------|------------|".to_string());
    push_percentage_rows(&mut lines, &overall.by_severity, overall.total);
    lines.push(String::new());

    lines.push("## Overall Disposition Breakdown".to_string());
    lines.push(String::new());
    lines.push("| Disposition | Count | Percentage |".to_string());
    lines.push("|-------------|-------|------------|".to_string());
    push_percentage_rows(&mut lines, &overall.by_disposition, overall.total);
    lines.push(String::new());

    if let Some((incorporated, counted, rate)) = overall.incorporation_rate() {
        lines.push(format!(
            "**Incorporation rate (excluding N/A):** {}/{} ({:.1}%)",
            incorporated, counted, rate
        ));
        lines.push(String::new());
    }

    lines.push("## Convergence Table".to_string());
    lines.push(String::new());
    lines.push(
        "| Round | Total Findings | Incorporated | Not Incorporated | Deferred | N/A | Trend |"
            .to_string(),
    );
    lines.push(
        "|-------|---------------|-------------|-----------------|----------|-----|-------|"
            .to_string(),
    );
    for point in &stats.convergence {
        let trend = point
            .trend
            .map(|trend| trend.to_string())
            .unwrap_or_else(|| EM_DASH.to_string());
        lines.push(format!(
            "| R{} | {} | {} | {} | {} | {} | {} |",
            point.round,
            point.total,
            point.incorporated,
            point.not_incorporated,
            point.deferred,
            point.not_applicable,
            trend
        ));
    }
    lines.push(String::new());

    lines.push("## Per-Round Details".to_string());
    lines.push(String::new());
    for (round, round_stats) in &stats.per_round {
        lines.push(format!("### Round {}", round));
        lines.push(String::new());
        lines.push(format!("**Total findings:** {}", round_stats.breakdown.total));
        lines.push(String::new());
        push_count_tables(&mut lines, &round_stats.breakdown);
        lines.push(format!(
            "**Files with findings:** {}",
            round_stats.files.len()
        ));
        lines.push(String::new());
    }

    lines.push("## Per-File Breakdown".to_string());
    lines.push(String::new());
    let rounds: Vec<u64> = stats.rounds().collect();
    let round_headers: Vec<String> = rounds.iter().map(|r| format!("R{}", r)).collect();
    lines.push(format!("| File | Total | {} |", round_headers.join(" | ")));
    lines.push(format!(
        "|------|-------|{}|",
        vec!["----"; rounds.len()].join("|")
    ));
    for (file, file_stats) in &stats.per_file {
        let mut row = format!("| {} | {} |", file.display(), file_stats.breakdown.total);
        for round in &rounds {
            let count = file_stats.by_round.get(round).copied().unwrap_or(0);
            let _ = write!(row, " {} |", count);
        }
        lines.push(row);
    }
    lines.push(String::new());

    lines.join("\n")
}

fn push_percentage_rows<K: std::fmt::Display>(
    lines: &mut Vec<String>,
    histogram: &BTreeMap<K, usize>,
    total: usize,
) {
    for (label, &count) in histogram.iter().filter(|(_, &count)| count > 0) {
        let pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        lines.push(format!("| {} | {} | {:.1}% |", label, count, pct));
    }
}

fn push_count_rows<K: std::fmt::Display>(lines: &mut Vec<String>, histogram: &BTreeMap<K, usize>) {
    for (label, &count) in histogram.iter().filter(|(_, &count)| count > 0) {
        lines.push(format!("| {} | {} |", label, count));
    }
}

fn push_count_tables(lines: &mut Vec<String>, breakdown: &Breakdown) {
    lines.push("| Severity | Count |".to_string());
    lines.push("|----------|-------|".to_string());
    push_count_rows(lines, &breakdown.by_severity);
    lines.push(String::new());

    lines.push("| Disposition | Count |".to_string());
    lines.push("|-------------|-------|".to_string());
    push_count_rows(lines, &breakdown.by_disposition);
    lines.push(String::new());
}

/// Pretty JSON encoding of an aggregation run
pub fn render_json(run: &AggregateRun) -> Result<String> {
    Ok(serde_json::to_string_pretty(run)?)
}

/// JSON printed when no findings were aggregated
pub fn render_empty_json() -> Result<String> {
    Ok(serde_json::to_string(&serde_json::json!({
        "message": "No disposition tables found",
        "total": 0,
    }))?)
}
