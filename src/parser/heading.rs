use regex::Regex;
use std::sync::LazyLock;

/// Level-2 disposition headings, e.g.
///
/// ```text
/// ## Review Disposition
/// ## Round 1 Review Disposition
/// ## R1 Review Disposition
/// ## 15) Round 1 Review Disposition
/// ## 23. Round 1 Review Disposition
/// ## 26a) Round 2 Review Disposition
/// ```
static DISPOSITION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^##\s+(?:\d+[a-z]?[.)]\s*)?(?:(?:Round\s+(\d+)\s+)?Review\s+Disposition|R(\d+)\s+Review\s+Disposition)\s*$",
    )
    .expect("disposition heading pattern is valid")
});

/// A recognized disposition section heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Round from "Round N" or "RN"; `None` means unlabeled (not round 0)
    pub round: Option<u64>,
}

/// Match a line against the disposition heading pattern
pub fn match_disposition_heading(line: &str) -> Option<HeadingMatch> {
    let captures = DISPOSITION_HEADING_RE.captures(line)?;
    let round = captures
        .get(1)
        .or_else(|| captures.get(2))
        .and_then(|m| match m.as_str().parse::<u64>() {
            Ok(round) => Some(round),
            Err(err) => {
                tracing::warn!(
                    round = m.as_str(),
                    "round number out of range, treating heading as unlabeled: {}",
                    err
                );
                None
            }
        });
    Some(HeadingMatch { round })
}
