use regex::Regex;
use std::sync::LazyLock;

/// `---`, `:--`, `--:`, `:-:`
static SEPARATOR_CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:?-+:?$").expect("separator cell pattern is valid")
});

/// Parse a markdown table row into trimmed cells.
///
/// Returns `None` unless the trimmed line starts with `|`. The empty pieces
/// produced by the leading and trailing pipes are dropped. Pipes inside cell
/// content are not escaped; `a \| b` splits into two cells.
pub fn parse_table_row(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if !line.starts_with('|') {
        return None;
    }

    let mut parts: Vec<&str> = line.split('|').collect();
    if parts.first().is_some_and(|first| first.trim().is_empty()) {
        parts.remove(0);
    }
    if parts.last().is_some_and(|last| last.trim().is_empty()) {
        parts.pop();
    }

    Some(parts.into_iter().map(|cell| cell.trim().to_string()).collect())
}

/// Check whether every cell of a parsed row is a separator cell.
///
/// An empty cell list counts as a separator; callers that need a real
/// separator must also require at least one cell.
pub fn is_separator_row<S: AsRef<str>>(cells: &[S]) -> bool {
    cells
        .iter()
        .all(|cell| SEPARATOR_CELL_RE.is_match(cell.as_ref()))
}
