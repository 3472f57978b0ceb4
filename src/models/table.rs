use serde::Serialize;

/// A data row inside a disposition table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Source line (1-indexed)
    pub line: usize,
    /// Raw, trimmed cell values
    pub cells: Vec<String>,
}

/// One disposition section: the heading plus the table beneath it, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispositionTable {
    /// Round number from the heading; `None` means unlabeled
    pub round: Option<u64>,
    /// Line of the section heading (1-indexed)
    pub heading_line: usize,
    /// Line of the header row (1-indexed); equals `heading_line` for a
    /// headerless table
    pub header_line: usize,
    pub header_cells: Vec<String>,
    /// Line of the separator row (1-indexed), absent for a headerless table
    pub separator_line: Option<usize>,
    pub rows: Vec<TableRow>,
}

impl DispositionTable {
    /// A heading with no well-formed table under it ("no findings this round")
    pub fn headerless(round: Option<u64>, heading_line: usize) -> Self {
        Self {
            round,
            heading_line,
            header_line: heading_line,
            header_cells: Vec::new(),
            separator_line: None,
            rows: Vec::new(),
        }
    }

    pub fn is_headerless(&self) -> bool {
        self.header_cells.is_empty()
    }

    /// Number of columns declared by the header row
    pub fn column_count(&self) -> usize {
        self.header_cells.len()
    }

    /// Label used in messages: "Round N" or "Review Disposition"
    pub fn round_label(&self) -> String {
        round_label(self.round)
    }
}

/// "Round N" for labeled rounds, "Review Disposition" otherwise
pub fn round_label(round: Option<u64>) -> String {
    match round {
        Some(n) if n > 0 => format!("Round {}", n),
        _ => "Review Disposition".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headerless_table() {
        let table = DispositionTable::headerless(Some(2), 7);
        assert!(table.is_headerless());
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.header_line, 7);
        assert!(table.separator_line.is_none());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_round_label() {
        assert_eq!(round_label(Some(3)), "Round 3");
        assert_eq!(round_label(None), "Review Disposition");
    }
}
