//! Disposition table locator
//!
//! A single forward pass over a document's lines. Each disposition heading
//! yields exactly one [`DispositionTable`]: either the table that follows it
//! (header row, separator row, contiguous data rows) or a headerless record
//! when no well-formed table sits beneath the heading.

use super::heading::match_disposition_heading;
use super::row::{is_separator_row, parse_table_row};
use crate::models::{DispositionTable, TableRow};

/// Heading waiting for its table
#[derive(Debug, Clone, Copy)]
struct PendingHeading {
    round: Option<u64>,
    /// 1-indexed
    line: usize,
}

/// Scanner states
#[derive(Debug)]
enum LocatorState {
    Scanning,
    /// After a heading, consuming blank lines
    SkipBlank(PendingHeading),
    ExpectHeaderRow(PendingHeading),
    ExpectSeparatorRow {
        heading: PendingHeading,
        header_line: usize,
        header_cells: Vec<String>,
    },
    InDataRows(DispositionTable),
}

/// Line-scanning state machine that collects disposition tables
pub struct TableLocator<'a> {
    lines: &'a [&'a str],
    /// 0-indexed position of the next line to examine
    pos: usize,
    state: LocatorState,
    tables: Vec<DispositionTable>,
}

impl<'a> TableLocator<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            pos: 0,
            state: LocatorState::Scanning,
            tables: Vec::new(),
        }
    }

    /// Run the scan to completion, returning tables in document order
    pub fn locate(mut self) -> Vec<DispositionTable> {
        while self.pos < self.lines.len() {
            let state = std::mem::replace(&mut self.state, LocatorState::Scanning);
            self.state = self.step(state);
        }
        self.finish();
        self.tables
    }

    /// Consume (or re-examine) the line at `pos` and return the next state
    fn step(&mut self, state: LocatorState) -> LocatorState {
        let line = self.lines[self.pos];
        let line_number = self.pos + 1;

        match state {
            LocatorState::Scanning => {
                self.pos += 1;
                match match_disposition_heading(line) {
                    Some(heading) => {
                        tracing::debug!(line = line_number, round = ?heading.round, "disposition heading");
                        LocatorState::SkipBlank(PendingHeading {
                            round: heading.round,
                            line: line_number,
                        })
                    }
                    None => LocatorState::Scanning,
                }
            }

            LocatorState::SkipBlank(heading) => {
                if line.trim().is_empty() {
                    self.pos += 1;
                    LocatorState::SkipBlank(heading)
                } else {
                    LocatorState::ExpectHeaderRow(heading)
                }
            }

            LocatorState::ExpectHeaderRow(heading) => match parse_table_row(line) {
                Some(cells) if !cells.is_empty() => {
                    self.pos += 1;
                    LocatorState::ExpectSeparatorRow {
                        heading,
                        header_line: line_number,
                        header_cells: cells,
                    }
                }
                _ => self.abandon(heading),
            },

            LocatorState::ExpectSeparatorRow {
                heading,
                header_line,
                header_cells,
            } => match parse_table_row(line) {
                Some(cells) if !cells.is_empty() && is_separator_row(&cells) => {
                    self.pos += 1;
                    LocatorState::InDataRows(DispositionTable {
                        round: heading.round,
                        heading_line: heading.line,
                        header_line,
                        header_cells,
                        separator_line: Some(line_number),
                        rows: Vec::new(),
                    })
                }
                _ => self.abandon(heading),
            },

            LocatorState::InDataRows(mut table) => match parse_table_row(line) {
                Some(cells) => {
                    self.pos += 1;
                    if !is_separator_row(&cells) {
                        table.rows.push(TableRow {
                            line: line_number,
                            cells,
                        });
                    }
                    LocatorState::InDataRows(table)
                }
                None => {
                    // The line that ends the table may itself be a heading,
                    // so it is left for the scanning state
                    self.push_table(table);
                    LocatorState::Scanning
                }
            },
        }
    }

    /// Record a headerless table and skip past the line that failed
    fn abandon(&mut self, heading: PendingHeading) -> LocatorState {
        self.pos += 1;
        self.push_table(DispositionTable::headerless(heading.round, heading.line));
        LocatorState::Scanning
    }

    /// Flush whatever the state machine holds when the input runs out
    fn finish(&mut self) {
        match std::mem::replace(&mut self.state, LocatorState::Scanning) {
            LocatorState::Scanning => {}
            LocatorState::SkipBlank(heading) | LocatorState::ExpectHeaderRow(heading) => {
                self.push_table(DispositionTable::headerless(heading.round, heading.line));
            }
            LocatorState::ExpectSeparatorRow { heading, .. } => {
                self.push_table(DispositionTable::headerless(heading.round, heading.line));
            }
            LocatorState::InDataRows(table) => self.push_table(table),
        }
    }

    fn push_table(&mut self, table: DispositionTable) {
        tracing::debug!(
            heading_line = table.heading_line,
            round = ?table.round,
            columns = table.column_count(),
            rows = table.rows.len(),
            "disposition table located"
        );
        self.tables.push(table);
    }
}

/// Find all disposition tables in a document's text
pub fn find_disposition_tables(content: &str) -> Vec<DispositionTable> {
    let lines: Vec<&str> = content.lines().collect();
    TableLocator::new(&lines).locate()
}
