// Dispositions - Review disposition table tooling
// Validates and aggregates the review disposition tables kept in markdown plan documents

pub mod aggregator;
pub mod cli;
pub mod models;
pub mod parser;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use aggregator::{aggregate_directory, parse_file_findings, AggregateRun};
pub use models::{AggregateStats, Disposition, DispositionTable, Finding, Severity};
pub use parser::find_disposition_tables;
pub use validator::validate_file;
