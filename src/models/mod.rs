pub mod config;
pub mod finding;
pub mod label;
pub mod stats;
pub mod table;
pub mod validation;

pub use config::{ConfigError, DispositionsConfig, ReportConfig, ReportFormat, ScanConfig};
pub use finding::Finding;
pub use label::{Disposition, Severity};
pub use stats::{
    AggregateStats, Breakdown, ConvergencePoint, FileStats, RoundStats, Trend, TrendDirection,
};
pub use table::{round_label, DispositionTable, TableRow};
pub use validation::{FileValidation, IssueKind, ValidationIssue, ValidationJsonOutput};
