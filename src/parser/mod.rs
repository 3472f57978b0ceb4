pub mod columns;
pub mod document;
pub mod heading;
pub mod row;
pub mod table;

pub use columns::{find_column_index, normalize_column_name, ColumnMap, ColumnRole};
pub use document::{ensure_directory, read_document, InputError};
pub use heading::{match_disposition_heading, HeadingMatch};
pub use row::{is_separator_row, parse_table_row};
pub use table::{find_disposition_tables, TableLocator};
