pub mod tables;

pub use tables::{validate_document, validate_file, validate_table};
