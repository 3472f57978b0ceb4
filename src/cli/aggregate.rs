use super::render::{render_empty_json, render_json, render_markdown, EMPTY_MARKDOWN};
use crate::aggregator::aggregate_directory;
use crate::models::{DispositionsConfig, ReportFormat};
use crate::Result;
use std::path::Path;

/// Run the aggregate command.
///
/// `format` overrides the configured report format. Zero findings is a
/// successful, empty report.
pub fn run(dir: &Path, format: Option<ReportFormat>, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => DispositionsConfig::load_from(path)?,
        None if dir.is_dir() => DispositionsConfig::load(dir)?,
        None => DispositionsConfig::default(),
    };
    let format = format.unwrap_or(config.report.format);

    let run = aggregate_directory(dir, &config.scan)?;
    tracing::info!(
        scanned = run.scanned_files,
        with_findings = run.files_with_findings,
        findings = run.findings.len(),
        "aggregation complete"
    );

    let output = match (format, run.is_empty()) {
        (ReportFormat::Json, true) => render_empty_json()?,
        (ReportFormat::Json, false) => render_json(&run)?,
        (ReportFormat::Markdown, true) => EMPTY_MARKDOWN.to_string(),
        (ReportFormat::Markdown, false) => render_markdown(&run),
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(run(temp.path(), Some(ReportFormat::Json), None).is_ok());
        assert!(run(temp.path(), None, None).is_ok());
    }

    #[test]
    fn test_run_not_a_directory() {
        let temp = TempDir::new().unwrap();
        assert!(run(&temp.path().join("missing"), None, None).is_err());
    }

    #[test]
    fn test_run_with_bad_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");
        std::fs::write(&config, "[scan]\nexclude = [\"[\"]\n").unwrap();
        assert!(run(temp.path(), None, Some(&config)).is_err());
    }
}
