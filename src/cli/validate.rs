use crate::models::FileValidation;
use crate::validator::validate_file;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Run the validate command.
///
/// Returns whether the file passed; input-access failures are errors.
pub fn run(file: &Path, json: bool) -> Result<bool> {
    let validation = validate_file(file)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&validation.to_json_output())?
        );
    } else {
        print_summary(&validation);
    }

    Ok(validation.passed())
}

fn print_summary(validation: &FileValidation) {
    let file = validation.file.display();

    if validation.tables_found == 0 {
        println!(
            "{} No disposition tables found in {}",
            "PASS:".green().bold(),
            file
        );
        return;
    }

    if validation.passed() {
        println!(
            "{} {} disposition table(s) validated successfully in {}",
            "PASS:".green().bold(),
            validation.tables_found,
            file
        );
        return;
    }

    println!(
        "{} {} error(s) in {} disposition table(s) in {}",
        "FAIL:".red().bold(),
        validation.issues.len(),
        validation.tables_found,
        file
    );
    println!();
    for message in validation.messages() {
        println!("  {} {}", "ERROR:".red(), message);
    }
    println!();
    println!("Fix the above errors and re-run validation.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_pass_and_fail() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.md");
        std::fs::write(
            &good,
            "## Review Disposition\n| Finding | Severity | Disposition |\n|---|---|---|\n| F1 | P0 | Incorporated |\n",
        )
        .unwrap();
        let bad = temp.path().join("bad.md");
        std::fs::write(
            &bad,
            "## Review Disposition\n| Finding | Severity | Disposition |\n|---|---|---|\n| F1 | P9 | Incorporated |\n",
        )
        .unwrap();

        assert!(run(&good, false).unwrap());
        assert!(!run(&bad, true).unwrap());
    }

    #[test]
    fn test_run_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(run(&temp.path().join("missing.md"), false).is_err());
    }
}
