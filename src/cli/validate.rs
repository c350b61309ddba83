use crate::cli::commands::ValidateArgs;
use crate::errors::ReportError;
use crate::ingest::{load_report, validate_document};
use console::style;
use std::path::PathBuf;

pub fn handle_validate(args: ValidateArgs) -> Result<(), ReportError> {
    let path = PathBuf::from(&args.input);
    let doc = load_report(&path)?;

    let issues = validate_document(&doc);
    if issues.is_empty() {
        println!("{} {}", style("valid").green().bold(), args.input);
        return Ok(());
    }

    println!("{} {}", style("invalid").red().bold(), args.input);
    for issue in &issues {
        println!("  {} {}", style(&issue.path).cyan(), issue.message);
    }
    Err(ReportError::Validation(format!(
        "{} issue(s) found",
        issues.len()
    )))
}
