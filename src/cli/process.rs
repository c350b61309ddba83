use crate::cli::commands::ProcessArgs;
use crate::errors::ReportError;
use crate::ingest::{load_report, validate_document};
use crate::processing::process_all;
use std::path::PathBuf;
use tracing::{info, warn};

pub fn handle_process(args: ProcessArgs) -> Result<(), ReportError> {
    let path = PathBuf::from(&args.input);
    let doc = load_report(&path)?;

    let issues = validate_document(&doc);
    if !issues.is_empty() {
        if args.force {
            for issue in &issues {
                warn!(issue = %issue, "Structural gate failure ignored");
            }
        } else {
            for issue in &issues {
                eprintln!("  {}", issue);
            }
            return Err(ReportError::Validation(format!(
                "Report failed the structural gate with {} issue(s)",
                issues.len()
            )));
        }
    }

    let report = process_all(&doc);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(output) => {
            std::fs::write(output, &json)
                .map_err(|e| ReportError::Output(format!("{}: {}", output, e)))?;
            info!(path = %output, "Processed report written");
        }
        None => println!("{}", json),
    }
    Ok(())
}
