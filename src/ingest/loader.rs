use crate::errors::ReportError;
use serde_json::Value;
use std::path::Path;

const MAX_REPORT_BYTES: u64 = 256 * 1024 * 1024;

/// Reads and parses a report export from disk. Non-JSON input is the only
/// fatal path; everything downstream degrades gracefully.
pub fn load_report(path: &Path) -> Result<Value, ReportError> {
    if !path.exists() {
        return Err(ReportError::Input(format!(
            "Report file not found: {}",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_REPORT_BYTES {
        return Err(ReportError::Input(format!(
            "Report file exceeds {}MB limit",
            MAX_REPORT_BYTES / (1024 * 1024)
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&content)
        .map_err(|e| ReportError::Input(format!("Failed to parse JSON report: {}", e)))?;
    Ok(doc)
}
