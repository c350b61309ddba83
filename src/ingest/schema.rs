use serde_json::{json, Value};
use std::sync::LazyLock;

/// Shallow structural contract for an uploaded report: required top-level
/// sections with the right container types. Deep field correctness is the
/// processors' job, expressed as graceful degradation rather than rejection.
pub static REPORT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["ReportMetadata", "TenantInfo", "Users", "SecureScore", "AppRegistrationExpiry"],
        "properties": {
            "ReportMetadata": {
                "type": "object",
                "required": ["TenantId", "TenantName", "GeneratedDate"],
                "properties": {
                    "TenantId": { "type": "string" },
                    "TenantName": { "type": "string" },
                    "GeneratedDate": { "type": "string" }
                }
            },
            "TenantInfo": {
                "type": "object",
                "required": ["Summary"],
                "properties": {
                    "Summary": { "type": "object" }
                }
            },
            "Users": {
                "type": "object",
                "required": ["Summary"],
                "properties": {
                    "Summary": { "type": "object" }
                }
            },
            "SecureScore": { "type": "object" },
            "AppRegistrationExpiry": {
                "type": "object",
                "required": ["Summary", "Credentials"],
                "properties": {
                    "Summary": { "type": "object" },
                    "Credentials": { "type": "array" }
                }
            }
        }
    })
});
