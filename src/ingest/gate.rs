use super::schema::REPORT_SCHEMA;
use serde_json::Value;

/// One structural problem found by the gate, addressed by instance path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateIssue {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for GateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Checks the raw document against the shallow report schema. An empty
/// issue list means the document may proceed to processing.
pub fn validate_document(doc: &Value) -> Vec<GateIssue> {
    let compiled = match jsonschema::JSONSchema::compile(&REPORT_SCHEMA) {
        Ok(schema) => schema,
        Err(e) => {
            return vec![GateIssue {
                path: "$".to_string(),
                message: format!("Schema compilation error: {}", e),
            }]
        }
    };

    let result = match compiled.validate(doc) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| {
                let path = e.instance_path.to_string();
                GateIssue {
                    path: if path.is_empty() { "$".to_string() } else { path },
                    message: e.to_string(),
                }
            })
            .collect(),
    };
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_valid() -> Value {
        json!({
            "ReportMetadata": {
                "TenantId": "t-1",
                "TenantName": "Contoso",
                "GeneratedDate": "2025-08-01T00:00:00Z"
            },
            "TenantInfo": { "Summary": {} },
            "Users": { "Summary": {} },
            "SecureScore": {},
            "AppRegistrationExpiry": { "Summary": {}, "Credentials": [] }
        })
    }

    #[test]
    fn test_gate_accepts_minimal_document() {
        assert!(validate_document(&minimal_valid()).is_empty());
    }

    #[test]
    fn test_gate_rejects_empty_document() {
        let issues = validate_document(&json!({}));
        assert!(!issues.is_empty());
    }

    #[test]
    fn test_gate_reports_wrong_container_type() {
        let mut doc = minimal_valid();
        doc["Users"] = json!([]);
        let issues = validate_document(&doc);
        assert!(issues.iter().any(|i| i.path.contains("Users")));
    }

    #[test]
    fn test_gate_reports_missing_nested_summary() {
        let mut doc = minimal_valid();
        doc["TenantInfo"] = json!({});
        let issues = validate_document(&doc);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.contains("TenantInfo"));
    }

    #[test]
    fn test_gate_does_not_inspect_deep_fields() {
        let mut doc = minimal_valid();
        // Arbitrary junk below the gated level passes.
        doc["Users"]["Summary"] = json!({ "TotalUsers": "not a number" });
        doc["SecureScore"] = json!({ "HistoricalScores": "garbage" });
        assert!(validate_document(&doc).is_empty());
    }
}
