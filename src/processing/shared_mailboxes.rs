use crate::models::SharedMailbox;
use crate::utils::json::{as_dict, bool_field, object_items, str_field};
use serde_json::Value;

/// Shared mailbox compliance rows. Two producer generations exist: a flat
/// array, and a wrapper object; compliance is either a boolean flag or a
/// status string.
pub fn process_shared_mailboxes(doc: &Value) -> Option<Vec<SharedMailbox>> {
    let root = as_dict(doc);
    if !root.contains_key("SharedMailboxCompliance") {
        return None;
    }

    let section = root.get("SharedMailboxCompliance");
    let rows_source = match section {
        Some(Value::Object(map)) => map.get("SharedMailboxes").or_else(|| map.get("Mailboxes")),
        other => other,
    };

    let rows = object_items(rows_source)
        .into_iter()
        .map(|m| {
            let is_compliant = match m.get("IsCompliant") {
                Some(Value::Bool(b)) => *b,
                _ => str_field(m, "ComplianceStatus")
                    .map(|s| s.eq_ignore_ascii_case("compliant"))
                    .unwrap_or(false),
            };
            SharedMailbox {
                display_name: str_field(m, "DisplayName").unwrap_or_else(|| "Unknown".to_string()),
                upn: str_field(m, "UserPrincipalName").unwrap_or_default(),
                sign_in_enabled: bool_field(m, "SignInEnabled"),
                has_license: bool_field(m, "HasExchangeLicense"),
                is_compliant,
            }
        })
        .collect();
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shared_mailboxes_absent() {
        assert!(process_shared_mailboxes(&json!({})).is_none());
    }

    #[test]
    fn test_flat_array_with_boolean_flag() {
        let doc = json!({
            "SharedMailboxCompliance": [
                { "DisplayName": "Support", "UserPrincipalName": "support@contoso.com",
                  "SignInEnabled": false, "HasExchangeLicense": true, "IsCompliant": true }
            ]
        });
        let rows = process_shared_mailboxes(&doc).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_compliant);
        assert!(!rows[0].sign_in_enabled);
    }

    #[test]
    fn test_wrapped_shape_with_status_string() {
        let doc = json!({
            "SharedMailboxCompliance": {
                "SharedMailboxes": [
                    { "DisplayName": "Sales", "ComplianceStatus": "Compliant" },
                    { "DisplayName": "Ops", "ComplianceStatus": "NonCompliant" }
                ]
            }
        });
        let rows = process_shared_mailboxes(&doc).unwrap();
        assert!(rows[0].is_compliant);
        assert!(!rows[1].is_compliant);
    }

    #[test]
    fn test_missing_name_defaults() {
        let doc = json!({ "SharedMailboxCompliance": [{}] });
        let rows = process_shared_mailboxes(&doc).unwrap();
        assert_eq!(rows[0].display_name, "Unknown");
        assert_eq!(rows[0].upn, "");
        assert!(!rows[0].is_compliant);
    }
}
