use crate::models::{LicenseChange, LicenseItem, LicenseOverview, LicenseSummary};
use crate::utils::dates::{format_date, sort_key};
use crate::utils::json::{as_dict, dict_at, f64_field, object_items, str_field, str_first, u64_field};
use serde_json::Value;

pub fn process_license_overview(doc: &Value) -> Option<LicenseOverview> {
    let root = as_dict(doc);
    if !root.contains_key("LicenseAllocation") {
        return None;
    }
    let allocation = dict_at(root, "LicenseAllocation");
    let summary = dict_at(allocation, "Summary");

    let licenses = object_items(allocation.get("Licenses"))
        .into_iter()
        .map(|item| LicenseItem {
            name: str_first(item, &["FriendlyName", "SkuPartNumber"]),
            sku: str_field(item, "SkuPartNumber"),
            assigned: u64_field(item, "ConsumedUnits"),
            available: u64_field(item, "AvailableUnits"),
            utilization: f64_field(item, "Utilization"),
        })
        .collect();

    Some(LicenseOverview {
        summary: LicenseSummary {
            total_subscriptions: u64_field(summary, "TotalSubscriptions"),
            active_subscriptions: u64_field(summary, "ActiveSubscriptions"),
            licenses_purchased: u64_field(summary, "TotalLicensesPurchased"),
            licenses_assigned: u64_field(summary, "TotalLicensesAssigned"),
            licenses_available: u64_field(summary, "TotalLicensesAvailable"),
            overall_utilization: f64_field(summary, "OverallUtilization"),
        },
        licenses,
    })
}

/// License assignment audit rows, newest first. Rows are intentionally not
/// deduplicated: repeated assign/remove cycles are real events.
pub fn process_license_changes(doc: &Value) -> Option<Vec<LicenseChange>> {
    let root = as_dict(doc);
    if !root.contains_key("LicenseChangeAudit") {
        return None;
    }

    // Newer exports wrap the rows in a Changes key; older ones are flat.
    let section = root.get("LicenseChangeAudit");
    let rows_source = match section {
        Some(Value::Object(map)) => map.get("Changes"),
        other => other,
    };

    let mut changes: Vec<(i64, LicenseChange)> = object_items(rows_source)
        .into_iter()
        .map(|item| {
            let raw_timestamp = str_first(item, &["Timestamp", "ActivityDateTime"]);
            let key = raw_timestamp.as_deref().map(sort_key).unwrap_or(i64::MIN);
            let change = LicenseChange {
                timestamp: format_date(raw_timestamp.as_deref()),
                user: str_first(item, &["InitiatedBy", "User"]).unwrap_or_default(),
                target_user: str_first(item, &["TargetUserUPN", "TargetUser"]).unwrap_or_default(),
                action: str_first(item, &["Action", "Activity"]).unwrap_or_default(),
                sku: str_first(item, &["SkuName", "Sku", "SkuPartNumber"]).unwrap_or_default(),
            };
            (key, change)
        })
        .collect();

    changes.sort_by_key(|(key, _)| std::cmp::Reverse(*key));
    Some(changes.into_iter().map(|(_, change)| change).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_license_overview_absent() {
        assert!(process_license_overview(&json!({})).is_none());
    }

    #[test]
    fn test_license_name_fallback_to_sku() {
        let doc = json!({
            "LicenseAllocation": {
                "Licenses": [
                    { "SkuPartNumber": "ENTERPRISEPACK", "ConsumedUnits": 80, "AvailableUnits": 20 },
                    { "FriendlyName": "Office 365 E3", "SkuPartNumber": "SPE_E3" }
                ]
            }
        });
        let overview = process_license_overview(&doc).unwrap();
        assert_eq!(overview.licenses[0].name.as_deref(), Some("ENTERPRISEPACK"));
        assert_eq!(overview.licenses[1].name.as_deref(), Some("Office 365 E3"));
        assert_eq!(overview.licenses[0].assigned, 80);
    }

    #[test]
    fn test_license_changes_sorted_descending_no_dedup() {
        let doc = json!({
            "LicenseChangeAudit": [
                { "Timestamp": "2025-01-01T10:00:00Z", "Action": "Assign", "SkuName": "E3" },
                { "Timestamp": "2025-03-01T10:00:00Z", "Action": "Remove", "SkuName": "E3" },
                { "Timestamp": "2025-03-01T10:00:00Z", "Action": "Remove", "SkuName": "E3" }
            ]
        });
        let changes = process_license_changes(&doc).unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].action, "Remove");
        assert_eq!(changes[2].action, "Assign");
    }

    #[test]
    fn test_license_changes_wrapped_shape() {
        let doc = json!({
            "LicenseChangeAudit": {
                "Changes": [
                    { "Timestamp": "2025-02-01T09:00:00Z", "InitiatedBy": "admin@contoso.com",
                      "TargetUserUPN": "user@contoso.com", "Action": "Assign", "SkuName": "E5" }
                ]
            }
        });
        let changes = process_license_changes(&doc).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].user, "admin@contoso.com");
        assert_eq!(changes[0].target_user, "user@contoso.com");
        assert_eq!(changes[0].timestamp, "01-02-2025 09:00");
    }

    #[test]
    fn test_license_changes_unparseable_timestamp_last() {
        let doc = json!({
            "LicenseChangeAudit": [
                { "Timestamp": "garbage", "Action": "A" },
                { "Timestamp": "2025-01-01T00:00:00Z", "Action": "B" }
            ]
        });
        let changes = process_license_changes(&doc).unwrap();
        assert_eq!(changes[0].action, "B");
        assert_eq!(changes[1].timestamp, "garbage");
    }
}
