use crate::utils::json::{as_dict, dict_at, ordered_list};
use crate::models::ComplianceOverview;
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Device list keys across producer versions, in resolution priority order.
/// The first key with a non-empty collection wins.
const DEVICE_LIST_KEYS: &[&str] =
    &["ManagedDevices", "DeviceComplianceDetails", "Devices", "AllDevices"];

/// Known producer artifacts repaired on every device row:
/// - `ComplianceState` emitted as `{}` or missing: inferred as
///   `"NonCompliant"` when the device id is in `NonCompliantDeviceIds`,
///   else `"Unknown"`.
/// - `OwnerType` emitted as `{}` or missing: `"Unknown"`.
fn repair_device(device: &Map<String, Value>, non_compliant: &HashSet<String>) -> Map<String, Value> {
    let mut row = device.clone();

    let state_valid = matches!(row.get("ComplianceState"), Some(Value::String(s)) if !s.is_empty());
    if !state_valid {
        let id = row
            .get("DeviceId")
            .or_else(|| row.get("Id"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        let state = if non_compliant.contains(id) && !id.is_empty() {
            "NonCompliant"
        } else {
            "Unknown"
        };
        row.insert("ComplianceState".to_string(), json!(state));
    }

    let owner_valid = matches!(row.get("OwnerType"), Some(Value::String(s)) if !s.is_empty());
    if !owner_valid {
        row.insert("OwnerType".to_string(), json!("Unknown"));
    }

    row
}

fn repaired_devices(doc: &Value) -> Option<Vec<Map<String, Value>>> {
    let root = as_dict(doc);
    if !root.contains_key("Intune") {
        return None;
    }
    let intune = dict_at(root, "Intune");

    let devices = DEVICE_LIST_KEYS
        .iter()
        .map(|key| ordered_list(intune.get(*key)))
        .find(|list| !list.is_empty())
        .unwrap_or_default();

    let non_compliant: HashSet<String> = ordered_list(intune.get("NonCompliantDeviceIds"))
        .into_iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    Some(
        devices
            .into_iter()
            .filter_map(Value::as_object)
            .map(|device| repair_device(device, &non_compliant))
            .collect(),
    )
}

pub fn process_compliance_overview(doc: &Value) -> Option<ComplianceOverview> {
    let intune_devices = repaired_devices(doc)?;
    let root = as_dict(doc);
    let intune = dict_at(root, "Intune");

    Some(ComplianceOverview {
        intune: dict_at(intune, "ComplianceSummary").clone(),
        intune_devices,
    })
}

pub fn process_device_details(doc: &Value) -> Option<Vec<Map<String, Value>>> {
    repaired_devices(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compliance_absent() {
        assert!(process_compliance_overview(&json!({})).is_none());
        assert!(process_device_details(&json!({})).is_none());
    }

    #[test]
    fn test_device_list_priority_order() {
        let doc = json!({
            "Intune": {
                "ManagedDevices": [],
                "DeviceComplianceDetails": [{ "DeviceName": "A", "ComplianceState": "Compliant" }],
                "Devices": [{ "DeviceName": "ignored" }]
            }
        });
        let devices = process_device_details(&doc).unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0]["DeviceName"], json!("A"));
    }

    #[test]
    fn test_empty_object_state_repaired_to_unknown() {
        let doc = json!({
            "Intune": {
                "ManagedDevices": [
                    { "DeviceName": "A", "ComplianceState": {}, "OwnerType": {} }
                ]
            }
        });
        let devices = process_device_details(&doc).unwrap();
        assert_eq!(devices[0]["ComplianceState"], json!("Unknown"));
        assert_eq!(devices[0]["OwnerType"], json!("Unknown"));
    }

    #[test]
    fn test_noncompliant_inferred_from_id_list() {
        let doc = json!({
            "Intune": {
                "ManagedDevices": [
                    { "DeviceId": "d-1", "ComplianceState": {} },
                    { "DeviceId": "d-2", "ComplianceState": {} }
                ],
                "NonCompliantDeviceIds": ["d-1"]
            }
        });
        let devices = process_device_details(&doc).unwrap();
        assert_eq!(devices[0]["ComplianceState"], json!("NonCompliant"));
        assert_eq!(devices[1]["ComplianceState"], json!("Unknown"));
    }

    #[test]
    fn test_valid_state_untouched() {
        let doc = json!({
            "Intune": {
                "ManagedDevices": [
                    { "DeviceName": "A", "ComplianceState": "Compliant", "OwnerType": "Company" }
                ],
                "ComplianceSummary": { "CompliantDevices": 1 }
            }
        });
        let overview = process_compliance_overview(&doc).unwrap();
        assert_eq!(overview.intune_devices[0]["ComplianceState"], json!("Compliant"));
        assert_eq!(overview.intune_devices[0]["OwnerType"], json!("Company"));
        assert_eq!(overview.intune["CompliantDevices"], json!(1));
    }

    #[test]
    fn test_input_not_mutated_by_repair() {
        let doc = json!({
            "Intune": { "ManagedDevices": [{ "DeviceName": "A", "ComplianceState": {} }] }
        });
        let before = doc.clone();
        let _ = process_device_details(&doc);
        assert_eq!(doc, before);
    }
}
