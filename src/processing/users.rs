use crate::models::UsersSummary;
use crate::utils::json::{as_dict, dict_at, f64_field, ordered_list, u64_field};
use serde_json::{json, Map, Value};

pub fn process_users_summary(doc: &Value) -> Option<UsersSummary> {
    let root = as_dict(doc);
    if !root.contains_key("Users") {
        return None;
    }
    let summary = dict_at(dict_at(root, "Users"), "Summary");

    Some(UsersSummary {
        total: u64_field(summary, "TotalUsers"),
        enabled: u64_field(summary, "EnabledUsers"),
        disabled: u64_field(summary, "DisabledUsers"),
        licensed: u64_field(summary, "LicensedUsers"),
        unlicensed: u64_field(summary, "UnlicensedUsers"),
        guest: u64_field(summary, "GuestUsers"),
        admin: u64_field(summary, "AdminUsers"),
        mfa_registered: u64_field(summary, "MfaRegisteredUsers"),
        mfa_not_registered: u64_field(summary, "MfaNotRegisteredUsers"),
        inactive: u64_field(summary, "InactiveUsers"),
        mfa_adoption_rate: f64_field(summary, "MfaAdoptionRate"),
        sspr_adoption_rate: f64_field(summary, "SsprAdoptionRate"),
    })
}

/// Per-user rows pass through with known producer gaps backfilled, so every
/// row carries the fields the tables sort and filter on.
pub fn process_user_details(doc: &Value) -> Option<Vec<Map<String, Value>>> {
    let root = as_dict(doc);
    if !root.contains_key("Users") {
        return None;
    }
    let users = dict_at(root, "Users");

    let rows = ordered_list(users.get("UserDetails"))
        .into_iter()
        .filter_map(Value::as_object)
        .map(|user| {
            let mut row = user.clone();
            if !row.contains_key("IsLicensed") {
                let licensed = row
                    .get("LicenseCount")
                    .and_then(Value::as_f64)
                    .map(|count| count > 0.0)
                    .unwrap_or(false);
                row.insert("IsLicensed".to_string(), Value::Bool(licensed));
            }
            if !row.contains_key("City") {
                row.insert("City".to_string(), json!(""));
            }
            if !row.contains_key("UserType") {
                row.insert("UserType".to_string(), json!("Member"));
            }
            if !row.contains_key("AccountEnabled") {
                row.insert("AccountEnabled".to_string(), Value::Bool(false));
            }
            row
        })
        .collect();
    Some(rows)
}
