use crate::models::RiskyUser;
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, dict_at, object_items, str_field};
use serde_json::Value;

pub fn process_risky_users(doc: &Value) -> Option<Vec<RiskyUser>> {
    let root = as_dict(doc);
    if !root.contains_key("RiskyUsers") {
        return None;
    }
    let section = dict_at(root, "RiskyUsers");

    let rows = object_items(section.get("RiskyUsers"))
        .into_iter()
        .map(|entry| RiskyUser {
            user: str_field(entry, "UserPrincipalName"),
            risk_level: str_field(entry, "RiskLevel"),
            risk_state: str_field(entry, "RiskState"),
            last_updated: format_date(str_field(entry, "RiskLastUpdatedDateTime").as_deref()),
        })
        .collect();
    Some(rows)
}
