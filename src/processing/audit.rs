use crate::models::{AuditEvents, GroupAuditEvent, UserAuditEvent};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, object_items, str_field, str_first};
use serde_json::Value;
use std::collections::BTreeMap;

/// Group membership and user creation audit trails. Either source key makes
/// the section present; a missing sibling just contributes no rows.
pub fn process_audit_events(doc: &Value) -> Option<AuditEvents> {
    let root = as_dict(doc);
    if !root.contains_key("GroupMembershipAudit") && !root.contains_key("UserCreationAudit") {
        return None;
    }

    let mut group_activities: BTreeMap<String, u64> = BTreeMap::new();
    let group_events: Vec<GroupAuditEvent> = object_items(root.get("GroupMembershipAudit"))
        .into_iter()
        .map(|item| {
            let activity = str_field(item, "Activity").unwrap_or_default();
            if !activity.is_empty() {
                *group_activities.entry(activity.clone()).or_insert(0) += 1;
            }
            GroupAuditEvent {
                timestamp: format_date(str_field(item, "Timestamp").as_deref()),
                activity,
                // Device membership changes carry a device name instead.
                target: str_first(item, &["TargetUserUPN", "TargetDeviceName"]),
                initiated_by: str_field(item, "InitiatedBy"),
                group: str_field(item, "TargetGroupName"),
                status: str_field(item, "Result"),
            }
        })
        .collect();

    let mut user_activities: BTreeMap<String, u64> = BTreeMap::new();
    let user_events: Vec<UserAuditEvent> = object_items(root.get("UserCreationAudit"))
        .into_iter()
        .map(|item| {
            let activity = str_field(item, "Activity").unwrap_or_default();
            if !activity.is_empty() {
                *user_activities.entry(activity.clone()).or_insert(0) += 1;
            }
            UserAuditEvent {
                timestamp: format_date(str_field(item, "Timestamp").as_deref()),
                activity,
                target: str_field(item, "TargetUserUPN"),
                initiated_by: str_field(item, "InitiatedBy"),
                status: str_field(item, "Result"),
            }
        })
        .collect();

    Some(AuditEvents { group_events, group_activities, user_events, user_activities })
}
