use crate::models::{PermissionGrant, PermissionsSummary};
use crate::utils::json::{as_dict, dict_at, object_items, str_field, str_first};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

pub fn process_mailbox_permissions(doc: &Value) -> Option<PermissionsSummary> {
    let root = as_dict(doc);
    if !root.contains_key("MailboxPermissions") {
        return None;
    }
    let section = dict_at(root, "MailboxPermissions");

    let mut unique_mailboxes = BTreeSet::new();
    let mut by_access_type: BTreeMap<String, u64> = BTreeMap::new();

    let permissions: Vec<PermissionGrant> = object_items(section.get("MailboxPermissions"))
        .into_iter()
        .map(|perm| {
            let mailbox = str_first(perm, &["MailboxDisplayName", "MailboxIdentity"]);
            let access = str_field(perm, "AccessRights").unwrap_or_default();

            if let Some(name) = &mailbox {
                unique_mailboxes.insert(name.clone());
            }
            let access_key = if access.is_empty() { "Other".to_string() } else { access.clone() };
            *by_access_type.entry(access_key).or_insert(0) += 1;

            PermissionGrant {
                mailbox,
                user: str_field(perm, "GrantedTo"),
                access,
                is_inherited: perm.get("IsInherited").and_then(Value::as_bool),
                folder: None,
            }
        })
        .collect();

    let mut summary = BTreeMap::new();
    summary.insert("total_mailboxes".to_string(), unique_mailboxes.len() as u64);
    summary.insert("total_permissions".to_string(), permissions.len() as u64);
    summary.insert(
        "full_access".to_string(),
        by_access_type.get("FullAccess").copied().unwrap_or(0),
    );
    summary.insert("send_as".to_string(), by_access_type.get("SendAs").copied().unwrap_or(0));

    Some(PermissionsSummary { permissions, summary, by_access_type })
}

pub fn process_calendar_permissions(doc: &Value) -> Option<PermissionsSummary> {
    let root = as_dict(doc);
    if !root.contains_key("CalendarPermissions") {
        return None;
    }
    let section = dict_at(root, "CalendarPermissions");

    let mut unique_calendars = BTreeSet::new();
    let mut by_access_type: BTreeMap<String, u64> = BTreeMap::new();

    let permissions: Vec<PermissionGrant> = object_items(section.get("CalendarPermissions"))
        .into_iter()
        .map(|perm| {
            let mailbox = str_first(perm, &["MailboxDisplayName", "Mailbox"]);
            let access = str_field(perm, "AccessRights").unwrap_or_default();

            if let Some(name) = &mailbox {
                unique_calendars.insert(name.clone());
            }
            let access_key = if access.is_empty() { "Other".to_string() } else { access.clone() };
            *by_access_type.entry(access_key).or_insert(0) += 1;

            PermissionGrant {
                mailbox,
                user: str_field(perm, "GrantedTo"),
                access,
                is_inherited: None,
                folder: str_field(perm, "FolderPath"),
            }
        })
        .collect();

    let mut summary = BTreeMap::new();
    summary.insert("total_calendars".to_string(), unique_calendars.len() as u64);
    summary.insert("total_permissions".to_string(), permissions.len() as u64);

    Some(PermissionsSummary { permissions, summary, by_access_type })
}
