use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delegated mailbox or calendar permissions with per-access-type rollups.
/// The summary keys differ between the two sources, so they stay a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionsSummary {
    pub permissions: Vec<PermissionGrant>,
    pub summary: BTreeMap<String, u64>,
    pub by_access_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub mailbox: Option<String>,
    pub user: Option<String>,
    pub access: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inherited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Mailbox rules that forward mail outside the tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxForwardingRules {
    pub summary: ForwardingSummary,
    pub rules: Vec<ForwardingRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardingSummary {
    pub total_mailboxes_checked: u64,
    pub total_rules_checked: u64,
    pub external_forwards_found: u64,
    pub enabled_external_forwards: u64,
    pub mailboxes_with_forwards: u64,
    pub external_domains: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardingRule {
    pub mailbox_upn: Option<String>,
    pub mailbox_display: Option<String>,
    pub rule_name: Option<String>,
    pub rule_enabled: bool,
    pub forward_type: Option<String>,
    pub forward_target: Option<String>,
    pub target_domain: Option<String>,
    pub rule_priority: i64,
    pub rule_description: Option<String>,
}

/// Shared mailbox sign-in/licensing compliance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedMailbox {
    pub display_name: String,
    pub upn: String,
    pub sign_in_enabled: bool,
    pub has_license: bool,
    pub is_compliant: bool,
}
