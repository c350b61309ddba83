use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalAccess {
    pub summary: ConditionalAccessSummary,
    pub policies: Vec<ConditionalAccessPolicy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalAccessSummary {
    pub total_policies: u64,
    pub enabled: u64,
    pub disabled: u64,
    pub report_only: u64,
}

/// One analyzed conditional-access policy, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalAccessPolicy {
    pub name: Option<String>,
    pub state: Option<String>,
    pub requires_mfa: bool,
    pub blocks_access: bool,
    pub policy_id: Option<String>,
    pub policy_scenario: Option<String>,
    pub grant_operator: Option<String>,
    pub requires_compliant_device: bool,
    pub requires_hybrid_join: bool,
    pub requires_approved_app: bool,
    pub requires_password_change: bool,
    pub covers_all_users: bool,
    pub covers_all_apps: bool,
    pub covers_guest_users: bool,
    pub has_exclusions: bool,
    pub is_high_value_app_protection: bool,
    pub included_users: Option<String>,
    pub excluded_users: Option<String>,
    pub included_groups: Option<String>,
    pub excluded_groups: Option<String>,
    pub included_applications: Option<String>,
    pub excluded_applications: Option<String>,
    pub included_locations: Option<String>,
    pub excluded_locations: Option<String>,
    pub platforms: Option<String>,
    pub client_app_types: Option<String>,
    pub created_date: String,
    pub modified_date: String,
}
