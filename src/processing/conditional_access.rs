use crate::models::{ConditionalAccess, ConditionalAccessPolicy, ConditionalAccessSummary};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, bool_field, dict_at, object_items, str_field, u64_field};
use serde_json::Value;

pub fn process_conditional_access(doc: &Value) -> Option<ConditionalAccess> {
    let root = as_dict(doc);
    if !root.contains_key("ConditionalAccess") {
        return None;
    }
    let ca_data = dict_at(root, "ConditionalAccess");
    let summary = dict_at(ca_data, "Summary");

    let policies = object_items(ca_data.get("PolicyAnalysis"))
        .into_iter()
        .map(|p| ConditionalAccessPolicy {
            name: str_field(p, "PolicyName"),
            state: str_field(p, "State"),
            requires_mfa: bool_field(p, "RequiresMFA"),
            blocks_access: bool_field(p, "BlocksAccess"),
            policy_id: str_field(p, "PolicyId"),
            policy_scenario: str_field(p, "PolicyScenario"),
            grant_operator: str_field(p, "GrantOperator"),
            requires_compliant_device: bool_field(p, "RequiresCompliantDevice"),
            requires_hybrid_join: bool_field(p, "RequiresHybridJoin"),
            requires_approved_app: bool_field(p, "RequiresApprovedApp"),
            requires_password_change: bool_field(p, "RequiresPasswordChange"),
            covers_all_users: bool_field(p, "CoversAllUsers"),
            covers_all_apps: bool_field(p, "CoversAllApps"),
            covers_guest_users: bool_field(p, "CoversGuestUsers"),
            has_exclusions: bool_field(p, "HasExclusions"),
            is_high_value_app_protection: bool_field(p, "IsHighValueAppProtection"),
            included_users: str_field(p, "IncludedUsers"),
            excluded_users: str_field(p, "ExcludedUsers"),
            included_groups: str_field(p, "IncludedGroups"),
            excluded_groups: str_field(p, "ExcludedGroups"),
            included_applications: str_field(p, "IncludedApplications"),
            excluded_applications: str_field(p, "ExcludedApplications"),
            included_locations: str_field(p, "IncludedLocations"),
            excluded_locations: str_field(p, "ExcludedLocations"),
            platforms: str_field(p, "Platforms"),
            client_app_types: str_field(p, "ClientAppTypes"),
            created_date: format_date(str_field(p, "CreatedDateTime").as_deref()),
            modified_date: format_date(str_field(p, "ModifiedDateTime").as_deref()),
        })
        .collect();

    Some(ConditionalAccess {
        summary: ConditionalAccessSummary {
            total_policies: u64_field(summary, "TotalPolicies"),
            enabled: u64_field(summary, "EnabledPolicies"),
            disabled: u64_field(summary, "DisabledPolicies"),
            report_only: u64_field(summary, "ReportOnlyPolicies"),
        },
        policies,
    })
}
