use crate::models::{
    PimSummary, PrivilegedRoles, PrivilegedSummary, RoleActivation, RoleAssignment,
    RoleAssignmentCounts,
};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, dict_at, object_items, str_field, str_first, u64_field};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

/// Merges permanent assignments with PIM active and eligible assignments
/// into one list. `PrivilegedRoles` and `PIM` live at the top level in
/// current exports and under `PrivilegedAccess` in legacy ones.
pub fn process_privileged_roles(doc: &Value) -> Option<PrivilegedRoles> {
    let root = as_dict(doc);
    if !root.contains_key("PrivilegedAccess") && !root.contains_key("PrivilegedRoles") {
        return None;
    }
    let legacy = dict_at(root, "PrivilegedAccess");

    let mut roles_data = dict_at(root, "PrivilegedRoles");
    if roles_data.is_empty() {
        roles_data = dict_at(legacy, "PrivilegedRoles");
    }
    let mut pim_data = dict_at(root, "PIM");
    if pim_data.is_empty() {
        pim_data = dict_at(legacy, "PIM");
    }

    let mut sources: Vec<&Map<String, Value>> =
        object_items(roles_data.get("PermanentAssignments"));
    for key in ["PIMActiveAssignments", "PIMEligibleAssignments"] {
        sources.extend(object_items(pim_data.get(key)));
    }

    let mut assignments = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut global_admins = 0u64;
    let mut by_principal_type: BTreeMap<String, u64> = BTreeMap::new();

    for item in sources {
        // Rows repeated across the permanent and PIM sources carry the same
        // assignment id; rows without one are kept unconditionally.
        if let Some(id) = str_field(item, "AssignmentId").filter(|id| !id.is_empty()) {
            if !seen_ids.insert(id) {
                continue;
            }
        }

        let role = str_field(item, "RoleName").unwrap_or_default();
        let principal_type =
            str_field(item, "PrincipalType").unwrap_or_else(|| "Unknown".to_string());

        if role.to_lowercase().contains("global administrator") {
            global_admins += 1;
        }
        *by_principal_type.entry(principal_type.clone()).or_insert(0) += 1;

        assignments.push(RoleAssignment {
            role,
            principal: str_first(item, &["PrincipalUPN", "PrincipalName"]),
            assignment_type: str_field(item, "AssignmentType"),
            principal_type,
        });
    }

    let activations = object_items(roles_data.get("RoleActivations"))
        .into_iter()
        .map(|act| RoleActivation {
            timestamp: format_date(str_field(act, "ActivityDateTime").as_deref()),
            activity: str_field(act, "ActivityDisplayName"),
            initiated_by: str_field(act, "InitiatedBy"),
            target_role: str_field(act, "TargetRole"),
            target_user: str_field(act, "TargetUserPrincipalName"),
            result: str_field(act, "Result"),
            reason: str_field(act, "ResultReason"),
        })
        .collect();

    let pim_summary_raw = dict_at(pim_data, "Summary");
    let pim_summary = if pim_summary_raw.is_empty() {
        None
    } else {
        Some(PimSummary {
            total_assignments: u64_field(pim_summary_raw, "TotalPIMAssignments"),
            eligible_assignments: u64_field(pim_summary_raw, "PIMEligibleAssignments"),
            active_assignments: u64_field(pim_summary_raw, "PIMActiveAssignments"),
            unique_eligible_users: u64_field(pim_summary_raw, "UniqueEligibleUsers"),
            eligible_global_admins: u64_field(pim_summary_raw, "EligibleGlobalAdministrators"),
            active_global_admins: u64_field(pim_summary_raw, "ActiveGlobalAdministrators"),
        })
    };

    let assignments_by_role = object_items(pim_data.get("AssignmentsByRole"))
        .into_iter()
        .map(|item| RoleAssignmentCounts {
            role: str_field(item, "RoleName").unwrap_or_else(|| "Unknown".to_string()),
            eligible: u64_field(item, "EligibleCount"),
            active: u64_field(item, "ActiveCount"),
        })
        .collect();

    let summary = PrivilegedSummary {
        total: assignments.len() as u64,
        global_admins,
        pim_active_assignments: pim_summary
            .as_ref()
            .map(|_| u64_field(pim_summary_raw, "PIMActiveAssignments")),
        pim_eligible_assignments: pim_summary
            .as_ref()
            .map(|_| u64_field(pim_summary_raw, "PIMEligibleAssignments")),
        pim_total_assignments: pim_summary
            .as_ref()
            .map(|_| u64_field(pim_summary_raw, "TotalPIMAssignments")),
    };

    Some(PrivilegedRoles {
        assignments,
        activations,
        summary,
        pim_summary,
        assignments_by_role,
        by_principal_type,
    })
}
