use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Privileged role assignments merged from permanent and PIM sources, plus
/// role activation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivilegedRoles {
    pub assignments: Vec<RoleAssignment>,
    pub activations: Vec<RoleActivation>,
    pub summary: PrivilegedSummary,
    pub pim_summary: Option<PimSummary>,
    pub assignments_by_role: Vec<RoleAssignmentCounts>,
    pub by_principal_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
    pub principal: Option<String>,
    #[serde(rename = "type")]
    pub assignment_type: Option<String>,
    pub principal_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleActivation {
    pub timestamp: String,
    pub activity: Option<String>,
    pub initiated_by: Option<String>,
    pub target_role: Option<String>,
    pub target_user: Option<String>,
    pub result: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivilegedSummary {
    pub total: u64,
    pub global_admins: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pim_active_assignments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pim_eligible_assignments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pim_total_assignments: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PimSummary {
    pub total_assignments: u64,
    pub eligible_assignments: u64,
    pub active_assignments: u64,
    pub unique_eligible_users: u64,
    pub eligible_global_admins: u64,
    pub active_global_admins: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignmentCounts {
    pub role: String,
    pub eligible: u64,
    pub active: u64,
}
