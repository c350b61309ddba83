use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Directory audit trail: group membership changes and user creations, each
/// with a per-activity counter map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvents {
    pub group_events: Vec<GroupAuditEvent>,
    pub group_activities: BTreeMap<String, u64>,
    pub user_events: Vec<UserAuditEvent>,
    pub user_activities: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAuditEvent {
    pub timestamp: String,
    pub activity: String,
    pub target: Option<String>,
    pub initiated_by: Option<String>,
    pub group: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAuditEvent {
    pub timestamp: String,
    pub activity: String,
    pub target: Option<String>,
    pub initiated_by: Option<String>,
    pub status: Option<String>,
}

/// Identity-Protection risk classification for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskyUser {
    pub user: Option<String>,
    pub risk_level: Option<String>,
    pub risk_state: Option<String>,
    pub last_updated: String,
}
