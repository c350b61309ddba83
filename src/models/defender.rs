use super::risk::Severity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Defender (or Sentinel, for older producers) incident queue with severity
/// and status rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenderIncidents {
    pub incidents: Vec<Incident>,
    pub by_severity: BTreeMap<String, u64>,
    pub by_status: BTreeMap<String, u64>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub created: String,
    pub incident_id: String,
    pub title: Option<String>,
    pub severity: Severity,
    pub status: String,
    pub classification: Option<String>,
    pub determination: Option<String>,
    pub url: Option<String>,
    pub comments: String,
}

/// Defender for Office email protection summary and alert list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenderSummary {
    pub summary: Map<String, Value>,
    pub alerts: Vec<DefenderAlert>,
    pub by_severity: BTreeMap<String, u64>,
    pub by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenderAlert {
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub severity: Severity,
    pub status: String,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub created: String,
    pub affected_users: Option<String>,
    pub user_count: u64,
    pub url: Option<String>,
}
