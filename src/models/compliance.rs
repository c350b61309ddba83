use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Intune compliance summary plus the repaired managed-device rows. Device
/// rows keep their full producer shape; only the known artifacts are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceOverview {
    pub intune: Map<String, Value>,
    pub intune_devices: Vec<Map<String, Value>>,
}
