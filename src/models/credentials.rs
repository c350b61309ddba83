use serde::{Deserialize, Serialize};

/// App-registration credential expiry report. The producer's PascalCase
/// field names are preserved on the wire for this section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRegistrationData {
    pub summary: Option<AppRegistrationSummary>,
    pub credentials: Vec<AppRegistrationCredential>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppRegistrationSummary {
    pub tenant_id: String,
    pub report_generated_date: String,
    pub days_until_expiry_threshold: u64,
    pub total_credentials: u64,
    pub expired_count: u64,
    pub expiring_soon_count: u64,
    pub valid_count: u64,
    pub apps_with_expired_or_expiring: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppRegistrationCredential {
    pub app_display_name: String,
    pub app_id: String,
    pub object_id: String,
    pub credential_type: String,
    pub credential_name: Option<String>,
    pub key_id: String,
    pub start_date: String,
    pub end_date: String,
    pub days_remaining: i64,
    pub status: String,
}
