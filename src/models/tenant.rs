use serde::{Deserialize, Serialize};

/// Headline facts about the tenant the report describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantOverview {
    pub organization_name: String,
    pub primary_domain: String,
    pub domains_total: u64,
    pub generation_date: String,
    pub tenant_id: String,
    pub created_date: String,
    pub total_devices: u64,
    pub technical_notification_mails: Vec<String>,
    pub country_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub preferred_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub domain: Option<String>,
    pub is_default: bool,
    pub is_initial: bool,
    pub is_verified: bool,
    pub authentication_type: Option<String>,
}

/// Tenant-wide settings flagged against their recommended values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantConfiguration {
    pub summary: ConfigurationSummary,
    pub settings: Vec<MisconfigurationSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationSummary {
    pub total: u64,
    pub high_risk: u64,
    pub medium_risk: u64,
    pub low_risk: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MisconfigurationSetting {
    pub category: Option<String>,
    pub name: Option<String>,
    pub current_value: serde_json::Value,
    pub recommended_value: serde_json::Value,
    pub risk_level: Option<String>,
    pub description: Option<String>,
    pub recommendation: Option<String>,
}
