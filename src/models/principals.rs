use super::risk::AppRiskLevel;
use serde::{Deserialize, Serialize};

/// Application permission grants grouped per client application, ranked by
/// the riskiest permission each app holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePrincipals {
    pub expiring_credentials: Vec<ExpiringGrant>,
    pub all_apps: Vec<ServicePrincipalApp>,
    pub summary: ServicePrincipalSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringGrant {
    pub name: Option<String>,
    pub app_id: Option<String>,
    pub expires_on: String,
    #[serde(rename = "type")]
    pub grant_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePrincipalApp {
    pub name: String,
    pub risk_level: AppRiskLevel,
    pub consent_type: Option<String>,
    pub principal: Option<String>,
    pub permissions: Vec<GrantedPermission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantedPermission {
    pub resource: Option<String>,
    pub permission: Option<String>,
    pub risk_level: Option<AppRiskLevel>,
    pub consent_type: Option<String>,
    pub principal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePrincipalSummary {
    pub total: u64,
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}
