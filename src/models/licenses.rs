use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseOverview {
    pub summary: LicenseSummary,
    pub licenses: Vec<LicenseItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseSummary {
    pub total_subscriptions: u64,
    pub active_subscriptions: u64,
    pub licenses_purchased: u64,
    pub licenses_assigned: u64,
    pub licenses_available: u64,
    pub overall_utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseItem {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub assigned: u64,
    pub available: u64,
    pub utilization: f64,
}

/// One license assignment/removal audit row. Rows are kept verbatim
/// (no dedup) and ordered newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseChange {
    pub timestamp: String,
    pub user: String,
    pub target_user: String,
    pub action: String,
    pub sku: String,
}
