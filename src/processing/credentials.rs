use crate::models::{AppRegistrationCredential, AppRegistrationData, AppRegistrationSummary};
use crate::utils::json::{as_dict, dict_at, object_items, str_field, u64_field};
use serde_json::Value;

/// App-registration secret/certificate expiry. The summary is itself
/// nullable: older exports ship credentials without one.
pub fn process_app_credentials(doc: &Value) -> Option<AppRegistrationData> {
    let root = as_dict(doc);
    if !root.contains_key("AppRegistrationExpiry") {
        return None;
    }
    let section = dict_at(root, "AppRegistrationExpiry");
    let summary_raw = dict_at(section, "Summary");

    let summary = if summary_raw.is_empty() {
        None
    } else {
        Some(AppRegistrationSummary {
            tenant_id: str_field(summary_raw, "TenantId").unwrap_or_default(),
            report_generated_date: str_field(summary_raw, "ReportGeneratedDate")
                .unwrap_or_default(),
            days_until_expiry_threshold: u64_field(summary_raw, "DaysUntilExpiryThreshold"),
            total_credentials: u64_field(summary_raw, "TotalCredentials"),
            expired_count: u64_field(summary_raw, "ExpiredCount"),
            expiring_soon_count: u64_field(summary_raw, "ExpiringSoonCount"),
            valid_count: u64_field(summary_raw, "ValidCount"),
            apps_with_expired_or_expiring: u64_field(summary_raw, "AppsWithExpiredOrExpiring"),
        })
    };

    let credentials = object_items(section.get("Credentials"))
        .into_iter()
        .map(|item| AppRegistrationCredential {
            app_display_name: str_field(item, "AppDisplayName").unwrap_or_default(),
            app_id: str_field(item, "AppId").unwrap_or_default(),
            object_id: str_field(item, "ObjectId").unwrap_or_default(),
            credential_type: str_field(item, "CredentialType").unwrap_or_default(),
            credential_name: str_field(item, "CredentialName"),
            key_id: str_field(item, "KeyId").unwrap_or_default(),
            start_date: str_field(item, "StartDate").unwrap_or_default(),
            end_date: str_field(item, "EndDate").unwrap_or_default(),
            days_remaining: item.get("DaysRemaining").and_then(Value::as_i64).unwrap_or(0),
            status: str_field(item, "Status").unwrap_or_default(),
        })
        .collect();

    Some(AppRegistrationData { summary, credentials })
}
