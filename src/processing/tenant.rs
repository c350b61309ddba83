use crate::models::{ConfigurationSummary, Domain, MisconfigurationSetting, TenantConfiguration, TenantOverview};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, bool_field, dict_at, object_items, str_field, u64_field};
use serde_json::Value;

pub fn process_tenant_overview(doc: &Value) -> Option<TenantOverview> {
    let root = as_dict(doc);
    if !root.contains_key("TenantInfo") {
        return None;
    }
    let tenant_info = dict_at(root, "TenantInfo");
    let summary = dict_at(tenant_info, "Summary");
    let directory_stats = dict_at(tenant_info, "DirectoryStatistics");
    let metadata = dict_at(root, "ReportMetadata");

    // Older exports only carry the generation date in ReportMetadata.
    let generation_date = str_field(summary, "ReportGeneratedDate")
        .or_else(|| str_field(metadata, "GeneratedDate"));

    let notification_mails = match summary.get("TechnicalNotificationMails") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    Some(TenantOverview {
        organization_name: str_field(summary, "OrganizationName")
            .unwrap_or_else(|| "Unknown Organization".to_string()),
        primary_domain: str_field(summary, "PrimaryDomain").unwrap_or_default(),
        domains_total: u64_field(summary, "TotalDomains"),
        generation_date: format_date(generation_date.as_deref()),
        tenant_id: str_field(summary, "TenantId").unwrap_or_default(),
        created_date: format_date(str_field(summary, "CreatedDateTime").as_deref()),
        total_devices: u64_field(directory_stats, "TotalDevices"),
        technical_notification_mails: notification_mails,
        country_code: str_field(summary, "CountryLetterCode"),
        state: str_field(summary, "State"),
        city: str_field(summary, "City"),
        postal_code: str_field(summary, "PostalCode"),
        preferred_language: str_field(summary, "PreferredLanguage"),
    })
}

pub fn process_domains(doc: &Value) -> Option<Vec<Domain>> {
    let root = as_dict(doc);
    if !root.contains_key("TenantInfo") {
        return None;
    }
    let tenant_info = dict_at(root, "TenantInfo");

    let rows = object_items(tenant_info.get("AllDomains"))
        .into_iter()
        .map(|d| Domain {
            domain: str_field(d, "Id"),
            is_default: bool_field(d, "IsDefault"),
            is_initial: bool_field(d, "IsInitial"),
            is_verified: bool_field(d, "IsVerified"),
            authentication_type: str_field(d, "AuthenticationType"),
        })
        .collect();
    Some(rows)
}

pub fn process_tenant_configuration(doc: &Value) -> Option<TenantConfiguration> {
    let root = as_dict(doc);
    if !root.contains_key("TenantConfiguration") {
        return None;
    }
    let config = dict_at(root, "TenantConfiguration");
    let summary = dict_at(config, "Summary");

    let settings = object_items(config.get("Settings"))
        .into_iter()
        .map(|item| {
            let name = str_field(item, "SettingName");
            let current = item.get("CurrentValue").cloned().unwrap_or(Value::Null);
            let mut recommended = item.get("RecommendedValue").cloned().unwrap_or(Value::Null);

            // "Restricted access (most restrictive)" exceeds the recommended
            // "Limited access" baseline, so treat it as already compliant.
            if name.as_deref() == Some("Guest user access level")
                && current.as_str() == Some("Restricted access (most restrictive)")
            {
                recommended = current.clone();
            }

            MisconfigurationSetting {
                category: str_field(item, "Category"),
                name,
                current_value: current,
                recommended_value: recommended,
                risk_level: str_field(item, "RiskLevel"),
                description: str_field(item, "Description"),
                recommendation: str_field(item, "Recommendation"),
            }
        })
        .collect();

    Some(TenantConfiguration {
        summary: ConfigurationSummary {
            total: u64_field(summary, "TotalSettings"),
            high_risk: u64_field(summary, "HighRiskCount"),
            medium_risk: u64_field(summary, "MediumRiskCount"),
            low_risk: u64_field(summary, "LowRiskCount"),
        },
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_absent_section() {
        assert!(process_tenant_overview(&json!({})).is_none());
        assert!(process_domains(&json!({ "Users": {} })).is_none());
    }

    #[test]
    fn test_tenant_overview_defaults() {
        let doc = json!({ "TenantInfo": {} });
        let tenant = process_tenant_overview(&doc).unwrap();
        assert_eq!(tenant.organization_name, "Unknown Organization");
        assert_eq!(tenant.primary_domain, "");
        assert_eq!(tenant.domains_total, 0);
        assert_eq!(tenant.generation_date, "");
    }

    #[test]
    fn test_tenant_overview_metadata_date_fallback() {
        let doc = json!({
            "TenantInfo": { "Summary": { "OrganizationName": "Contoso" } },
            "ReportMetadata": { "GeneratedDate": "2025-06-02T08:15:00Z" }
        });
        let tenant = process_tenant_overview(&doc).unwrap();
        assert_eq!(tenant.generation_date, "02-06-2025 08:15");
    }

    #[test]
    fn test_domains_skip_malformed_rows() {
        let doc = json!({
            "TenantInfo": {
                "AllDomains": [
                    { "Id": "contoso.com", "IsDefault": true, "IsVerified": true },
                    null,
                    "junk"
                ]
            }
        });
        let domains = process_domains(&doc).unwrap();
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].domain.as_deref(), Some("contoso.com"));
        assert!(domains[0].is_default);
    }

    #[test]
    fn test_configuration_guest_access_special_case() {
        let doc = json!({
            "TenantConfiguration": {
                "Summary": { "TotalSettings": 1, "HighRiskCount": 1 },
                "Settings": [{
                    "SettingName": "Guest user access level",
                    "CurrentValue": "Restricted access (most restrictive)",
                    "RecommendedValue": "Limited access",
                    "RiskLevel": "High"
                }]
            }
        });
        let config = process_tenant_configuration(&doc).unwrap();
        assert_eq!(
            config.settings[0].recommended_value,
            json!("Restricted access (most restrictive)")
        );
        assert_eq!(config.summary.total, 1);
        assert_eq!(config.summary.high_risk, 1);
    }
}
