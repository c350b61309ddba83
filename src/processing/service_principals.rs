use crate::models::{
    AppRiskLevel, ExpiringGrant, GrantedPermission, ServicePrincipalApp, ServicePrincipalSummary,
    ServicePrincipals,
};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, dict_at, object_items, str_field, str_first, truthy};
use serde_json::Value;
use std::collections::HashMap;

/// Flattens the permission grant list into per-application rows. An app's
/// risk is the riskiest of its grants; apps sort riskiest-first with
/// unrated grants at the end, never dropped.
pub fn process_service_principals(doc: &Value) -> Option<ServicePrincipals> {
    let root = as_dict(doc);
    if !root.contains_key("ServicePrincipals") {
        return None;
    }
    let principals = dict_at(root, "ServicePrincipals");
    let permissions = object_items(principals.get("AllPermissions"));

    let expiring_credentials: Vec<ExpiringGrant> = permissions
        .iter()
        .filter(|item| truthy(item.get("GrantExpiryTime")))
        .map(|item| ExpiringGrant {
            name: str_field(item, "ClientApplicationName"),
            app_id: str_field(item, "ClientApplicationId"),
            expires_on: format_date(str_field(item, "GrantExpiryTime").as_deref()),
            grant_type: str_field(item, "Permission"),
        })
        .collect();

    let mut apps: Vec<ServicePrincipalApp> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for item in &permissions {
        let Some(app_name) = str_field(item, "ClientApplicationName").filter(|n| !n.is_empty())
        else {
            continue;
        };
        let risk = item
            .get("RiskLevel")
            .and_then(Value::as_str)
            .map(AppRiskLevel::parse)
            .unwrap_or(AppRiskLevel::Unrated);
        let principal = str_first(item, &["PrincipalDisplayName", "PrincipalUserPrincipalName"]);

        let idx = match index_by_name.get(&app_name).copied() {
            Some(idx) => {
                if risk.rank() < apps[idx].risk_level.rank() {
                    apps[idx].risk_level = risk;
                }
                idx
            }
            None => {
                apps.push(ServicePrincipalApp {
                    name: app_name.clone(),
                    risk_level: risk,
                    consent_type: str_field(item, "ConsentType"),
                    principal: principal.clone(),
                    permissions: Vec::new(),
                });
                index_by_name.insert(app_name, apps.len() - 1);
                apps.len() - 1
            }
        };

        apps[idx].permissions.push(GrantedPermission {
            resource: str_field(item, "ResourceFriendlyName"),
            permission: str_field(item, "Permission"),
            risk_level: item
                .get("RiskLevel")
                .and_then(Value::as_str)
                .map(AppRiskLevel::parse),
            consent_type: str_field(item, "ConsentType"),
            principal,
        });
    }

    let mut counts: HashMap<AppRiskLevel, u64> = HashMap::new();
    for app in &apps {
        *counts.entry(app.risk_level).or_insert(0) += 1;
    }
    let summary = ServicePrincipalSummary {
        total: apps.len() as u64,
        critical: counts.get(&AppRiskLevel::Critical).copied().unwrap_or(0),
        high: counts.get(&AppRiskLevel::High).copied().unwrap_or(0),
        medium: counts.get(&AppRiskLevel::Medium).copied().unwrap_or(0),
        low: counts.get(&AppRiskLevel::Low).copied().unwrap_or(0),
    };

    apps.sort_by_key(|app| app.risk_level.rank());

    Some(ServicePrincipals { expiring_credentials, all_apps: apps, summary })
}
