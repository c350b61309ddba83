use serde_json::{json, Value};
use tenantscope::models::{AppRiskLevel, Severity, TrendDirection};
use tenantscope::processing::process_all;

/// A report exercising most sections at once, in the shapes current
/// producers emit.
fn full_fixture() -> Value {
    json!({
        "ReportMetadata": {
            "TenantId": "t-1",
            "TenantName": "Contoso",
            "GeneratedDate": "2025-08-01T06:00:00Z"
        },
        "TenantInfo": {
            "Summary": {
                "OrganizationName": "Contoso",
                "PrimaryDomain": "contoso.com",
                "TotalDomains": 2,
                "TenantId": "t-1",
                "CreatedDateTime": "2019-01-15T00:00:00Z"
            },
            "DirectoryStatistics": { "TotalDevices": 120 },
            "AllDomains": [
                { "Id": "contoso.com", "IsDefault": true, "IsInitial": false, "IsVerified": true },
                { "Id": "contoso.onmicrosoft.com", "IsInitial": true, "IsVerified": true }
            ]
        },
        "Users": {
            "Summary": {
                "TotalUsers": 100,
                "EnabledUsers": 90,
                "DisabledUsers": 10,
                "MfaRegisteredUsers": 81,
                "SsprAdoptionRate": 50.0
            },
            "UserDetails": [
                { "DisplayName": "Alice", "SMS": true, "MicrosoftAuthenticatorApp": true },
                { "DisplayName": "Bob", "LicenseCount": 1 }
            ]
        },
        "SecureScore": {
            "Summary": { "CurrentScore": 55.0, "MaxPossibleScore": 100.0, "ScorePercentage": 55.0 },
            "HistoricalScores": [
                { "CurrentScore": 50, "CreatedDateTime": "2025-06-01T00:00:00Z" },
                { "CurrentScore": 55, "CreatedDateTime": "2025-07-01T00:00:00Z" }
            ],
            "AllControls": [
                { "IsRecommendation": true, "Title": "Enable MFA", "Category": "Identity",
                  "CurrentScore": 2, "MaxScore": 10, "ScoreGap": 8 }
            ]
        },
        "LicenseAllocation": {
            "Summary": { "TotalSubscriptions": 3, "TotalLicensesAssigned": 95 },
            "Licenses": [
                { "FriendlyName": "Office 365 E3", "SkuPartNumber": "ENTERPRISEPACK",
                  "ConsumedUnits": 80, "AvailableUnits": 20, "Utilization": 80.0 }
            ]
        },
        "ConditionalAccess": {
            "Summary": { "TotalPolicies": 1, "EnabledPolicies": 1 },
            "PolicyAnalysis": [
                { "PolicyName": "Require MFA", "State": "enabled", "RequiresMFA": true }
            ]
        },
        "ServicePrincipals": {
            "AllPermissions": [
                { "ClientApplicationName": "Legacy App", "RiskLevel": "HIGH",
                  "Permission": "Mail.ReadWrite", "ResourceFriendlyName": "Microsoft Graph" },
                { "ClientApplicationName": "Reporting App", "RiskLevel": "low",
                  "Permission": "User.Read", "ResourceFriendlyName": "Microsoft Graph" }
            ]
        },
        "AppRegistrationExpiry": {
            "Summary": {
                "TenantId": "t-1",
                "ReportGeneratedDate": "2025-08-01T06:00:00Z",
                "DaysUntilExpiryThreshold": 30,
                "TotalCredentials": 1,
                "ExpiredCount": 0,
                "ExpiringSoonCount": 1,
                "ValidCount": 0,
                "AppsWithExpiredOrExpiring": 1
            },
            "Credentials": [
                { "AppDisplayName": "Sync Tool", "AppId": "app-1", "ObjectId": "obj-1",
                  "CredentialType": "ClientSecret", "KeyId": "k-1",
                  "StartDate": "2024-08-20T00:00:00Z", "EndDate": "2025-08-20T00:00:00Z",
                  "DaysRemaining": 15, "Status": "ExpiringSoon" }
            ]
        },
        "DefenderIncidents": {
            "Incidents": [
                { "IncidentId": "i-1", "Title": "Phishing wave", "Severity": "high",
                  "Status": "Active", "CreatedDateTime": "2025-07-20T14:00:00Z" }
            ]
        },
        "DefenderEmail": {
            "Summary": { "TotalAlerts": 1 },
            "Alerts": [
                { "AlertId": "a-1", "Title": "Suspicious inbox rule", "Severity": "Medium",
                  "Status": "New", "AffectedUsers": "bob@contoso.com" }
            ]
        },
        "MailboxPermissions": {
            "MailboxPermissions": [
                { "MailboxDisplayName": "Finance", "GrantedTo": "alice@contoso.com",
                  "AccessRights": "FullAccess" }
            ]
        },
        "CalendarPermissions": {
            "CalendarPermissions": [
                { "Mailbox": "Room 1", "GrantedTo": "bob@contoso.com", "AccessRights": "Reviewer" }
            ]
        },
        "GroupMembershipAudit": [
            { "Timestamp": "2025-07-01T09:00:00Z", "Activity": "Add member to group",
              "TargetUserUPN": "alice@contoso.com", "TargetGroupName": "Finance" }
        ],
        "RiskyUsers": {
            "RiskyUsers": [
                { "UserPrincipalName": "bob@contoso.com", "RiskLevel": "medium", "RiskState": "atRisk" }
            ]
        },
        "Intune": {
            "ComplianceSummary": { "CompliantDevices": 1, "NonCompliantDevices": 1 },
            "ManagedDevices": [
                { "DeviceId": "d-1", "DeviceName": "LAPTOP-01", "ComplianceState": "Compliant",
                  "OwnerType": "Company" },
                { "DeviceId": "d-2", "DeviceName": "LAPTOP-02", "ComplianceState": {} }
            ],
            "NonCompliantDeviceIds": ["d-2"]
        },
        "SharedMailboxCompliance": [
            { "DisplayName": "Support", "UserPrincipalName": "support@contoso.com",
              "SignInEnabled": false, "HasExchangeLicense": true, "IsCompliant": true }
        ],
        "PrivilegedRoles": {
            "PermanentAssignments": [
                { "AssignmentId": "pa-1", "RoleName": "Global Administrator",
                  "PrincipalUPN": "admin@contoso.com", "PrincipalType": "User" }
            ]
        },
        "PIM": {
            "PIMEligibleAssignments": [
                { "AssignmentId": "pim-1", "RoleName": "Exchange Administrator",
                  "PrincipalUPN": "ops@contoso.com", "PrincipalType": "User" }
            ]
        },
        "Apple": {
            "AllItems": [
                { "Name": "MDM Push", "Type": "APNS", "ExpirationDateTime": "2025-10-01T00:00:00Z",
                  "DaysUntilExpiry": 57, "Status": "Active" }
            ]
        },
        "LicenseChangeAudit": [
            { "Timestamp": "2025-07-15T10:00:00Z", "InitiatedBy": "admin@contoso.com",
              "TargetUserUPN": "bob@contoso.com", "Action": "Assign", "SkuName": "E3" },
            { "Timestamp": "2025-07-20T10:00:00Z", "InitiatedBy": "admin@contoso.com",
              "TargetUserUPN": "bob@contoso.com", "Action": "Remove", "SkuName": "E3" }
        ],
        "TenantConfiguration": {
            "Summary": { "TotalSettings": 1, "HighRiskCount": 1 },
            "Settings": [
                { "Category": "External collaboration", "SettingName": "Guest invites",
                  "CurrentValue": "Everyone", "RecommendedValue": "Admins only",
                  "RiskLevel": "High" }
            ]
        }
    })
}

#[test]
fn test_full_fixture_populates_every_section() {
    let report = process_all(&full_fixture());
    assert!(report.tenant.is_some());
    assert!(report.domains.is_some());
    assert!(report.configuration.is_some());
    assert!(report.users.is_some());
    assert!(report.user_details.is_some());
    assert!(report.mfa.is_some());
    assert!(report.security.is_some());
    assert!(report.licenses.is_some());
    assert!(report.license_changes.is_some());
    assert!(report.conditional_access.is_some());
    assert!(report.service_principals.is_some());
    assert!(report.app_credentials.is_some());
    assert!(report.defender_incidents.is_some());
    assert!(report.defender.is_some());
    assert!(report.mailbox.is_some());
    assert!(report.calendar.is_some());
    assert!(report.audit.is_some());
    assert!(report.risky_users.is_some());
    assert!(report.compliance.is_some());
    assert!(report.shared_mailboxes.is_some());
    assert!(report.privileged.is_some());
    assert!(report.apple_mdm.is_some());
    assert!(report.device_details.is_some());
}

#[test]
fn test_users_only_example() {
    let doc = json!({
        "Users": { "Summary": { "TotalUsers": 100, "EnabledUsers": 90, "MfaRegisteredUsers": 81 } }
    });
    let report = process_all(&doc);
    assert_eq!(report.mfa.as_ref().unwrap().adoption_rate, 90.0);
    assert!(report.security.is_none());
    assert!(report.tenant.is_none());
    assert!(report.licenses.is_none());
    assert!(report.privileged.is_none());
}

#[test]
fn test_present_but_empty_is_not_none() {
    let doc = json!({
        "ServicePrincipals": {},
        "RiskyUsers": {},
        "Apple": {}
    });
    let report = process_all(&doc);
    let sp = report.service_principals.unwrap();
    assert!(sp.all_apps.is_empty());
    assert_eq!(sp.summary.total, 0);
    assert!(report.risky_users.unwrap().is_empty());
    assert!(report.apple_mdm.unwrap().certificates.is_empty());
}

#[test]
fn test_totality_over_junk_shapes() {
    // Every section present but with the wrong container type: nothing may
    // panic, and object-gated sections still count as present.
    let doc = json!({
        "TenantInfo": [],
        "Users": 42,
        "SecureScore": "nope",
        "LicenseAllocation": null,
        "ConditionalAccess": { "PolicyAnalysis": "not a list" },
        "ServicePrincipals": { "AllPermissions": [null, 1, "x", []] },
        "Intune": { "ManagedDevices": { "a": { "DeviceName": "D" } } },
        "GroupMembershipAudit": {},
        "Sentinel": "bogus"
    });
    let report = process_all(&doc);
    // Gating is key-presence, not shape: these exist but normalize to empty.
    assert!(report.tenant.is_some());
    assert_eq!(report.users.as_ref().unwrap().total, 0);
    assert!(report.conditional_access.unwrap().policies.is_empty());
    assert_eq!(report.service_principals.unwrap().summary.total, 0);
    assert_eq!(report.device_details.unwrap().len(), 1);
    assert_eq!(report.defender_incidents.unwrap().total, 0);
}

#[test]
fn test_report_serializes_with_camel_case_contract() {
    let report = process_all(&full_fixture());
    let value = serde_json::to_value(&report).unwrap();
    let obj = value.as_object().unwrap();
    for field in [
        "tenant", "domains", "configuration", "users", "userDetails", "mfa", "security",
        "licenses", "licenseChanges", "conditionalAccess", "servicePrincipals",
        "appCredentials", "defenderIncidents", "defender", "mailbox", "calendar", "audit",
        "riskyUsers", "compliance", "sharedMailboxes", "privileged", "appleMdm",
        "deviceDetails",
    ] {
        assert!(obj.contains_key(field), "missing field {field}");
    }
    assert_eq!(obj.len(), 23);
}

#[test]
fn test_absent_sections_serialize_as_null() {
    let report = process_all(&json!({}));
    let value = serde_json::to_value(&report).unwrap();
    assert!(value["security"].is_null());
    assert!(value["userDetails"].is_null());
    assert!(value["deviceDetails"].is_null());
}

#[test]
fn test_fixture_details() {
    let report = process_all(&full_fixture());

    let tenant = report.tenant.unwrap();
    assert_eq!(tenant.organization_name, "Contoso");
    assert_eq!(tenant.total_devices, 120);
    // falls back to ReportMetadata.GeneratedDate
    assert_eq!(tenant.generation_date, "01-08-2025 06:00");
    assert_eq!(report.domains.unwrap().len(), 2);

    let mfa = report.mfa.unwrap();
    assert_eq!(mfa.adoption_rate, 90.0);
    assert_eq!(mfa.sspr_adoption_rate, 50.0);
    assert_eq!(mfa.methods["SMS"], 1);

    let security = report.security.unwrap();
    assert_eq!(security.trend_value, 5.0);
    assert_eq!(security.trend_direction, TrendDirection::Increase);
    assert_eq!(security.control_scores.len(), 1);

    let sp = report.service_principals.unwrap();
    assert_eq!(sp.all_apps[0].risk_level, AppRiskLevel::High);
    assert_eq!(sp.summary.high, 1);
    assert_eq!(sp.summary.low, 1);

    let incidents = report.defender_incidents.unwrap();
    assert_eq!(incidents.incidents[0].severity, Severity::High);
    assert_eq!(incidents.by_severity["High"], 1);

    let changes = report.license_changes.unwrap();
    assert_eq!(changes[0].action, "Remove");
    assert_eq!(changes[1].action, "Assign");

    let devices = report.device_details.unwrap();
    assert_eq!(devices[1]["ComplianceState"], json!("NonCompliant"));
    assert_eq!(devices[1]["OwnerType"], json!("Unknown"));

    let privileged = report.privileged.unwrap();
    assert_eq!(privileged.summary.total, 2);
    assert_eq!(privileged.summary.global_admins, 1);
}

#[test]
fn test_idempotence_and_no_input_mutation() {
    let doc = full_fixture();
    let before = doc.clone();
    let first = process_all(&doc);
    let second = process_all(&doc);
    assert_eq!(first, second);
    assert_eq!(doc, before);
}

#[test]
fn test_list_and_dict_sections_are_equivalent() {
    let as_list = json!({
        "Users": {
            "UserDetails": [
                { "DisplayName": "Alice" },
                { "DisplayName": "Bob" }
            ]
        }
    });
    let as_dict = json!({
        "Users": {
            "UserDetails": {
                "u1": { "DisplayName": "Alice" },
                "u2": { "DisplayName": "Bob" }
            }
        }
    });
    assert_eq!(
        process_all(&as_list).user_details,
        process_all(&as_dict).user_details
    );
}
