use super::apple::AppleMdm;
use super::audit::{AuditEvents, RiskyUser};
use super::compliance::ComplianceOverview;
use super::credentials::AppRegistrationData;
use super::defender::{DefenderIncidents, DefenderSummary};
use super::licenses::{LicenseChange, LicenseOverview};
use super::mailbox::{PermissionsSummary, SharedMailbox};
use super::policies::ConditionalAccess;
use super::principals::ServicePrincipals;
use super::privileged::PrivilegedRoles;
use super::security::SecurityScores;
use super::tenant::{Domain, TenantConfiguration, TenantOverview};
use super::users::{MfaCoverage, UsersSummary};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The canonical normalized report. Every field is `None` exactly when the
/// corresponding raw section was absent; a present section with no rows
/// yields a slice holding empty collections instead. The presentation layer
/// relies on that distinction to suppress whole sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedReport {
    pub tenant: Option<TenantOverview>,
    pub domains: Option<Vec<Domain>>,
    pub configuration: Option<TenantConfiguration>,
    pub users: Option<UsersSummary>,
    pub user_details: Option<Vec<Map<String, Value>>>,
    pub mfa: Option<MfaCoverage>,
    pub security: Option<SecurityScores>,
    pub licenses: Option<LicenseOverview>,
    pub license_changes: Option<Vec<LicenseChange>>,
    pub conditional_access: Option<ConditionalAccess>,
    pub service_principals: Option<ServicePrincipals>,
    pub app_credentials: Option<AppRegistrationData>,
    pub defender_incidents: Option<DefenderIncidents>,
    pub defender: Option<DefenderSummary>,
    pub mailbox: Option<PermissionsSummary>,
    pub calendar: Option<PermissionsSummary>,
    pub audit: Option<AuditEvents>,
    pub risky_users: Option<Vec<RiskyUser>>,
    pub compliance: Option<ComplianceOverview>,
    pub shared_mailboxes: Option<Vec<SharedMailbox>>,
    pub privileged: Option<PrivilegedRoles>,
    pub apple_mdm: Option<AppleMdm>,
    pub device_details: Option<Vec<Map<String, Value>>>,
}
