use crate::models::ProcessedReport;
use serde_json::Value;

use super::apple_mdm::process_apple_mdm;
use super::audit::process_audit_events;
use super::compliance::{process_compliance_overview, process_device_details};
use super::conditional_access::process_conditional_access;
use super::credentials::process_app_credentials;
use super::defender::{process_defender_incidents, process_defender_summary};
use super::licenses::{process_license_changes, process_license_overview};
use super::mfa::process_mfa_coverage;
use super::permissions::{process_calendar_permissions, process_mailbox_permissions};
use super::privileged::process_privileged_roles;
use super::risky_users::process_risky_users;
use super::secure_score::process_security_scores;
use super::service_principals::process_service_principals;
use super::shared_mailboxes::process_shared_mailboxes;
use super::tenant::{process_domains, process_tenant_configuration, process_tenant_overview};
use super::users::{process_user_details, process_users_summary};

/// Runs every domain processor against the same raw document and assembles
/// the normalized report. Processors are independent; this is the only
/// place that knows the full output shape.
pub fn process_all(doc: &Value) -> ProcessedReport {
    ProcessedReport {
        tenant: process_tenant_overview(doc),
        domains: process_domains(doc),
        configuration: process_tenant_configuration(doc),
        users: process_users_summary(doc),
        user_details: process_user_details(doc),
        mfa: process_mfa_coverage(doc),
        security: process_security_scores(doc),
        licenses: process_license_overview(doc),
        license_changes: process_license_changes(doc),
        conditional_access: process_conditional_access(doc),
        service_principals: process_service_principals(doc),
        app_credentials: process_app_credentials(doc),
        defender_incidents: process_defender_incidents(doc),
        defender: process_defender_summary(doc),
        mailbox: process_mailbox_permissions(doc),
        calendar: process_calendar_permissions(doc),
        audit: process_audit_events(doc),
        risky_users: process_risky_users(doc),
        compliance: process_compliance_overview(doc),
        shared_mailboxes: process_shared_mailboxes(doc),
        privileged: process_privileged_roles(doc),
        apple_mdm: process_apple_mdm(doc),
        device_details: process_device_details(doc),
    }
}
