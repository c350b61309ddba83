pub mod apple_mdm;
pub mod assembler;
pub mod audit;
pub mod compliance;
pub mod conditional_access;
pub mod credentials;
pub mod defender;
pub mod inbox_rules;
pub mod licenses;
pub mod mfa;
pub mod permissions;
pub mod privileged;
pub mod risky_users;
pub mod secure_score;
pub mod service_principals;
pub mod shared_mailboxes;
pub mod tenant;
pub mod users;

pub use apple_mdm::process_apple_mdm;
pub use assembler::process_all;
pub use audit::process_audit_events;
pub use compliance::{process_compliance_overview, process_device_details};
pub use conditional_access::process_conditional_access;
pub use credentials::process_app_credentials;
pub use defender::{process_defender_incidents, process_defender_summary};
pub use inbox_rules::process_inbox_rules;
pub use licenses::{process_license_changes, process_license_overview};
pub use mfa::process_mfa_coverage;
pub use permissions::{process_calendar_permissions, process_mailbox_permissions};
pub use privileged::process_privileged_roles;
pub use risky_users::process_risky_users;
pub use secure_score::process_security_scores;
pub use service_principals::process_service_principals;
pub use shared_mailboxes::process_shared_mailboxes;
pub use tenant::{process_domains, process_tenant_configuration, process_tenant_overview};
pub use users::{process_user_details, process_users_summary};
