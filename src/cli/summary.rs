use crate::cli::commands::SummaryArgs;
use crate::errors::ReportError;
use crate::ingest::load_report;
use crate::processing::{process_all, process_inbox_rules};
use crate::utils::formatting::pct;
use console::style;
use std::path::PathBuf;

/// Prints a one-screen digest of which sections the report carries and
/// their headline numbers. Absent sections are listed dimmed so a thin
/// export is visible at a glance.
pub fn handle_summary(args: SummaryArgs) -> Result<(), ReportError> {
    let path = PathBuf::from(&args.input);
    let doc = load_report(&path)?;
    let report = process_all(&doc);

    if let Some(tenant) = &report.tenant {
        println!(
            "{} {} ({})",
            style("Tenant:").bold(),
            tenant.organization_name,
            tenant.primary_domain
        );
        if !tenant.generation_date.is_empty() {
            println!("{} {}", style("Generated:").bold(), tenant.generation_date);
        }
    } else {
        println!("{}", style("Tenant: not included").dim());
    }
    println!();

    section("Users", report.users.as_ref(), |u| {
        format!("{} total, {} enabled, {} guests", u.total, u.enabled, u.guest)
    });
    section("MFA", report.mfa.as_ref(), |m| {
        format!("{} of {} registered ({})", m.mfa_registered, m.total_users, pct(Some(m.adoption_rate), 1))
    });
    section("Secure score", report.security.as_ref(), |s| {
        match (s.current_score, s.max_score) {
            (Some(score), Some(max)) => format!("{:.0}/{:.0}, {} recommendations", score, max, s.control_scores.len()),
            _ => format!("{} recommendations", s.control_scores.len()),
        }
    });
    section("Licenses", report.licenses.as_ref(), |l| {
        format!("{} SKUs, {} assigned", l.licenses.len(), l.summary.licenses_assigned)
    });
    section("License changes", report.license_changes.as_ref(), |c| {
        format!("{} audit rows", c.len())
    });
    section("Conditional access", report.conditional_access.as_ref(), |ca| {
        format!("{} policies ({} enabled)", ca.summary.total_policies, ca.summary.enabled)
    });
    section("Service principals", report.service_principals.as_ref(), |sp| {
        format!(
            "{} apps ({} critical, {} high)",
            sp.summary.total, sp.summary.critical, sp.summary.high
        )
    });
    section("App credentials", report.app_credentials.as_ref(), |ac| {
        format!("{} credentials", ac.credentials.len())
    });
    section("Defender incidents", report.defender_incidents.as_ref(), |di| {
        format!("{} incidents", di.total)
    });
    section("Defender email", report.defender.as_ref(), |d| {
        format!("{} alerts", d.alerts.len())
    });
    section("Mailbox permissions", report.mailbox.as_ref(), |m| {
        format!("{} grants", m.permissions.len())
    });
    section("Calendar permissions", report.calendar.as_ref(), |c| {
        format!("{} grants", c.permissions.len())
    });
    section("Inbox rules", process_inbox_rules(&doc).as_ref(), |r| {
        format!("{} external forwards", r.summary.external_forwards_found)
    });
    section("Audit", report.audit.as_ref(), |a| {
        format!("{} group events, {} user events", a.group_events.len(), a.user_events.len())
    });
    section("Risky users", report.risky_users.as_ref(), |r| format!("{} flagged", r.len()));
    section("Compliance", report.compliance.as_ref(), |c| {
        format!("{} managed devices", c.intune_devices.len())
    });
    section("Shared mailboxes", report.shared_mailboxes.as_ref(), |s| {
        let non_compliant = s.iter().filter(|m| !m.is_compliant).count();
        format!("{} mailboxes ({} non-compliant)", s.len(), non_compliant)
    });
    section("Privileged roles", report.privileged.as_ref(), |p| {
        format!("{} assignments ({} global admins)", p.summary.total, p.summary.global_admins)
    });
    section("Apple MDM", report.apple_mdm.as_ref(), |a| {
        format!("{} certificates", a.certificates.len())
    });

    Ok(())
}

fn section<T>(label: &str, slice: Option<&T>, describe: impl Fn(&T) -> String) {
    match slice {
        Some(value) => println!("  {} {}", style(format!("{label}:")).bold(), describe(value)),
        None => println!("  {}", style(format!("{label}: not included")).dim()),
    }
}
