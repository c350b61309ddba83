use crate::models::{ForwardingRule, ForwardingSummary, InboxForwardingRules};
use crate::utils::json::{as_dict, bool_field, dict_at, object_items, str_field, u64_field};
use serde_json::Value;

/// External-forwarding inbox rules. Consumed directly by the presentation
/// layer rather than through the assembled report.
pub fn process_inbox_rules(doc: &Value) -> Option<InboxForwardingRules> {
    let root = as_dict(doc);
    if !root.contains_key("InboxForwardingRules") {
        return None;
    }
    let section = dict_at(root, "InboxForwardingRules");
    let summary = dict_at(section, "Summary");

    let rules = object_items(section.get("ForwardingRules"))
        .into_iter()
        .map(|rule| ForwardingRule {
            mailbox_upn: str_field(rule, "MailboxUPN"),
            mailbox_display: str_field(rule, "MailboxDisplay"),
            rule_name: str_field(rule, "RuleName"),
            rule_enabled: bool_field(rule, "RuleEnabled"),
            forward_type: str_field(rule, "ForwardType"),
            forward_target: str_field(rule, "ForwardTarget"),
            target_domain: str_field(rule, "TargetDomain"),
            rule_priority: rule.get("RulePriority").and_then(Value::as_i64).unwrap_or(0),
            rule_description: str_field(rule, "RuleDescription"),
        })
        .collect();

    let external_domains = match summary.get("ExternalDomains") {
        Some(Value::Array(items)) => Some(
            items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        ),
        _ => None,
    };

    Some(InboxForwardingRules {
        summary: ForwardingSummary {
            total_mailboxes_checked: u64_field(summary, "TotalMailboxesChecked"),
            total_rules_checked: u64_field(summary, "TotalRulesChecked"),
            external_forwards_found: u64_field(summary, "ExternalForwardsFound"),
            enabled_external_forwards: u64_field(summary, "EnabledExternalForwards"),
            mailboxes_with_forwards: u64_field(summary, "MailboxesWithForwards"),
            external_domains,
        },
        rules,
    })
}
