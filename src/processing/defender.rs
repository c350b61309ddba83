use crate::models::{DefenderAlert, DefenderIncidents, DefenderSummary, Incident, Severity};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, dict_at, object_items, str_field, str_first, u64_field};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Incident queue from `DefenderIncidents`, falling back to the `Sentinel`
/// section older producers emitted for the same data.
pub fn process_defender_incidents(doc: &Value) -> Option<DefenderIncidents> {
    let root = as_dict(doc);
    if !root.contains_key("DefenderIncidents") && !root.contains_key("Sentinel") {
        return None;
    }

    let no_summary = Map::new();
    let (rows_source, summary) = if root.contains_key("DefenderIncidents") {
        let section = dict_at(root, "DefenderIncidents");
        (section.get("Incidents"), dict_at(section, "Summary"))
    } else {
        // Sentinel appears either as a wrapper object or as a bare array.
        match root.get("Sentinel") {
            Some(Value::Object(map)) => (map.get("Incidents"), dict_at(map, "Summary")),
            other => (other, &no_summary),
        }
    };

    let incidents: Vec<Incident> = object_items(rows_source)
        .into_iter()
        .map(|inc| Incident {
            created: format_date(str_first(inc, &["CreatedDateTime", "CreatedTime"]).as_deref()),
            incident_id: id_string(inc.get("IncidentId")),
            title: str_first(inc, &["DisplayName", "Title", "Name"]),
            severity: Severity::parse(inc.get("Severity").and_then(Value::as_str)),
            status: str_field(inc, "Status")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            classification: str_field(inc, "Classification"),
            determination: str_field(inc, "Determination"),
            url: str_field(inc, "IncidentUrl"),
            comments: str_field(inc, "Comments").unwrap_or_default(),
        })
        .collect();

    // The producer summary's rollup lists win over recounting when present.
    let by_severity = summary_buckets(summary.get("BySeverity")).unwrap_or_else(|| {
        let mut buckets = BTreeMap::new();
        for inc in &incidents {
            *buckets.entry(inc.severity.to_string()).or_insert(0) += 1;
        }
        buckets
    });
    let by_status = summary_buckets(summary.get("ByStatus")).unwrap_or_else(|| {
        let mut buckets = BTreeMap::new();
        for inc in &incidents {
            *buckets.entry(inc.status.clone()).or_insert(0) += 1;
        }
        buckets
    });

    let total = if summary.contains_key("TotalIncidents") {
        u64_field(summary, "TotalIncidents")
    } else {
        incidents.len() as u64
    };

    Some(DefenderIncidents { incidents, by_severity, by_status, total })
}

/// Defender for Office email summary: the producer summary passes through
/// untouched, alert rows are normalized.
pub fn process_defender_summary(doc: &Value) -> Option<DefenderSummary> {
    let root = as_dict(doc);
    if !root.contains_key("DefenderEmail") {
        return None;
    }
    let defender = dict_at(root, "DefenderEmail");

    let mut by_severity: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_status: BTreeMap<String, u64> = BTreeMap::new();

    let alerts: Vec<DefenderAlert> = object_items(defender.get("Alerts"))
        .into_iter()
        .map(|alert| {
            let severity = Severity::parse(alert.get("Severity").and_then(Value::as_str));
            let status = str_field(alert, "Status")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unknown".to_string());
            *by_severity.entry(severity.to_string()).or_insert(0) += 1;
            *by_status.entry(status.clone()).or_insert(0) += 1;

            let (affected_users, user_count) = affected_users(alert.get("AffectedUsers"));
            DefenderAlert {
                id: id_string(alert.get("AlertId")),
                title: str_field(alert, "Title"),
                category: str_field(alert, "Category"),
                severity,
                status,
                description: str_field(alert, "Description"),
                assigned_to: str_field(alert, "AssignedTo"),
                created: format_date(str_field(alert, "CreatedDateTime").as_deref()),
                affected_users,
                user_count,
                url: str_field(alert, "AlertUrl"),
            }
        })
        .collect();

    Some(DefenderSummary {
        summary: dict_at(defender, "Summary").clone(),
        alerts,
        by_severity,
        by_status,
    })
}

fn id_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Producers emit rollups as a list of single-entry objects.
fn summary_buckets(value: Option<&Value>) -> Option<BTreeMap<String, u64>> {
    let Some(Value::Array(items)) = value else {
        return None;
    };
    let mut buckets = BTreeMap::new();
    for item in items {
        let Some(map) = item.as_object() else { continue };
        for (key, count) in map {
            buckets.insert(key.clone(), count.as_u64().unwrap_or(0));
        }
    }
    Some(buckets)
}

/// Affected users arrive as a comma-separated string or a list.
fn affected_users(value: Option<&Value>) -> (Option<String>, u64) {
    match value {
        Some(Value::String(s)) => {
            let count = s.split(',').filter(|u| !u.trim().is_empty()).count() as u64;
            if s.is_empty() {
                (None, count)
            } else {
                (Some(s.clone()), count)
            }
        }
        Some(Value::Array(items)) => {
            let names: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            let joined = names.join(", ");
            let count = items.len() as u64;
            if joined.is_empty() {
                (None, count)
            } else {
                (Some(joined), count)
            }
        }
        _ => (None, 0),
    }
}
