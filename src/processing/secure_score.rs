use crate::models::{AzureSubscription, ControlScore, HistoryPoint, SecurityScores, TrendDirection};
use crate::utils::dates::{format_date, parse_display_date};
use crate::utils::json::{as_dict, dict_at, f64_field, object_items, opt_f64_field, str_field};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Builds the secure-score slice: summary scores, Azure subscription
/// aggregates, dated history with a trend, and deduplicated control
/// recommendations. Every sub-source degrades independently.
pub fn process_security_scores(doc: &Value) -> Option<SecurityScores> {
    let root = as_dict(doc);
    if !root.contains_key("SecureScore") && !root.contains_key("AzureSecureScore") {
        return None;
    }
    let secure_score = dict_at(root, "SecureScore");
    let azure_score = dict_at(root, "AzureSecureScore");
    let summary = dict_at(secure_score, "Summary");
    let azure_summary = dict_at(azure_score, "Summary");

    let azure_subscriptions: Vec<AzureSubscription> =
        object_items(azure_score.get("SubscriptionScores"))
            .into_iter()
            .map(|sub| AzureSubscription {
                name: str_field(sub, "SubscriptionName"),
                id: str_field(sub, "SubscriptionId"),
                score: opt_f64_field(sub, "CurrentScore"),
                max_score: opt_f64_field(sub, "MaxScore"),
                percentage: opt_f64_field(sub, "ScorePercentage"),
            })
            .collect();

    let mut history = historical_points(secure_score);
    let trend_dict = match secure_score.get("TrendAnalysis") {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };
    if history.is_empty() {
        history = trend_points(secure_score.get("TrendAnalysis"));
    }

    let (trend_value, trend_direction) = compute_trend(&history);

    let mut control_scores = control_recommendations(secure_score.get("AllControls"));
    control_scores.sort_by(|a, b| {
        b.score_gap.partial_cmp(&a.score_gap).unwrap_or(Ordering::Equal)
    });

    history.sort_by_key(|p| {
        parse_display_date(&p.date)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0)
    });

    // Tenant-wide Azure totals are often missing; sum the subscriptions.
    let mut azure_current = opt_f64_field(azure_summary, "CurrentScore");
    let mut azure_max = opt_f64_field(azure_summary, "MaxPossibleScore");
    if (azure_current.is_none() || azure_max.is_none()) && !azure_subscriptions.is_empty() {
        azure_current = Some(azure_subscriptions.iter().filter_map(|s| s.score).sum());
        azure_max = Some(azure_subscriptions.iter().filter_map(|s| s.max_score).sum());
    }

    Some(SecurityScores {
        current_score: opt_f64_field(summary, "CurrentScore"),
        max_score: opt_f64_field(summary, "MaxPossibleScore"),
        score_percentage: opt_f64_field(summary, "ScorePercentage"),
        azure_score: azure_current,
        azure_max_score: azure_max,
        azure_subscriptions,
        history,
        trend_value,
        trend_direction,
        control_scores,
        trend_percentage_change: trend_dict.and_then(|td| opt_f64_field(td, "PercentageChange")),
        trend_period_days: trend_dict
            .and_then(|td| td.get("PeriodDays"))
            .and_then(Value::as_i64),
    })
}

/// Dated points from `HistoricalScores`. When a row has no explicit
/// timestamp, the date rides in the tail of its `Id` (`tenant_DD-MM-YYYY`).
fn historical_points(secure_score: &serde_json::Map<String, Value>) -> Vec<HistoryPoint> {
    object_items(secure_score.get("HistoricalScores"))
        .into_iter()
        .filter_map(|item| {
            let score = opt_f64_field(item, "CurrentScore")?;
            let date = str_field(item, "CreatedDateTime").or_else(|| {
                str_field(item, "Id")
                    .and_then(|id| id.rsplit_once('_').map(|(_, tail)| tail.to_string()))
            })?;
            if date.is_empty() {
                return None;
            }
            Some(HistoryPoint { date: format_date(Some(&date)), score: Some(score) })
        })
        .collect()
}

/// Fallback when no historical rows exist: `TrendAnalysis` is either a list
/// of score observations or a two-point oldest/latest object.
fn trend_points(trend: Option<&Value>) -> Vec<HistoryPoint> {
    match trend {
        Some(Value::Array(_)) => object_items(trend)
            .into_iter()
            .map(|item| HistoryPoint {
                date: format_date(str_field(item, "CreatedDateTime").as_deref()),
                score: opt_f64_field(item, "CurrentScore"),
            })
            .collect(),
        Some(Value::Object(td)) => {
            let mut points = Vec::new();
            if let Some(date) = str_field(td, "OldestScoreDate") {
                points.push(HistoryPoint {
                    date: format_date(Some(&date)),
                    score: opt_f64_field(td, "OldestScore"),
                });
            }
            if let Some(date) = str_field(td, "LatestScoreDate") {
                points.push(HistoryPoint {
                    date: format_date(Some(&date)),
                    score: opt_f64_field(td, "LatestScore"),
                });
            }
            points
        }
        _ => Vec::new(),
    }
}

/// Oldest-vs-latest delta over the parseable points. Fewer than two
/// parseable points reads as stable.
fn compute_trend(history: &[HistoryPoint]) -> (f64, TrendDirection) {
    let mut parsed: Vec<(i64, f64)> = history
        .iter()
        .filter_map(|p| {
            let date = parse_display_date(&p.date)?;
            Some((date.and_utc().timestamp(), p.score?))
        })
        .collect();
    if parsed.len() < 2 {
        return (0.0, TrendDirection::Stable);
    }
    parsed.sort_by_key(|(ts, _)| *ts);

    let oldest = parsed.first().map(|(_, s)| *s).unwrap_or(0.0);
    let latest = parsed.last().map(|(_, s)| *s).unwrap_or(0.0);
    let value = latest - oldest;
    let direction = if value > 0.0 {
        TrendDirection::Increase
    } else if value < 0.0 {
        TrendDirection::Decrease
    } else {
        TrendDirection::Stable
    };
    (value, direction)
}

/// Only rows flagged as recommendations count, first occurrence per title.
fn control_recommendations(controls: Option<&Value>) -> Vec<ControlScore> {
    let mut seen_titles = HashSet::new();
    object_items(controls)
        .into_iter()
        .filter_map(|ctrl| {
            if ctrl.get("IsRecommendation") != Some(&Value::Bool(true)) {
                return None;
            }
            let title = str_field(ctrl, "Title").filter(|t| !t.is_empty())?;
            if !seen_titles.insert(title.clone()) {
                return None;
            }
            let category = str_field(ctrl, "Category")
                .filter(|s| !s.is_empty())
                .or_else(|| str_field(ctrl, "Tier").filter(|s| !s.is_empty()))
                .unwrap_or_else(|| "General".to_string());
            let status = str_field(ctrl, "ImplementationStatus")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Not Implemented".to_string());
            Some(ControlScore {
                title,
                category,
                status,
                score: f64_field(ctrl, "CurrentScore"),
                max_score: f64_field(ctrl, "MaxScore"),
                score_gap: f64_field(ctrl, "ScoreGap"),
                rank: ctrl.get("Rank").and_then(Value::as_i64),
            })
        })
        .collect()
}
