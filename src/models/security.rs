use super::risk::TrendDirection;
use serde::{Deserialize, Serialize};

/// Microsoft Secure Score plus the Azure subscription scores, with the
/// history-derived trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScores {
    pub current_score: Option<f64>,
    pub max_score: Option<f64>,
    pub score_percentage: Option<f64>,
    pub azure_score: Option<f64>,
    pub azure_max_score: Option<f64>,
    pub azure_subscriptions: Vec<AzureSubscription>,
    pub history: Vec<HistoryPoint>,
    pub trend_value: f64,
    pub trend_direction: TrendDirection,
    pub control_scores: Vec<ControlScore>,
    pub trend_percentage_change: Option<f64>,
    pub trend_period_days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureSubscription {
    pub name: Option<String>,
    pub id: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub percentage: Option<f64>,
}

/// One dated score observation, date already in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub score: Option<f64>,
}

/// A recommended improvement action and its score gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlScore {
    pub title: String,
    pub category: String,
    pub status: String,
    pub score: f64,
    pub max_score: f64,
    pub score_gap: f64,
    pub rank: Option<i64>,
}
