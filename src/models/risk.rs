use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk bucket for an application permission grant, ordered from most to
/// least severe. Free-text source values map case-insensitively; anything
/// unrecognized lands in `Unrated` rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Unrated,
}

impl AppRiskLevel {
    /// Returns a numeric rank where lower values indicate higher risk.
    /// Critical = 0, High = 1, Medium = 2, Low = 3, Unrated = 4.
    pub fn rank(&self) -> u8 {
        match self {
            AppRiskLevel::Critical => 0,
            AppRiskLevel::High => 1,
            AppRiskLevel::Medium => 2,
            AppRiskLevel::Low => 3,
            AppRiskLevel::Unrated => 4,
        }
    }

    pub fn parse(raw: &str) -> AppRiskLevel {
        match raw.to_ascii_lowercase().as_str() {
            "critical" => AppRiskLevel::Critical,
            "high" => AppRiskLevel::High,
            "medium" => AppRiskLevel::Medium,
            "low" => AppRiskLevel::Low,
            _ => AppRiskLevel::Unrated,
        }
    }
}

/// Severity of a Defender/Sentinel incident or alert. Used both as the row
/// value and as the `by_severity` bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
    Informational,
    Unknown,
}

impl Severity {
    pub fn parse(raw: Option<&str>) -> Severity {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("high") => Severity::High,
            Some("medium") => Severity::Medium,
            Some("low") => Severity::Low,
            Some("informational") | Some("info") => Severity::Informational,
            _ => Severity::Unknown,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Informational => "Informational",
            Severity::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Direction of the secure-score history delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increase,
    Decrease,
    Stable,
}
