use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// History identifiers and display dates use `DD-MM-YYYY` with an optional
/// `HH:MM` suffix, which chrono's RFC 3339 parser will not accept.
static DISPLAY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})-(\d{2})-(\d{4})(?:\s+(\d{2}):(\d{2}))?$").unwrap()
});

/// Renders a producer timestamp as `DD-MM-YYYY HH:MM`.
///
/// Empty or missing input renders as an empty string. Anything that cannot
/// be parsed is passed through unchanged so the raw value stays visible.
pub fn format_date(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d-%m-%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Parses the timestamp shapes seen across producer versions: RFC 3339
/// (with or without the trailing `Z`), naive `T`-separated datetimes, and
/// bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// Parses an already-formatted `DD-MM-YYYY[ HH:MM]` display date. Used to
/// order history points and audit rows after formatting.
pub fn parse_display_date(raw: &str) -> Option<NaiveDateTime> {
    let caps = DISPLAY_DATE.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let hour: u32 = caps.get(4).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let minute: u32 = caps.get(5).map_or(Some(0), |m| m.as_str().parse().ok())?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Sort key for mixed-format timestamps: tries the producer formats first,
/// then the display format. Unparseable values order before everything else.
pub fn sort_key(raw: &str) -> i64 {
    parse_timestamp(raw)
        .or_else(|| parse_display_date(raw))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(i64::MIN)
}
