//! Display helpers shared by the pages: translated status labels and
//! human-readable dates.

use chrono::{Datelike, NaiveDateTime};
use shared_types::{normalize_status, parse_timestamp, t, Language};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Translated label for a case or report status. Unknown statuses are
/// shown as Title Case.
pub fn status_label(lang: Language, status: &str) -> String {
    let key = match normalize_status(status) {
        "new" => "status.new",
        "under_investigation" => "status.under_investigation",
        "resolved" => "status.resolved",
        "archived" => "status.archived",
        "approved" => "status.approved",
        "rejected" => "status.rejected",
        other => return format_snake_case_title(other),
    };
    t(lang, key).to_string()
}

pub fn priority_label(lang: Language, priority: &str) -> String {
    let key = match priority {
        "low" => "priority.low",
        "medium" => "priority.medium",
        "high" => "priority.high",
        other => return format_snake_case_title(other),
    };
    t(lang, key).to_string()
}

pub fn reporter_type_label(lang: Language, reporter_type: &str) -> String {
    match reporter_type {
        "victim" => t(lang, "report.victim").to_string(),
        "witness" => t(lang, "report.witness").to_string(),
        other => format_snake_case_title(other),
    }
}

fn format_human(dt: NaiveDateTime) -> String {
    format!("{} {}, {}", MONTH_NAMES[dt.month0() as usize], dt.day(), dt.year())
}

/// "Jan 20, 2026" for any timestamp the backend emits. Unparseable input
/// is returned unchanged; empty input becomes `-`.
pub fn format_date_human(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "-".to_string();
    }
    parse_timestamp(raw)
        .map(format_human)
        .unwrap_or_else(|| raw.to_string())
}

/// Convert a snake_case string to Title Case (e.g. "forced_displacement" → "Forced Displacement").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
