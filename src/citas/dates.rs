use chrono::{DateTime, Utc};

/// Long-form rendering of an appointment date: weekday, day, month, year,
/// hour and minute. An absent date renders as an empty string so callers can
/// substitute a placeholder instead of failing.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%A %-d %B %Y, %H:%M").to_string(),
        None => String::new(),
    }
}
