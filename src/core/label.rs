//! Header labels for the selected date.

use chrono::NaiveDate;

/// Format a date for the strip header.
///
/// Dates within a day of the anchor get a word; everything else is the
/// abbreviated month plus a zero-padded day, all uppercase.
pub fn relative_label(date: NaiveDate, days_from_anchor: i64) -> String {
    match days_from_anchor {
        0 => "TODAY".to_string(),
        -1 => "YESTERDAY".to_string(),
        1 => "TOMORROW".to_string(),
        _ => date.format("%b %d").to_string().to_uppercase(),
    }
}
