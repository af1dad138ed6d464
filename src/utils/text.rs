//! Text shaping helpers for CLI output.

use chrono::{TimeZone, Utc};
use unicode_width::UnicodeWidthChar;

/// Truncate to a maximum display width, appending an ellipsis when the
/// value was cut. Width-aware so Arabic and other wide text truncate
/// cleanly.
pub fn truncate(value: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut end = value.len();
    let mut cut = false;

    for (i, ch) in value.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            end = i;
            cut = true;
            break;
        }
        width += w;
    }

    if cut {
        format!("{}…", &value[..end])
    } else {
        value.to_string()
    }
}

/// Wrap a description body to the given width for the detail views.
pub fn wrap_body(value: &str, width: usize) -> String {
    textwrap::fill(value, width)
}

/// Render an epoch-milliseconds creation timestamp as a calendar date.
pub fn format_created_at(millis: Option<i64>) -> String {
    match millis.and_then(|m| Utc.timestamp_millis_opt(m).single()) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
