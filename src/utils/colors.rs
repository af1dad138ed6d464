/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Dim empty optional fields so filled ones stand out in tables.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}

/// Category accent used by the browse view.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "Development" => CYAN,
        "Security" => MAGENTA,
        _ => GREEN,
    }
}
