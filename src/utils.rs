//! Small helpers for dates and string shaping.

use chrono::Local;

/// ISO date string (`YYYY-MM-DD`) for the current run.
///
/// Computed once at run start so every resource produced in one run carries
/// the same `retrieved` value.
pub fn run_date() -> String {
    Local::now().date_naive().to_string()
}

/// Truncate a string to at most `max` characters, respecting char
/// boundaries.
///
/// Used by the description fallback and when logging oversized payloads.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Capitalize the first character of a string.
///
/// Used to shape level strings reported lowercase by source APIs
/// (e.g. "beginner" -> "Beginner").
pub fn upcase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}
