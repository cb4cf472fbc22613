//! Log sanitization utilities
//!
//! Keeps response bodies (profile e-mails, bios, whole user pages)
//! from being dumped in full into debug/error logs.

/// Default byte budget for a logged body.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging using the default budget.
pub fn truncate_for_log(s: &str) -> String {
    truncate_to(s, TRUNCATE_LIMIT)
}

/// Keep at most `limit` bytes of `s`, cut on a char boundary, and note the
/// original size when anything was dropped.
pub fn truncate_to(s: &str, limit: usize) -> String {
    if s.len() <= limit {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= limit)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
