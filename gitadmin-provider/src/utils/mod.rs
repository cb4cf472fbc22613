//! Utility modules.

/// Log sanitization utilities to keep large bodies out of the logs.
pub mod log_sanitizer;
