//! Shared utility functions.

use chrono::Local;

/// Timestamp layout used at the start of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Current local wall-clock time as `YYYY-MM-DD HH:MM:SS.mmm`.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Final component of a path, splitting on both `/` and `\`.
///
/// Returns the input unchanged when it contains no separator.
pub fn base_file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
