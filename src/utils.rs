use chrono::{DateTime, Local};
use std::path::Path;

/// Format used for record timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`
pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Last path component, for user-facing messages
pub fn display_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
