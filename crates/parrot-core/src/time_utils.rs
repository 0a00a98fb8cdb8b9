use chrono::{DateTime, Local};

const BANNER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CLOCK_LABEL_FORMAT: &str = "%H:%M:%S";

/// Returns the current wall-clock time in the local timezone.
pub fn current_local_time() -> DateTime<Local> {
    Local::now()
}

/// Formats `YYYY-MM-DD HH:MM:SS` for report banners.
pub fn format_banner_timestamp(at: &DateTime<Local>) -> String {
    at.format(BANNER_TIMESTAMP_FORMAT).to_string()
}

/// Formats `HH:MM:SS` for transcript message prefixes.
pub fn format_clock_label(at: &DateTime<Local>) -> String {
    at.format(CLOCK_LABEL_FORMAT).to_string()
}
