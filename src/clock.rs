//! Duration formatting for lap and race times

use std::time::Duration;

/// Width of the truncated lap-time display, `HH:MM:SS.f`.
const LAP_TIME_WIDTH: usize = 10;

/// Format a duration as `HH:MM:SS.ffffff` with microsecond precision.
///
/// This is the rendering used for winning race times.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:06}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60,
        duration.subsec_micros()
    )
}

/// Format a lap time for display: the full `HH:MM:SS.ffffff` rendering cut
/// to ten characters, `HH:MM:SS.f`.
///
/// The single fractional digit is a compatibility quirk of the upstream
/// results table, kept exact here as a named formatter.
pub fn format_lap_time(duration: Duration) -> String {
    let mut text = format_duration(duration);
    text.truncate(LAP_TIME_WIDTH);
    text
}
