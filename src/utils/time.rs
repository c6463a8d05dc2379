//! Wall-clock helpers for line timestamps.

/// Current time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Offset of local time from UTC, in minutes (east positive).
#[cfg(target_arch = "wasm32")]
pub fn local_offset_minutes() -> i32 {
    // getTimezoneOffset() is UTC minus local
    -(js_sys::Date::new_0().get_timezone_offset() as i32)
}

/// Offset of local time from UTC, in minutes (east positive).
#[cfg(not(target_arch = "wasm32"))]
pub fn local_offset_minutes() -> i32 {
    0
}

/// Format a timestamp as a 24-hour `HH:MM:SS` clock.
pub fn format_clock(ms: f64, offset_minutes: i32) -> String {
    let secs = (ms / 1000.0).floor() as i64 + i64::from(offset_minutes) * 60;
    let of_day = secs.rem_euclid(86_400);
    format!(
        "{:02}:{:02}:{:02}",
        of_day / 3600,
        (of_day % 3600) / 60,
        of_day % 60
    )
}

/// Format a timestamp as local `HH:MM:SS`.
pub fn clock(ms: f64) -> String {
    format_clock(ms, local_offset_minutes())
}
