/// Format seconds as `M:SS`.
///
/// Minutes are unpadded, seconds are floored and zero-padded. Negative or
/// non-finite input renders as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// Elapsed share of the track as a percentage in `[0, 100]`.
///
/// Live streams report an infinite duration and freshly created audio
/// reports zero, both of which give 0.
pub fn progress_percent(current_secs: f64, duration_secs: f64) -> f64 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 || !current_secs.is_finite() {
        return 0.0;
    }
    (current_secs / duration_secs * 100.0).clamp(0.0, 100.0)
}
