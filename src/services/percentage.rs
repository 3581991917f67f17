//! Percentage formatting for summary slices

/// Format a fraction in `[0, 1]` as a whole percentage, rounding half up
///
/// Callers must not pass `0 / 0`; a zero total has no meaningful share.
///
/// # Examples
/// ```
/// use momuney::services::to_percentage;
/// assert_eq!(to_percentage(0.5), "50%");
/// assert_eq!(to_percentage(0.005), "1%");
/// ```
pub fn to_percentage(fraction: f64) -> String {
    format!("{}%", round_half_up(fraction * 100.0))
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
