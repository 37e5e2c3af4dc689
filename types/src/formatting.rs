//! Centralized countdown formatting utilities.
//!
//! All duration display formatting goes through this module so icon
//! cooldowns, status timers, and alert readouts render identically across
//! overlay and editor surfaces.

/// Format a countdown in seconds for icon/alert display.
///
/// - 60 s and above are formatted as whole minutes (`2m`)
/// - 10 s and above as whole seconds (`23`)
/// - below 10 s with one decimal (`9.5`)
/// - zero or negative values render as empty (nothing left to count down)
///
/// # Examples
/// ```
/// use vigil_types::formatting::format_countdown;
/// assert_eq!(format_countdown(125.0), "2m");
/// assert_eq!(format_countdown(23.4), "23");
/// assert_eq!(format_countdown(9.55), "9.5");
/// assert_eq!(format_countdown(0.0), "");
/// ```
pub fn format_countdown(secs: f32) -> String {
    if secs <= 0.0 {
        String::new()
    } else if secs >= 60.0 {
        format!("{}m", (secs / 60.0).floor() as u32)
    } else if secs >= 10.0 {
        format!("{}", secs.floor() as u32)
    } else {
        // Truncate, don't round: showing "10.0" for 9.96 would overshoot
        format!("{:.1}", (secs * 10.0).floor() / 10.0)
    }
}

/// Format a charge/stack count for icon corners. Zero renders as empty so
/// a depleted counter doesn't draw a distracting "0".
///
/// # Examples
/// ```
/// use vigil_types::formatting::format_count;
/// assert_eq!(format_count(3), "3");
/// assert_eq!(format_count(0), "");
/// ```
pub fn format_count(n: u8) -> String {
    if n == 0 { String::new() } else { n.to_string() }
}
