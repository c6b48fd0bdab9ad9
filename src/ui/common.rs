//! Helpers shared by the page reducers.

/// Error text for a failed request, or `fallback` when the message is blank.
pub fn failure_message(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Moves a scroll offset by `delta`, clamped to `0..=max`.
pub fn apply_scroll(current: u16, delta: i32, max: u16) -> u16 {
    let next = (i32::from(current) + delta).clamp(0, i32::from(max));
    u16::try_from(next).unwrap_or(max)
}
