//! Project progress rules.

use crate::error::{codes, CoreError};

/// Lowest valid progress percentage.
pub const MIN_PROGRESS: i64 = 0;

/// Highest valid progress percentage.
pub const MAX_PROGRESS: i64 = 100;

/// Check that a directly supplied progress value lies in `[0, 100]`.
pub fn validate_progress(progress: i64) -> Result<i32, CoreError> {
    if !(MIN_PROGRESS..=MAX_PROGRESS).contains(&progress) {
        return Err(CoreError::invalid(
            codes::INVALID_PROGRESS,
            format!("Progress must be between {MIN_PROGRESS} and {MAX_PROGRESS}"),
        ));
    }
    Ok(progress as i32)
}

/// Rounded percentage `round(100 * part / whole)`, halves rounding up.
///
/// Returns `None` when `whole` is zero.
pub fn rounded_percentage(part: i64, whole: i64) -> Option<i32> {
    if whole <= 0 {
        return None;
    }
    let part = part.clamp(0, whole);
    Some(((200 * part + whole) / (2 * whole)) as i32)
}

/// Derived project progress from its task completion ratio.
///
/// A project without tasks has no derived progress; callers must leave the
/// stored value untouched in that case.
pub fn derived_progress(completed: i64, total: i64) -> Option<i32> {
    rounded_percentage(completed, total)
}
