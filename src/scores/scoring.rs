//! Pure scoring functions: metric validation and composite-score derivation.
//!
//! Nothing here does I/O or touches shared state, so every rule is testable
//! with plain function calls.

use crate::shared::AppError;

use super::models::NewGameResult;

/// Hard ceiling on accepted net WPM; anything above is treated as garbage input
pub const MAX_NET_WPM: f64 = 300.0;

/// Validates a submission before anything is written.
///
/// Checks run in a fixed order and return on the first failure, naming the
/// offending field and the rejected value so the handler can surface a 400
/// instead of a generic error.
pub fn validate(result: &NewGameResult) -> Result<(), AppError> {
    if !(0.0..=MAX_NET_WPM).contains(&result.net_wpm) {
        return Err(AppError::invalid_metric("netWpm", result.net_wpm));
    }
    if !(0.0..=100.0).contains(&result.accuracy) {
        return Err(AppError::invalid_metric("accuracy", result.accuracy));
    }
    if result.owner_id.is_empty() {
        return Err(AppError::invalid_metric("ownerId", "(empty)"));
    }
    if result.display_name.is_empty() {
        return Err(AppError::invalid_metric("displayName", "(empty)"));
    }
    if result.gross_wpm < 0.0 {
        return Err(AppError::invalid_metric("grossWpm", result.gross_wpm));
    }
    Ok(())
}

/// Derives the single ranking value from speed and accuracy.
///
/// Accuracy acts as a fractional weight on net WPM, so the result is
/// deterministic and monotone non-decreasing in both inputs over the
/// validated ranges.
pub fn composite_score(net_wpm: f64, accuracy: f64) -> f64 {
    net_wpm * (accuracy / 100.0)
}
