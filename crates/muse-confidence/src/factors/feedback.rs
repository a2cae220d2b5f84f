use chrono::{DateTime, Utc};

use muse_core::models::Feedback;

use super::days_between;

/// Factor value when a pattern has no scoreable feedback.
pub const NEUTRAL: f64 = 0.5;

/// Feedback factor: exponentially time-weighted average of action values.
///
/// Sample weight is `e^(-ageDays / decayDays)`. Ignores carry no acceptance
/// signal and are skipped entirely. An explicit rating adds
/// `weight * ((rating - 1) / 4) * 0.5` to the numerator only, so a recent
/// well-rated manual apply can push a sample's contribution above 1.0.
/// The weighted average is left un-capped; only the final confidence score
/// is clamped.
pub fn calculate(history: &[Feedback], now: DateTime<Utc>, decay_days: f64) -> f64 {
    let mut numerator = 0.0;
    let mut total_weight = 0.0;

    for fb in history {
        let Some(value) = fb.action.feedback_value() else {
            continue;
        };
        let weight = (-days_between(fb.timestamp, now) / decay_days).exp();
        numerator += weight * value;
        if let Some(rating) = fb.rating {
            numerator += weight * ((f64::from(rating) - 1.0) / 4.0) * 0.5;
        }
        total_weight += weight;
    }

    if total_weight <= f64::EPSILON {
        NEUTRAL
    } else {
        numerator / total_weight
    }
}
