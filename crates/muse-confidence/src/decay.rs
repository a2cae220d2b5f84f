use chrono::{DateTime, Utc};

use muse_core::models::Confidence;

/// Idle decay: patterns unseen for more than the idle window lose
/// `rate^weeks` of their confidence, floored at the recovery floor.
///
/// Never increases a score: a pattern already below the floor (possible via
/// repeated incremental rejects) stays where it is.
pub fn apply(
    confidence: f64,
    last_seen: DateTime<Utc>,
    now: DateTime<Utc>,
    rate: f64,
    idle_days: i64,
) -> f64 {
    let idle = (now - last_seen).num_days();
    if idle <= idle_days {
        return confidence;
    }
    // Whole idle weeks; idle > idle_days guarantees at least one.
    let weeks = (idle / 7).max(1) as i32;
    let floor = confidence.min(Confidence::FLOOR);
    (confidence * rate.powi(weeks)).max(floor)
}
