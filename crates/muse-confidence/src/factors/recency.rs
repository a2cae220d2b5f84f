use chrono::{DateTime, Utc};

use super::days_between;

/// Recency factor: step function of days since the pattern was last seen.
///
/// Range: 0.3 – 1.0.
pub fn calculate(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = days_between(last_seen, now);
    if days <= 1.0 {
        1.0
    } else if days <= 7.0 {
        0.9
    } else if days <= 30.0 {
        0.7
    } else if days <= 90.0 {
        0.5
    } else {
        0.3
    }
}
