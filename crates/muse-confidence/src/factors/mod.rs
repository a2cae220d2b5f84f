//! One module per factor, each a pure `calculate` function.

pub mod context;
pub mod feedback;
pub mod frequency;
pub mod recency;
pub mod stability;

use chrono::{DateTime, Utc};

/// External inputs to a confidence calculation: the caller's live context
/// plus the evaluation instant.
#[derive(Debug, Clone)]
pub struct ContextFactors {
    pub now: DateTime<Utc>,
    pub framework: Option<String>,
    pub theme: Option<String>,
    pub brand_pack_id: Option<String>,
    pub file_type: Option<String>,
    /// Supplied by the correlation analyzer; neutral when absent.
    pub correlation_score: Option<f64>,
}

impl ContextFactors {
    /// Empty context evaluated at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            framework: None,
            theme: None,
            brand_pack_id: None,
            file_type: None,
            correlation_score: None,
        }
    }
}

/// Fractional days between two instants, never negative.
pub(crate) fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_seconds().max(0) as f64 / 86_400.0
}
