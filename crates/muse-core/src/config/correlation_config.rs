use serde::{Deserialize, Serialize};

use super::defaults;

/// Correlation analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Trailing window of feedback considered (days).
    pub window_days: i64,
    /// Feedback events a pattern needs inside the window to be analyzed.
    pub minimum_samples: usize,
    /// Pairs scoring below this are discarded.
    pub threshold: f64,
    /// Positive events within this many seconds co-occur.
    pub co_occurrence_window_secs: i64,
    /// A-then-B gap (seconds) that counts as a sequence.
    pub sequence_window_secs: i64,
    /// Pair-scan budget. The analyzer exits early with partial results
    /// rather than blocking on very large pattern sets.
    pub max_pairs: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_CORRELATION_WINDOW_DAYS,
            minimum_samples: defaults::DEFAULT_MINIMUM_SAMPLES,
            threshold: defaults::DEFAULT_CORRELATION_THRESHOLD,
            co_occurrence_window_secs: defaults::DEFAULT_CO_OCCURRENCE_WINDOW_SECS,
            sequence_window_secs: defaults::DEFAULT_SEQUENCE_WINDOW_SECS,
            max_pairs: defaults::DEFAULT_MAX_PAIRS,
        }
    }
}
