use serde::{Deserialize, Serialize};

use super::defaults;

/// Calibration audit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Trailing window of feedback audited (days).
    pub window_days: i64,
    /// Number of equal-width confidence bins.
    pub bins: usize,
    /// Reliability below this emits a weight-adjustment recommendation.
    pub reliability_floor: f64,
    /// Sharpness below this emits a discrimination recommendation.
    pub sharpness_floor: f64,
    /// Accuracy below this emits a calculation-review recommendation.
    pub accuracy_floor: f64,
    /// Item budget per run; 0 means unbounded.
    pub max_patterns: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_CALIBRATION_WINDOW_DAYS,
            bins: defaults::DEFAULT_CALIBRATION_BINS,
            reliability_floor: defaults::DEFAULT_RELIABILITY_FLOOR,
            sharpness_floor: defaults::DEFAULT_SHARPNESS_FLOOR,
            accuracy_floor: defaults::DEFAULT_ACCURACY_FLOOR,
            max_patterns: defaults::DEFAULT_CALIBRATION_MAX_PATTERNS,
        }
    }
}
