//! Documented default values for every tunable.

// Factor weights (sum to 1.0).
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 0.25;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.15;
pub const DEFAULT_FEEDBACK_WEIGHT: f64 = 0.30;
pub const DEFAULT_STABILITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_CONTEXT_WEIGHT: f64 = 0.10;
pub const DEFAULT_CORRELATION_WEIGHT: f64 = 0.05;

// Action tiers.
pub const DEFAULT_AUTO_APPLY_THRESHOLD: f64 = 0.9;
pub const DEFAULT_SUGGEST_THRESHOLD: f64 = 0.7;
/// Advisory admits everything by default.
pub const DEFAULT_ADVISORY_THRESHOLD: f64 = 0.0;

// Confidence internals.
pub const DEFAULT_VOLATILITY_THRESHOLD: f64 = 0.3;
/// Exponential time constant (days) for feedback sample weights.
pub const DEFAULT_FEEDBACK_DECAY_DAYS: f64 = 30.0;
/// Manual-apply share above which the manual-usage boost applies.
pub const DEFAULT_MANUAL_APPLY_BOOST_SHARE: f64 = 0.3;
/// Modify share above which the modification penalty applies.
pub const DEFAULT_MODIFY_PENALTY_SHARE: f64 = 0.5;

// Idle decay sweep.
pub const DEFAULT_DECAY_RATE: f64 = 0.95;
pub const DEFAULT_DECAY_IDLE_DAYS: i64 = 7;

// Correlation analysis.
pub const DEFAULT_CORRELATION_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_MINIMUM_SAMPLES: usize = 5;
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.6;
/// Positive events this close together count as co-occurring.
pub const DEFAULT_CO_OCCURRENCE_WINDOW_SECS: i64 = 3600;
/// A-then-B gap that counts as a sequence.
pub const DEFAULT_SEQUENCE_WINDOW_SECS: i64 = 600;
/// Pair-scan budget; scans past this return partial results.
pub const DEFAULT_MAX_PAIRS: usize = 10_000;

// Calibration audit.
pub const DEFAULT_CALIBRATION_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_CALIBRATION_BINS: usize = 10;
pub const DEFAULT_RELIABILITY_FLOOR: f64 = 0.8;
pub const DEFAULT_SHARPNESS_FLOOR: f64 = 0.2;
pub const DEFAULT_ACCURACY_FLOOR: f64 = 0.7;
/// Patterns audited per run; 0 means unbounded.
pub const DEFAULT_CALIBRATION_MAX_PATTERNS: usize = 0;

// Retention cleanup.
pub const DEFAULT_RETENTION_MAX_CONFIDENCE: f64 = 0.1;
pub const DEFAULT_RETENTION_DAYS: i64 = 90;

// Result bounds.
pub const DEFAULT_QUERY_LIMIT: usize = 50;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 50;
pub const DEFAULT_RELATED_LIMIT: usize = 3;
