use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-factor weights for the confidence formula. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub frequency: f64,
    pub recency: f64,
    pub feedback: f64,
    pub stability: f64,
    pub context: f64,
    pub correlation: f64,
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.frequency
            + self.recency
            + self.feedback
            + self.stability
            + self.context
            + self.correlation
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            frequency: defaults::DEFAULT_FREQUENCY_WEIGHT,
            recency: defaults::DEFAULT_RECENCY_WEIGHT,
            feedback: defaults::DEFAULT_FEEDBACK_WEIGHT,
            stability: defaults::DEFAULT_STABILITY_WEIGHT,
            context: defaults::DEFAULT_CONTEXT_WEIGHT,
            correlation: defaults::DEFAULT_CORRELATION_WEIGHT,
        }
    }
}

/// Confidence subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub weights: FactorWeights,
    /// Score at or above which suggestions auto-apply.
    pub auto_apply_threshold: f64,
    /// Score at or above which suggestions are actively suggested.
    pub suggest_threshold: f64,
    /// Floor for admitting patterns into suggestion queries at all.
    pub advisory_threshold: f64,
    /// Variance ceiling for the stability factor.
    pub volatility_threshold: f64,
    /// Exponential time constant (days) weighting feedback samples.
    pub feedback_decay_days: f64,
    /// Manual-apply share of feedback above which the +0.1 boost applies.
    pub manual_apply_boost_share: f64,
    /// Modify share of feedback above which the −0.15 penalty applies.
    pub modify_penalty_share: f64,
    /// Weekly multiplier applied to idle patterns by the decay sweep.
    pub decay_rate: f64,
    /// Idle days before the decay sweep touches a pattern.
    pub decay_idle_days: i64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            auto_apply_threshold: defaults::DEFAULT_AUTO_APPLY_THRESHOLD,
            suggest_threshold: defaults::DEFAULT_SUGGEST_THRESHOLD,
            advisory_threshold: defaults::DEFAULT_ADVISORY_THRESHOLD,
            volatility_threshold: defaults::DEFAULT_VOLATILITY_THRESHOLD,
            feedback_decay_days: defaults::DEFAULT_FEEDBACK_DECAY_DAYS,
            manual_apply_boost_share: defaults::DEFAULT_MANUAL_APPLY_BOOST_SHARE,
            modify_penalty_share: defaults::DEFAULT_MODIFY_PENALTY_SHARE,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            decay_idle_days: defaults::DEFAULT_DECAY_IDLE_DAYS,
        }
    }
}
