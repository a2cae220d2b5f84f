//! Engine configuration. Explicit structs passed into constructors; the
//! engine has no module-level mutable state.

mod calibration_config;
mod confidence_config;
mod correlation_config;
pub mod defaults;
mod retention_config;

pub use calibration_config::CalibrationConfig;
pub use confidence_config::{ConfidenceConfig, FactorWeights};
pub use correlation_config::CorrelationConfig;
pub use retention_config::RetentionConfig;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration with per-subsystem sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub confidence: ConfidenceConfig,
    pub correlation: CorrelationConfig,
    pub calibration: CalibrationConfig,
    pub retention: RetentionConfig,
    /// Upper bound on suggestions returned per call.
    pub max_suggestions: usize,
    /// Correlated neighbors attached per suggestion.
    pub related_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence: ConfidenceConfig::default(),
            correlation: CorrelationConfig::default(),
            calibration: CalibrationConfig::default(),
            retention: RetentionConfig::default(),
            max_suggestions: defaults::DEFAULT_MAX_SUGGESTIONS,
            related_limit: defaults::DEFAULT_RELATED_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Validate cross-field invariants that serde defaults cannot enforce.
    pub fn validate(&self) -> Result<(), String> {
        let c = &self.confidence;
        if c.suggest_threshold > c.auto_apply_threshold {
            return Err(format!(
                "suggest threshold {} above auto-apply threshold {}",
                c.suggest_threshold, c.auto_apply_threshold
            ));
        }
        let weight_sum = c.weights.sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(format!("factor weights sum to {weight_sum}, expected 1.0"));
        }
        Ok(())
    }
}
