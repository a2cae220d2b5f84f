use serde::{Deserialize, Serialize};

use super::defaults;

/// Retention cleanup configuration. Patterns below `max_confidence` that
/// have not been seen for `max_idle_days` are removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    pub max_confidence: f64,
    pub max_idle_days: i64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_confidence: defaults::DEFAULT_RETENTION_MAX_CONFIDENCE,
            max_idle_days: defaults::DEFAULT_RETENTION_DAYS,
        }
    }
}
