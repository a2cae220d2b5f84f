use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accept/reject tally for one component type or enhancement kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PreferenceScore {
    pub accepts: u64,
    pub rejects: u64,
}

impl PreferenceScore {
    /// Acceptance rate, neutral 0.5 with no samples.
    pub fn score(&self) -> f64 {
        let total = self.accepts + self.rejects;
        if total == 0 {
            0.5
        } else {
            self.accepts as f64 / total as f64
        }
    }

    pub fn record(&mut self, positive: bool) {
        if positive {
            self.accepts += 1;
        } else {
            self.rejects += 1;
        }
    }
}

/// Aggregated historical acceptance per component type and enhancement kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub components: BTreeMap<String, PreferenceScore>,
    pub enhancements: BTreeMap<String, PreferenceScore>,
}

impl PreferenceProfile {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.enhancements.is_empty()
    }

    /// Score for a component type, if that bucket has been observed.
    pub fn component_score(&self, component_type: &str) -> Option<f64> {
        self.components.get(component_type).map(|s| s.score())
    }

    /// Score for an enhancement kind, if that bucket has been observed.
    pub fn enhancement_score(&self, kind: &str) -> Option<f64> {
        self.enhancements.get(kind).map(|s| s.score())
    }
}
