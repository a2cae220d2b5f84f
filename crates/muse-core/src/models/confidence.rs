use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence score clamped to [0.0, 1.0].
/// Estimates how likely a suggestion derived from a pattern is to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Neutral prior assigned to freshly extracted patterns.
    pub const NEUTRAL: f64 = 0.5;
    /// Hard floor. Confidence never collapses to zero, leaving room for recovery.
    pub const FLOOR: f64 = 0.1;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a Confidence clamped to [FLOOR, 1.0], the range of fully
    /// computed scores.
    pub fn floored(value: f64) -> Self {
        Self(value.clamp(Self::FLOOR, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check whether the score sits at the recovery floor.
    pub fn is_floor(self) -> bool {
        self.0 <= Self::FLOOR
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
