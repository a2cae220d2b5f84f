use serde::{Deserialize, Serialize};

/// Derived relationship strength between two patterns. Recomputed on demand,
/// never required to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correlation {
    pub pattern_a: String,
    pub pattern_b: String,
    /// Weighted blend of the three metrics, in [0, 1].
    pub score: f64,
    pub details: CorrelationDetails,
    pub kind: CorrelationKind,
}

/// The three raw metrics behind a correlation score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorrelationDetails {
    /// Fraction of matching context keys. Symmetric.
    pub context_similarity: f64,
    /// Positive-feedback events landing within an hour of each other.
    pub co_occurrence: f64,
    /// A-then-B sequences within ten minutes. Asymmetric by design.
    pub timing_correlation: f64,
}

/// Classification of a pattern pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKind {
    /// Same surroundings: high context similarity.
    Contextual,
    /// Applied one after the other.
    Sequential,
    /// Often accepted together.
    Complementary,
    /// Below every stronger classification.
    Weak,
}
