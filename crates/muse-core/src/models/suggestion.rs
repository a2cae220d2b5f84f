use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::correlation::CorrelationKind;
use crate::models::pattern::Enhancement;
use crate::models::Confidence;

/// A confidence-scored, action-tagged enhancement suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub pattern_id: String,
    pub component_type: String,
    pub enhancement: Enhancement,
    pub confidence: Confidence,
    pub action: SuggestionAction,
    /// Human-readable account of why the suggestion scored as it did.
    pub reasoning: String,
    /// Top correlated neighbor patterns, strongest first.
    #[serde(default)]
    pub related: Vec<RelatedPattern>,
    pub frequency: u64,
    pub last_seen: DateTime<Utc>,
}

/// What the caller should do with a suggestion, by confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionAction {
    /// Confident enough to apply without asking.
    AutoApply,
    /// Surface prominently and let the user decide.
    Suggest,
    /// Mention only; not confident enough to push.
    Advisory,
}

/// A correlated neighbor attached to a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPattern {
    pub pattern_id: String,
    pub score: f64,
    pub kind: CorrelationKind,
}
