use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::pattern::{Enhancement, PatternContext};

/// One user reaction to a suggested pattern application. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub project_id: String,
    /// Foreign key by convention only; a dangling reference is tolerated.
    pub pattern_id: String,
    pub action: FeedbackAction,
    /// Optional 1–5 user rating.
    pub rating: Option<u8>,
    pub comments: Option<String>,
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    /// Build a feedback row with a fresh id and no optional fields.
    pub fn new(
        project_id: impl Into<String>,
        pattern_id: impl Into<String>,
        action: FeedbackAction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.into(),
            pattern_id: pattern_id.into(),
            action,
            rating: None,
            comments: None,
            context: BTreeMap::new(),
            timestamp,
        }
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating.clamp(1, 5));
        self
    }
}

/// How a user reacted to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackAction {
    Accept,
    Reject,
    Modify,
    ManualApply,
    Ignore,
}

impl FeedbackAction {
    /// Acceptance signal: the user wanted this change.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Accept | Self::ManualApply)
    }

    /// Value of this action in the time-weighted feedback factor.
    ///
    /// `None` means the action carries no acceptance signal and is skipped
    /// (ignores inform stability, not the feedback average). ManualApply
    /// sits above 1.0: a direct manual application is stronger evidence
    /// than accepting a suggestion.
    pub fn feedback_value(self) -> Option<f64> {
        match self {
            Self::Accept => Some(1.0),
            Self::ManualApply => Some(1.2),
            Self::Modify => Some(0.7),
            Self::Reject => Some(0.0),
            Self::Ignore => None,
        }
    }

    /// Value of this action in the stability (variance) factor.
    pub fn stability_score(self) -> f64 {
        match self {
            Self::Accept | Self::ManualApply => 1.0,
            Self::Modify => 0.5,
            Self::Ignore => 0.3,
            Self::Reject => 0.0,
        }
    }

    /// Delta applied by the low-latency incremental confidence update.
    ///
    /// Modify is neutral here; the modify-rate penalty is handled by the
    /// full recompute.
    pub fn incremental_adjustment(self) -> f64 {
        match self {
            Self::Accept => 0.10,
            Self::ManualApply => 0.15,
            Self::Reject => -0.20,
            Self::Ignore => -0.05,
            Self::Modify => 0.0,
        }
    }
}

/// Raw interaction record emitted by the upstream transform engine.
///
/// Loosely typed on purpose: upstream noise is expected, and records missing
/// a classifiable subject are silently discarded by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionRecord {
    pub action: Option<String>,
    pub component_type: Option<String>,
    pub enhancement: Option<Enhancement>,
    pub context: PatternContext,
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_wire_form_is_snake_case() {
        let json = serde_json::to_string(&FeedbackAction::ManualApply).unwrap();
        assert_eq!(json, "\"manual_apply\"");
        let back: FeedbackAction = serde_json::from_str("\"accept\"").unwrap();
        assert_eq!(back, FeedbackAction::Accept);
    }

    #[test]
    fn rating_is_clamped_to_scale() {
        let fb = Feedback::new("p", "pat", FeedbackAction::Accept, Utc::now()).with_rating(9);
        assert_eq!(fb.rating, Some(5));
    }

    #[test]
    fn ignore_carries_no_feedback_value() {
        assert!(FeedbackAction::Ignore.feedback_value().is_none());
        assert_eq!(FeedbackAction::Ignore.stability_score(), 0.3);
    }
}
