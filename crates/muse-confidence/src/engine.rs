use chrono::{DateTime, Utc};
use tracing::debug;

use muse_core::config::ConfidenceConfig;
use muse_core::models::{Confidence, Feedback, FeedbackAction, Pattern, SuggestionAction};

use crate::decay;
use crate::explanation;
use crate::factors::ContextFactors;
use crate::formula::{self, ConfidenceBreakdown};

/// Outcome of a full confidence computation.
#[derive(Debug, Clone)]
pub struct ConfidenceReport {
    pub score: Confidence,
    pub action: SuggestionAction,
    pub breakdown: ConfidenceBreakdown,
    pub explanation: String,
}

/// Confidence engine: full recompute for batch/report paths, incremental
/// update for feedback-time adjustment, idle decay for maintenance sweeps.
pub struct ConfidenceEngine {
    config: ConfidenceConfig,
}

impl ConfidenceEngine {
    pub fn new(config: ConfidenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Full multi-factor computation with breakdown and explanation.
    pub fn calculate(
        &self,
        pattern: &Pattern,
        history: &[Feedback],
        ctx: &ContextFactors,
    ) -> ConfidenceReport {
        let breakdown = formula::compute(pattern, history, ctx, &self.config);
        debug!(
            pattern_id = %pattern.id,
            weighted = breakdown.weighted_score,
            adjustments = breakdown.adjustments,
            score = breakdown.final_score,
            "confidence computed"
        );
        let score = Confidence::floored(breakdown.final_score);
        ConfidenceReport {
            score,
            action: self.classify(score),
            breakdown,
            explanation: explanation::explain(&breakdown, &self.config.weights),
        }
    }

    /// Map a score onto its action tier. Ties classify upward.
    pub fn classify(&self, score: Confidence) -> SuggestionAction {
        let value = score.value();
        if value >= self.config.auto_apply_threshold {
            SuggestionAction::AutoApply
        } else if value >= self.config.suggest_threshold {
            SuggestionAction::Suggest
        } else {
            SuggestionAction::Advisory
        }
    }

    /// Low-latency incremental update applied when one feedback event lands.
    /// Cheaper than, and distinct from, the full recompute.
    pub fn apply_feedback(&self, confidence: Confidence, action: FeedbackAction) -> Confidence {
        Confidence::new(confidence.value() + action.incremental_adjustment())
    }

    /// Idle decay for one pattern, used by the maintenance sweep.
    pub fn decay(
        &self,
        confidence: Confidence,
        last_seen: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Confidence {
        Confidence::new(decay::apply(
            confidence.value(),
            last_seen,
            now,
            self.config.decay_rate,
            self.config.decay_idle_days,
        ))
    }
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::new(ConfidenceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_ties_go_upward() {
        let engine = ConfidenceEngine::default();
        assert_eq!(
            engine.classify(Confidence::new(0.9)),
            SuggestionAction::AutoApply
        );
        assert_eq!(
            engine.classify(Confidence::new(0.7)),
            SuggestionAction::Suggest
        );
        assert_eq!(
            engine.classify(Confidence::new(0.69)),
            SuggestionAction::Advisory
        );
    }

    #[test]
    fn incremental_updates_match_documented_deltas() {
        let engine = ConfidenceEngine::default();
        let base = Confidence::new(0.5);
        assert!((engine.apply_feedback(base, FeedbackAction::Accept).value() - 0.6).abs() < 1e-9);
        assert!(
            (engine.apply_feedback(base, FeedbackAction::ManualApply).value() - 0.65).abs() < 1e-9
        );
        assert!((engine.apply_feedback(base, FeedbackAction::Reject).value() - 0.3).abs() < 1e-9);
        assert!((engine.apply_feedback(base, FeedbackAction::Ignore).value() - 0.45).abs() < 1e-9);
        assert_eq!(engine.apply_feedback(base, FeedbackAction::Modify).value(), 0.5);
    }

    #[test]
    fn incremental_update_clamps_at_unit_bounds() {
        let engine = ConfidenceEngine::default();
        assert_eq!(
            engine
                .apply_feedback(Confidence::new(0.95), FeedbackAction::ManualApply)
                .value(),
            1.0
        );
        assert_eq!(
            engine
                .apply_feedback(Confidence::new(0.1), FeedbackAction::Reject)
                .value(),
            0.0
        );
    }
}
