use serde::{Deserialize, Serialize};

use muse_core::config::ConfidenceConfig;
use muse_core::models::{Confidence, Feedback, FeedbackAction, Pattern};

use crate::factors::{self, ContextFactors};

/// Boost when manual applies dominate the feedback mix.
pub const MANUAL_APPLY_BOOST: f64 = 0.10;
/// Penalty when users mostly modify what was suggested.
pub const MODIFY_PENALTY: f64 = 0.15;
/// Bonus for enhancements touching accessibility concerns.
pub const ACCESSIBILITY_BONUS: f64 = 0.05;
/// Bonus for enhancements referencing design tokens.
pub const TOKEN_BONUS: f64 = 0.05;

/// The six factors behind a score, their weighted blend, and the applied
/// adjustments. Exposed to callers for observability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub frequency: f64,
    pub recency: f64,
    pub feedback: f64,
    pub stability: f64,
    pub context: f64,
    pub correlation: f64,
    /// Weighted sum before adjustments.
    pub weighted_score: f64,
    /// Net adjustment applied on top of the weighted sum.
    pub adjustments: f64,
    /// Clamped to [0.1, 1.0].
    pub final_score: f64,
}

impl ConfidenceBreakdown {
    /// Factor values paired with their identity, for explanation ranking.
    pub fn factor_values(&self) -> [(Factor, f64); 6] {
        [
            (Factor::Frequency, self.frequency),
            (Factor::Recency, self.recency),
            (Factor::Feedback, self.feedback),
            (Factor::Stability, self.stability),
            (Factor::Context, self.context),
            (Factor::Correlation, self.correlation),
        ]
    }
}

/// Identity of a factor inside a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Frequency,
    Recency,
    Feedback,
    Stability,
    Context,
    Correlation,
}

/// Full confidence computation: weighted factor blend, then adjustments,
/// then the [0.1, 1.0] clamp.
pub fn compute(
    pattern: &Pattern,
    history: &[Feedback],
    ctx: &ContextFactors,
    config: &ConfidenceConfig,
) -> ConfidenceBreakdown {
    let weights = &config.weights;

    let frequency = factors::frequency::calculate(pattern.metadata.frequency);
    let recency = factors::recency::calculate(pattern.metadata.last_seen, ctx.now);
    let feedback =
        factors::feedback::calculate(history, ctx.now, config.feedback_decay_days);
    let stability = factors::stability::calculate(history, config.volatility_threshold);
    let context = factors::context::calculate(&pattern.context, ctx);
    let correlation = ctx.correlation_score.unwrap_or(0.5);

    let weighted_score = frequency * weights.frequency
        + recency * weights.recency
        + feedback * weights.feedback
        + stability * weights.stability
        + context * weights.context
        + correlation * weights.correlation;

    let mut adjustments = 0.0;
    if !history.is_empty() {
        let total = history.len() as f64;
        let manual_share = history
            .iter()
            .filter(|f| f.action == FeedbackAction::ManualApply)
            .count() as f64
            / total;
        if manual_share > config.manual_apply_boost_share {
            adjustments += MANUAL_APPLY_BOOST;
        }
        let modify_share = history
            .iter()
            .filter(|f| f.action == FeedbackAction::Modify)
            .count() as f64
            / total;
        if modify_share > config.modify_penalty_share {
            adjustments -= MODIFY_PENALTY;
        }
    }
    if pattern.enhancement.targets_accessibility() {
        adjustments += ACCESSIBILITY_BONUS;
    }
    if pattern.enhancement.references_tokens() {
        adjustments += TOKEN_BONUS;
    }

    let final_score = Confidence::floored(weighted_score + adjustments).value();

    ConfidenceBreakdown {
        frequency,
        recency,
        feedback,
        stability,
        context,
        correlation,
        weighted_score,
        adjustments,
        final_score,
    }
}
