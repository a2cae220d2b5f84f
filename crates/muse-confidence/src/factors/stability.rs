use muse_core::models::Feedback;

/// Samples required before variance is meaningful.
pub const MIN_SAMPLES: usize = 3;

/// Factor value below the sample minimum.
pub const NEUTRAL: f64 = 0.5;

/// Stability factor: `1 − min(variance / volatilityThreshold, 1)` over the
/// per-action stability scores. Volatile reaction histories score low even
/// when the average reaction is positive.
pub fn calculate(history: &[Feedback], volatility_threshold: f64) -> f64 {
    if history.len() < MIN_SAMPLES {
        return NEUTRAL;
    }

    let scores: Vec<f64> = history
        .iter()
        .map(|fb| fb.action.stability_score())
        .collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let variance =
        scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;

    1.0 - (variance / volatility_threshold).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use muse_core::models::FeedbackAction;

    fn history(actions: &[FeedbackAction]) -> Vec<Feedback> {
        actions
            .iter()
            .map(|&a| Feedback::new("proj", "pat", a, Utc::now()))
            .collect()
    }

    #[test]
    fn below_minimum_samples_is_neutral() {
        let h = history(&[FeedbackAction::Accept, FeedbackAction::Reject]);
        assert_eq!(calculate(&h, 0.3), NEUTRAL);
    }

    #[test]
    fn uniform_reactions_are_fully_stable() {
        let h = history(&[FeedbackAction::Accept; 5]);
        assert_eq!(calculate(&h, 0.3), 1.0);
    }

    #[test]
    fn alternating_accept_reject_is_unstable() {
        let h = history(&[
            FeedbackAction::Accept,
            FeedbackAction::Reject,
            FeedbackAction::Accept,
            FeedbackAction::Reject,
        ]);
        // Variance 0.25 against threshold 0.3.
        let factor = calculate(&h, 0.3);
        assert!((factor - (1.0 - 0.25 / 0.3)).abs() < 1e-9);
    }

    #[test]
    fn variance_is_capped_at_the_threshold() {
        // Extreme volatility with a tiny threshold bottoms out at 0.
        let h = history(&[
            FeedbackAction::Accept,
            FeedbackAction::Reject,
            FeedbackAction::Accept,
            FeedbackAction::Reject,
        ]);
        assert_eq!(calculate(&h, 0.1), 0.0);
    }
}
