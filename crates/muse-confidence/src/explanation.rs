//! Canned natural-language explanations for the top contributing factors.

use muse_core::config::FactorWeights;

use crate::formula::{ConfidenceBreakdown, Factor};

/// Factors scoring at or above this read as strengths.
const HIGH: f64 = 0.7;
/// Factors scoring at or above this read as neutral observations.
const MEDIUM: f64 = 0.4;

/// How many factors the explanation mentions.
const TOP_FACTORS: usize = 3;

/// Describe the top factors by weighted contribution, strongest first.
pub fn explain(breakdown: &ConfidenceBreakdown, weights: &FactorWeights) -> String {
    let mut ranked: Vec<(Factor, f64, f64)> = breakdown
        .factor_values()
        .iter()
        .map(|&(factor, score)| (factor, score, score * weight_of(factor, weights)))
        .collect();
    ranked.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    let phrases: Vec<&'static str> = ranked
        .iter()
        .take(TOP_FACTORS)
        .map(|&(factor, score, _)| phrase(factor, score))
        .collect();
    phrases.join("; ")
}

fn weight_of(factor: Factor, weights: &FactorWeights) -> f64 {
    match factor {
        Factor::Frequency => weights.frequency,
        Factor::Recency => weights.recency,
        Factor::Feedback => weights.feedback,
        Factor::Stability => weights.stability,
        Factor::Context => weights.context,
        Factor::Correlation => weights.correlation,
    }
}

fn phrase(factor: Factor, score: f64) -> &'static str {
    let level = if score >= HIGH {
        Level::High
    } else if score >= MEDIUM {
        Level::Medium
    } else {
        Level::Low
    };
    match (factor, level) {
        (Factor::Frequency, Level::High) => "applied many times across the project",
        (Factor::Frequency, Level::Medium) => "applied a handful of times",
        (Factor::Frequency, Level::Low) => "rarely observed so far",
        (Factor::Recency, Level::High) => "seen very recently",
        (Factor::Recency, Level::Medium) => "seen within recent weeks",
        (Factor::Recency, Level::Low) => "not seen for a long time",
        (Factor::Feedback, Level::High) => "feedback has been strongly positive",
        (Factor::Feedback, Level::Medium) => "feedback has been mixed",
        (Factor::Feedback, Level::Low) => "feedback has leaned negative",
        (Factor::Stability, Level::High) => "reactions are consistent",
        (Factor::Stability, Level::Medium) => "reactions vary somewhat",
        (Factor::Stability, Level::Low) => "reactions are volatile",
        (Factor::Context, Level::High) => "context closely matches the current target",
        (Factor::Context, Level::Medium) => "context partially matches the current target",
        (Factor::Context, Level::Low) => "little overlap with the current context",
        (Factor::Correlation, Level::High) => "strongly correlated with other accepted patterns",
        (Factor::Correlation, Level::Medium) => "some correlation with other patterns",
        (Factor::Correlation, Level::Low) => "no supporting correlation signal",
    }
}

#[derive(Clone, Copy)]
enum Level {
    High,
    Medium,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(feedback: f64, context: f64) -> ConfidenceBreakdown {
        ConfidenceBreakdown {
            frequency: 0.3,
            recency: 1.0,
            feedback,
            stability: 0.5,
            context,
            correlation: 0.5,
            weighted_score: 0.5,
            adjustments: 0.0,
            final_score: 0.5,
        }
    }

    #[test]
    fn mentions_three_factors_strongest_first() {
        let text = explain(&breakdown(1.0, 0.5), &FactorWeights::default());
        let parts: Vec<&str> = text.split("; ").collect();
        assert_eq!(parts.len(), 3);
        // Feedback carries the largest weight and a perfect score.
        assert_eq!(parts[0], "feedback has been strongly positive");
    }

    #[test]
    fn level_wording_tracks_the_score() {
        let negative = explain(&breakdown(0.1, 0.5), &FactorWeights::default());
        assert!(negative.contains("seen very recently"));
        assert!(!negative.contains("strongly positive"));
    }
}
