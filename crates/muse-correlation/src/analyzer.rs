use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use tracing::{debug, warn};

use muse_core::config::CorrelationConfig;
use muse_core::models::{Correlation, CorrelationDetails, CorrelationKind, Feedback, Pattern};

/// Output of one analysis run. `truncated` marks a partial result where the
/// pair budget cut the scan short.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Surviving correlations, strongest first.
    pub correlations: Vec<Correlation>,
    /// Pattern pairs actually scored.
    pub scanned_pairs: usize,
    pub truncated: bool,
}

/// Pairwise correlation analyzer. Batch-oriented and read-only: it may run
/// against a slightly stale snapshot without correctness risk.
pub struct CorrelationAnalyzer {
    config: CorrelationConfig,
}

struct PatternEvents<'a> {
    pattern: &'a Pattern,
    /// Timestamps of positive feedback, ascending.
    positive: Vec<DateTime<Utc>>,
    /// Total feedback events inside the window.
    total: usize,
}

impl CorrelationAnalyzer {
    pub fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Correlate every eligible pattern pair from a feedback snapshot.
    ///
    /// Eligibility requires `minimum_samples` feedback events inside the
    /// trailing window; that filter plus the pair budget keeps the O(n²)
    /// scan tractable.
    pub fn analyze(
        &self,
        patterns: &[Pattern],
        feedback: &[Feedback],
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        let cutoff = now - Duration::days(self.config.window_days);
        let mut events_by_pattern: HashMap<&str, (Vec<DateTime<Utc>>, usize)> = HashMap::new();
        for fb in feedback {
            if fb.timestamp < cutoff {
                continue;
            }
            let slot = events_by_pattern.entry(fb.pattern_id.as_str()).or_default();
            slot.1 += 1;
            if fb.action.is_positive() {
                slot.0.push(fb.timestamp);
            }
        }

        let mut eligible: Vec<PatternEvents<'_>> = patterns
            .iter()
            .filter_map(|pattern| {
                let (mut positive, total) =
                    events_by_pattern.get(pattern.id.as_str()).cloned()?;
                if total < self.config.minimum_samples {
                    return None;
                }
                positive.sort_unstable();
                Some(PatternEvents {
                    pattern,
                    positive,
                    total,
                })
            })
            .collect();
        // Deterministic pair order regardless of input ordering.
        eligible.sort_by(|a, b| a.pattern.id.cmp(&b.pattern.id));

        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for i in 0..eligible.len() {
            for j in (i + 1)..eligible.len() {
                pairs.push((i, j));
            }
        }
        let truncated = pairs.len() > self.config.max_pairs;
        if truncated {
            warn!(
                total = pairs.len(),
                budget = self.config.max_pairs,
                "pair budget exceeded; returning partial correlation results"
            );
            pairs.truncate(self.config.max_pairs);
        }
        let scanned_pairs = pairs.len();

        let co_window = Duration::seconds(self.config.co_occurrence_window_secs);
        let seq_window = Duration::seconds(self.config.sequence_window_secs);
        let mut correlations: Vec<Correlation> = pairs
            .into_par_iter()
            .filter_map(|(i, j)| {
                let corr = self.correlate(&eligible[i], &eligible[j], co_window, seq_window);
                (corr.score >= self.config.threshold).then_some(corr)
            })
            .collect();

        correlations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.pattern_a.cmp(&b.pattern_a))
        });
        debug!(
            eligible = eligible.len(),
            scanned_pairs,
            kept = correlations.len(),
            "correlation analysis complete"
        );

        AnalysisResult {
            correlations,
            scanned_pairs,
            truncated,
        }
    }

    fn correlate(
        &self,
        a: &PatternEvents<'_>,
        b: &PatternEvents<'_>,
        co_window: Duration,
        seq_window: Duration,
    ) -> Correlation {
        let context_similarity =
            crate::metrics::context_similarity(&a.pattern.context, &b.pattern.context);
        let co_occurrence = crate::metrics::co_occurrence(
            &a.positive,
            &b.positive,
            a.total,
            b.total,
            co_window,
        );
        let timing_correlation =
            crate::metrics::timing_correlation(&a.positive, &b.positive, seq_window);

        let score =
            0.4 * context_similarity + 0.4 * co_occurrence + 0.2 * timing_correlation;
        let details = CorrelationDetails {
            context_similarity,
            co_occurrence,
            timing_correlation,
        };

        Correlation {
            pattern_a: a.pattern.id.clone(),
            pattern_b: b.pattern.id.clone(),
            score,
            details,
            kind: classify(score, context_similarity),
        }
    }
}

/// Classification ladder: contextual beats sequential beats complementary.
fn classify(score: f64, context_similarity: f64) -> CorrelationKind {
    if context_similarity > 0.8 {
        CorrelationKind::Contextual
    } else if score > 0.8 {
        CorrelationKind::Sequential
    } else if score > 0.6 {
        CorrelationKind::Complementary
    } else {
        CorrelationKind::Weak
    }
}
