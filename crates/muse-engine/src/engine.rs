use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use muse_confidence::{ConfidenceEngine, ContextFactors};
use muse_core::clock::{Clock, SystemClock};
use muse_core::config::EngineConfig;
use muse_core::errors::MuseResult;
use muse_core::models::{
    Correlation, Feedback, InteractionRecord, Pattern, PatternContext, RelatedPattern, Suggestion,
};
use muse_core::traits::{PatternQuery, PatternStore};
use muse_correlation::CorrelationAnalyzer;
use muse_learning::{adapt_suggestions, extract_pattern, learn_preferences};

/// Aggregate view of a project's learned state.
#[derive(Debug, Clone, Copy)]
pub struct EngineStats {
    pub patterns: usize,
    pub average_confidence: f64,
    /// Patterns idle past the decay window.
    pub stale_patterns: usize,
}

/// Request-scoped orchestrator over a shared store. Stateless between calls;
/// the store is the only shared mutable state, and it borrows that.
pub struct SuggestionEngine<S: PatternStore> {
    pub(crate) store: S,
    pub(crate) config: EngineConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) confidence: ConfidenceEngine,
}

impl<S: PatternStore> SuggestionEngine<S> {
    /// Create an engine with default configuration and the system clock.
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Full constructor; tests inject a frozen clock here.
    pub fn with_clock(store: S, config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let confidence = ConfidenceEngine::new(config.confidence.clone());
        Self {
            store,
            config,
            clock,
            confidence,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fold one upstream interaction into the pattern store.
    ///
    /// Returns the stored pattern, or `None` when the record was noise
    /// (missing action or component type); noise never halts the pipeline.
    pub fn observe_interaction(
        &self,
        project_id: &str,
        record: &InteractionRecord,
    ) -> MuseResult<Option<Pattern>> {
        let Some(pattern) = extract_pattern(record, self.clock.now()) else {
            return Ok(None);
        };
        let stored = self.store.upsert_pattern(project_id, &pattern)?;
        info!(
            project_id,
            pattern_id = %stored.id,
            component = %stored.component_type,
            frequency = stored.metadata.frequency,
            "interaction observed"
        );
        Ok(Some(stored))
    }

    /// Record a feedback event and apply the low-latency incremental
    /// confidence update to its pattern.
    ///
    /// Feedback for an unknown pattern is still recorded (the audit trail
    /// is preserved) but produces no confidence update.
    pub fn record_feedback(&self, project_id: &str, feedback: &Feedback) -> MuseResult<()> {
        self.store.record_feedback(project_id, feedback)?;
        match self.store.get_pattern(project_id, &feedback.pattern_id)? {
            Some(mut pattern) => {
                let updated = self
                    .confidence
                    .apply_feedback(pattern.metadata.confidence, feedback.action);
                pattern.metadata.confidence = updated;
                self.store.update_pattern(project_id, &pattern)?;
                info!(
                    project_id,
                    pattern_id = %feedback.pattern_id,
                    action = ?feedback.action,
                    confidence = updated.value(),
                    "feedback applied"
                );
            }
            None => {
                warn!(
                    project_id,
                    pattern_id = %feedback.pattern_id,
                    "feedback references unknown pattern; recorded without confidence update"
                );
            }
        }
        Ok(())
    }

    /// Ranked, explained, action-tagged suggestions for a component in a
    /// given target context. Sorted by final confidence descending, bounded
    /// by `max_suggestions`.
    pub fn get_suggestions(
        &self,
        project_id: &str,
        component_type: &str,
        target: &PatternContext,
    ) -> MuseResult<Vec<Suggestion>> {
        let now = self.clock.now();

        let mut query = PatternQuery::for_component(component_type);
        if self.config.confidence.advisory_threshold > 0.0 {
            query.min_confidence = Some(self.config.confidence.advisory_threshold);
        }
        query.limit = Some(self.config.max_suggestions);
        let patterns = self.store.query_patterns(project_id, &query)?;
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        // One correlation pass over the project feeds both the correlation
        // factor and the attached neighbors.
        let all_patterns = self.store.query_patterns(
            project_id,
            &PatternQuery {
                limit: Some(usize::MAX),
                ..Default::default()
            },
        )?;
        let correlation_cutoff = now - Duration::days(self.config.correlation.window_days);
        let recent_feedback = self.store.feedback_since(project_id, correlation_cutoff)?;
        let analysis = CorrelationAnalyzer::new(self.config.correlation.clone()).analyze(
            &all_patterns,
            &recent_feedback,
            now,
        );
        let neighbors = neighbor_index(&analysis.correlations, self.config.related_limit);

        let mut suggestions = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let history = self.store.feedback_for_pattern(project_id, &pattern.id)?;
            let related = neighbors.get(pattern.id.as_str()).cloned().unwrap_or_default();

            let mut factors = ContextFactors::at(now);
            factors.framework = target.framework.clone();
            factors.theme = target.theme.clone();
            factors.brand_pack_id = target.brand_pack_id.clone();
            factors.file_type = target.file_type.clone();
            factors.correlation_score = related.first().map(|r: &RelatedPattern| r.score);

            let report = self.confidence.calculate(&pattern, &history, &factors);
            suggestions.push(Suggestion {
                pattern_id: pattern.id.clone(),
                component_type: pattern.component_type.clone(),
                enhancement: pattern.enhancement.clone(),
                confidence: report.score,
                action: report.action,
                reasoning: report.explanation,
                related,
                frequency: pattern.metadata.frequency,
                last_seen: pattern.metadata.last_seen,
            });
        }

        // Preference adaptation over the project's full feedback history.
        let all_feedback = self
            .store
            .feedback_since(project_id, chrono::DateTime::<chrono::Utc>::MIN_UTC)?;
        let profile = learn_preferences(&all_feedback, &all_patterns);
        if !profile.is_empty() {
            adapt_suggestions(&mut suggestions, &profile);
        }

        // Re-tier after adaptation, then rank.
        for suggestion in &mut suggestions {
            suggestion.action = self.confidence.classify(suggestion.confidence);
        }
        suggestions.sort_by(|a, b| {
            b.confidence
                .value()
                .partial_cmp(&a.confidence.value())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.frequency.cmp(&a.frequency))
                .then_with(|| a.pattern_id.cmp(&b.pattern_id))
        });
        suggestions.truncate(self.config.max_suggestions);
        Ok(suggestions)
    }

    /// Aggregate stats for dashboards and health checks.
    pub fn stats(&self, project_id: &str) -> MuseResult<EngineStats> {
        let patterns = self.store.query_patterns(
            project_id,
            &PatternQuery {
                limit: Some(usize::MAX),
                ..Default::default()
            },
        )?;
        let now = self.clock.now();
        let count = patterns.len();
        let average_confidence = if count == 0 {
            0.0
        } else {
            patterns
                .iter()
                .map(|p| p.metadata.confidence.value())
                .sum::<f64>()
                / count as f64
        };
        let stale_patterns = patterns
            .iter()
            .filter(|p| (now - p.metadata.last_seen).num_days() > self.config.confidence.decay_idle_days)
            .count();
        Ok(EngineStats {
            patterns: count,
            average_confidence,
            stale_patterns,
        })
    }
}

/// Index correlations by participant, keeping the strongest `limit`
/// neighbors per pattern.
fn neighbor_index(
    correlations: &[Correlation],
    limit: usize,
) -> HashMap<&str, Vec<RelatedPattern>> {
    let mut index: HashMap<&str, Vec<RelatedPattern>> = HashMap::new();
    for corr in correlations {
        index
            .entry(corr.pattern_a.as_str())
            .or_default()
            .push(RelatedPattern {
                pattern_id: corr.pattern_b.clone(),
                score: corr.score,
                kind: corr.kind,
            });
        index
            .entry(corr.pattern_b.as_str())
            .or_default()
            .push(RelatedPattern {
                pattern_id: corr.pattern_a.clone(),
                score: corr.score,
                kind: corr.kind,
            });
    }
    for related in index.values_mut() {
        related.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        related.truncate(limit);
    }
    index
}
