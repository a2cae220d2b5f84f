//! Maintenance entry points, invoked by an external scheduler; the engine
//! never self-schedules. All are read-mostly batch jobs that tolerate a
//! slightly stale snapshot.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use muse_calibration::{CalibrationEngine, CalibrationSample};
use muse_core::config::CorrelationConfig;
use muse_core::errors::MuseResult;
use muse_core::models::{CalibrationReport, PreferenceProfile};
use muse_core::traits::{PatternQuery, PatternStore, RetentionCriteria};
use muse_correlation::{AnalysisResult, CorrelationAnalyzer};
use muse_learning::learn_preferences;

use crate::engine::SuggestionEngine;

/// Outcome of one decay sweep.
#[derive(Debug, Clone, Copy)]
pub struct DecaySweepReport {
    pub examined: usize,
    /// Patterns whose confidence was actually lowered.
    pub decayed: usize,
}

impl<S: PatternStore> SuggestionEngine<S> {
    /// Apply idle decay to every pattern in the project. Patterns seen
    /// within the idle window are untouched.
    pub fn run_decay_sweep(&self, project_id: &str) -> MuseResult<DecaySweepReport> {
        let now = self.clock.now();
        let patterns = self.all_patterns(project_id)?;
        let examined = patterns.len();
        let mut decayed = 0;
        for mut pattern in patterns {
            let current = pattern.metadata.confidence;
            let swept = self
                .confidence
                .decay(current, pattern.metadata.last_seen, now);
            if swept.value() < current.value() {
                pattern.metadata.confidence = swept;
                self.store.update_pattern(project_id, &pattern)?;
                decayed += 1;
            }
        }
        info!(project_id, examined, decayed, "decay sweep complete");
        Ok(DecaySweepReport { examined, decayed })
    }

    /// Pairwise correlation analysis over a trailing feedback window.
    pub fn run_correlation_analysis(
        &self,
        project_id: &str,
        window_days: i64,
    ) -> MuseResult<AnalysisResult> {
        let now = self.clock.now();
        let config = CorrelationConfig {
            window_days,
            ..self.config.correlation.clone()
        };
        let patterns = self.all_patterns(project_id)?;
        let feedback = self
            .store
            .feedback_since(project_id, now - Duration::days(window_days))?;
        Ok(CorrelationAnalyzer::new(config).analyze(&patterns, &feedback, now))
    }

    /// Rebuild the preference profile from the project's feedback history,
    /// optionally scoped to one user (matched against the feedback context's
    /// `user` key).
    pub fn run_preference_learning(
        &self,
        project_id: &str,
        user_id: Option<&str>,
    ) -> MuseResult<PreferenceProfile> {
        let patterns = self.all_patterns(project_id)?;
        let mut feedback = self
            .store
            .feedback_since(project_id, DateTime::<Utc>::MIN_UTC)?;
        if let Some(user) = user_id {
            feedback.retain(|f| f.context.get("user").map(String::as_str) == Some(user));
        }
        Ok(learn_preferences(&feedback, &patterns))
    }

    /// Audit predicted confidence against observed acceptance over a
    /// trailing window.
    pub fn run_calibration(
        &self,
        project_id: &str,
        window_days: i64,
    ) -> MuseResult<CalibrationReport> {
        let now = self.clock.now();
        let feedback = self
            .store
            .feedback_since(project_id, now - Duration::days(window_days))?;

        let mut samples: Vec<CalibrationSample> = Vec::new();
        let mut grouped: std::collections::BTreeMap<&str, (usize, usize)> =
            std::collections::BTreeMap::new();
        for fb in &feedback {
            let slot = grouped.entry(fb.pattern_id.as_str()).or_default();
            slot.0 += 1;
            if fb.action.is_positive() {
                slot.1 += 1;
            }
        }
        for (pattern_id, (total, positive)) in grouped {
            let Some(pattern) = self.store.get_pattern(project_id, pattern_id)? else {
                continue;
            };
            samples.push(CalibrationSample {
                pattern_id: pattern_id.to_string(),
                predicted: pattern.metadata.confidence.value(),
                actual: positive as f64 / total as f64,
                events: total,
            });
        }

        Ok(CalibrationEngine::new(self.config.calibration.clone()).calibrate(&samples))
    }

    /// Remove patterns that are both far below useful confidence and long
    /// unseen. Returns the number of rows removed.
    pub fn run_retention_cleanup(&self, project_id: &str) -> MuseResult<usize> {
        let now = self.clock.now();
        let criteria = RetentionCriteria {
            max_confidence: self.config.retention.max_confidence,
            older_than: now - Duration::days(self.config.retention.max_idle_days),
        };
        let removed = self.store.delete_patterns(project_id, &criteria)?;
        if removed > 0 {
            info!(project_id, removed, "retention cleanup complete");
        }
        Ok(removed)
    }

    fn all_patterns(&self, project_id: &str) -> MuseResult<Vec<muse_core::models::Pattern>> {
        self.store.query_patterns(
            project_id,
            &PatternQuery {
                limit: Some(usize::MAX),
                ..Default::default()
            },
        )
    }
}
