use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use muse_core::config::defaults::DEFAULT_QUERY_LIMIT;
use muse_core::errors::MuseResult;
use muse_core::models::{Confidence, Feedback, FeedbackAction, Pattern};
use muse_core::traits::{PatternQuery, PatternStore, RetentionCriteria};

/// Process-local store keyed by project. Entry-level locking gives the
/// atomic increment-and-set the contract requires for concurrent upserts
/// of the same pattern id.
#[derive(Default)]
pub struct MemoryPatternStore {
    /// Keyed by `project \x1f pattern_id`.
    patterns: DashMap<String, Pattern>,
    /// Append-only feedback log, keyed by project.
    feedback: DashMap<String, Vec<Feedback>>,
}

impl MemoryPatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(project_id: &str, pattern_id: &str) -> String {
        format!("{project_id}\u{1f}{pattern_id}")
    }

    fn project_prefix(project_id: &str) -> String {
        format!("{project_id}\u{1f}")
    }

    /// Number of patterns stored for a project.
    pub fn pattern_count(&self, project_id: &str) -> usize {
        let prefix = Self::project_prefix(project_id);
        self.patterns
            .iter()
            .filter(|e| e.key().starts_with(&prefix))
            .count()
    }
}

fn rank(a: &Pattern, b: &Pattern) -> Ordering {
    b.metadata
        .confidence
        .value()
        .partial_cmp(&a.metadata.confidence.value())
        .unwrap_or(Ordering::Equal)
        .then(b.metadata.frequency.cmp(&a.metadata.frequency))
}

impl PatternStore for MemoryPatternStore {
    fn upsert_pattern(&self, project_id: &str, pattern: &Pattern) -> MuseResult<Pattern> {
        let key = Self::key(project_id, &pattern.id);
        let entry = self
            .patterns
            .entry(key)
            .and_modify(|existing| {
                existing.metadata.frequency += 1;
                existing.metadata.last_seen = pattern.metadata.last_seen;
                // Repeat observation counts as an implicit manual apply.
                let nudged = existing.metadata.confidence.value()
                    + FeedbackAction::ManualApply.incremental_adjustment();
                existing.metadata.confidence = Confidence::new(nudged);
            })
            .or_insert_with(|| {
                let mut fresh = pattern.clone();
                fresh.metadata.frequency = fresh.metadata.frequency.max(1);
                fresh
            });
        debug!(
            project_id,
            pattern_id = %pattern.id,
            frequency = entry.metadata.frequency,
            "pattern upserted"
        );
        Ok(entry.value().clone())
    }

    fn get_pattern(&self, project_id: &str, id: &str) -> MuseResult<Option<Pattern>> {
        Ok(self
            .patterns
            .get(&Self::key(project_id, id))
            .map(|e| e.value().clone()))
    }

    fn update_pattern(&self, project_id: &str, pattern: &Pattern) -> MuseResult<()> {
        self.patterns
            .insert(Self::key(project_id, &pattern.id), pattern.clone());
        Ok(())
    }

    fn query_patterns(&self, project_id: &str, query: &PatternQuery) -> MuseResult<Vec<Pattern>> {
        let prefix = Self::project_prefix(project_id);
        let mut results: Vec<Pattern> = self
            .patterns
            .iter()
            .filter(|e| e.key().starts_with(&prefix))
            .map(|e| e.value().clone())
            .filter(|p| {
                if let Some(ct) = &query.component_type {
                    if &p.component_type != ct {
                        return false;
                    }
                }
                if let Some(min) = query.min_confidence {
                    if p.metadata.confidence.value() < min {
                        return false;
                    }
                }
                query
                    .context
                    .iter()
                    .all(|(k, v)| p.context.matches(k, v))
            })
            .collect();
        results.sort_by(rank);
        results.truncate(query.limit.unwrap_or(DEFAULT_QUERY_LIMIT));
        Ok(results)
    }

    fn delete_patterns(
        &self,
        project_id: &str,
        criteria: &RetentionCriteria,
    ) -> MuseResult<usize> {
        let prefix = Self::project_prefix(project_id);
        let before = self.patterns.len();
        self.patterns.retain(|key, p| {
            if !key.starts_with(&prefix) {
                return true;
            }
            let expired = p.metadata.confidence.value() < criteria.max_confidence
                && p.metadata.last_seen < criteria.older_than;
            !expired
        });
        let removed = before - self.patterns.len();
        if removed > 0 {
            debug!(project_id, removed, "retention cleanup removed patterns");
        }
        Ok(removed)
    }

    fn record_feedback(&self, project_id: &str, feedback: &Feedback) -> MuseResult<()> {
        self.feedback
            .entry(project_id.to_string())
            .or_default()
            .push(feedback.clone());
        Ok(())
    }

    fn feedback_for_pattern(
        &self,
        project_id: &str,
        pattern_id: &str,
    ) -> MuseResult<Vec<Feedback>> {
        let mut rows: Vec<Feedback> = self
            .feedback
            .get(project_id)
            .map(|log| {
                log.iter()
                    .filter(|f| f.pattern_id == pattern_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        rows.sort_by_key(|f| f.timestamp);
        Ok(rows)
    }

    fn feedback_since(
        &self,
        project_id: &str,
        cutoff: DateTime<Utc>,
    ) -> MuseResult<Vec<Feedback>> {
        let mut rows: Vec<Feedback> = self
            .feedback
            .get(project_id)
            .map(|log| {
                log.iter()
                    .filter(|f| f.timestamp >= cutoff)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        rows.sort_by_key(|f| f.timestamp);
        Ok(rows)
    }
}
