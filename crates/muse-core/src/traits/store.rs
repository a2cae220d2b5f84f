use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::errors::MuseResult;
use crate::models::{Feedback, Pattern};

/// Filters for a pattern query. Results are sorted by confidence descending,
/// then frequency descending, and truncated to `limit` (default 50).
#[derive(Debug, Clone, Default)]
pub struct PatternQuery {
    pub component_type: Option<String>,
    pub min_confidence: Option<f64>,
    /// Exact-match context key/value filters.
    pub context: BTreeMap<String, String>,
    pub limit: Option<usize>,
}

impl PatternQuery {
    pub fn for_component(component_type: impl Into<String>) -> Self {
        Self {
            component_type: Some(component_type.into()),
            ..Default::default()
        }
    }
}

/// Criteria for retention cleanup: rows matching BOTH conditions are removed.
#[derive(Debug, Clone, Copy)]
pub struct RetentionCriteria {
    /// Delete patterns strictly below this confidence.
    pub max_confidence: f64,
    /// Delete patterns last seen before this instant.
    pub older_than: DateTime<Utc>,
}

/// Persistence contract the engine reads and writes through.
///
/// The engine borrows the store, never owns its lifecycle, and requires:
/// upsert-by-id with atomic counters, filtered queries with sort and limit,
/// and bulk delete-by-criteria. Upserts for the same pattern id must be
/// serialized by the implementation (atomic increment-and-set) so concurrent
/// observations of one pattern never lose updates.
pub trait PatternStore: Send + Sync {
    /// Insert a new pattern, or fold a repeat observation into the existing
    /// row: frequency + 1, `last_seen` refreshed, confidence nudged by the
    /// implicit manual-apply delta. Returns the stored state.
    fn upsert_pattern(&self, project_id: &str, pattern: &Pattern) -> MuseResult<Pattern>;

    fn get_pattern(&self, project_id: &str, id: &str) -> MuseResult<Option<Pattern>>;

    /// Write back a pattern's metadata (confidence updates, decay sweeps).
    fn update_pattern(&self, project_id: &str, pattern: &Pattern) -> MuseResult<()>;

    fn query_patterns(&self, project_id: &str, query: &PatternQuery) -> MuseResult<Vec<Pattern>>;

    /// Bulk delete for retention cleanup. Returns the number of rows removed.
    fn delete_patterns(&self, project_id: &str, criteria: &RetentionCriteria)
        -> MuseResult<usize>;

    /// Append-only feedback log. Rows are immutable once written and are
    /// kept even when `pattern_id` matches nothing (audit trail).
    fn record_feedback(&self, project_id: &str, feedback: &Feedback) -> MuseResult<()>;

    fn feedback_for_pattern(
        &self,
        project_id: &str,
        pattern_id: &str,
    ) -> MuseResult<Vec<Feedback>>;

    /// All feedback in the project at or after `cutoff`, oldest first.
    fn feedback_since(
        &self,
        project_id: &str,
        cutoff: DateTime<Utc>,
    ) -> MuseResult<Vec<Feedback>>;
}
