use chrono::{DateTime, Utc};
use tracing::debug;

use muse_core::models::{InteractionRecord, Pattern, PatternMetadata};

/// Turn a raw interaction record into a canonical pattern.
///
/// Returns `None` when the record lacks an action or a component type:
/// there is no pattern without a classifiable subject, and upstream noise
/// must not halt the pipeline. Pure; persistence happens in the store.
pub fn extract_pattern(record: &InteractionRecord, now: DateTime<Utc>) -> Option<Pattern> {
    let action = record.action.as_deref().map(str::trim).filter(|a| !a.is_empty());
    let component_type = record
        .component_type
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let (Some(_), Some(component_type)) = (action, component_type) else {
        debug!("interaction record missing action or component type; discarded");
        return None;
    };

    let enhancement = record.enhancement.clone().unwrap_or_default();
    let context = record.context.clone();
    let observed_at = record.timestamp.unwrap_or(now);

    Some(Pattern {
        id: Pattern::compute_id(component_type, &enhancement, &context),
        component_type: component_type.to_string(),
        enhancement,
        context,
        metadata: PatternMetadata::first_seen(observed_at),
    })
}
