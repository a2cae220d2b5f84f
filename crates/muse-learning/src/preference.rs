use std::collections::HashMap;

use tracing::debug;

use muse_core::models::{Feedback, FeedbackAction, Pattern, PreferenceProfile};

/// Aggregate feedback into per-component-type and per-enhancement-kind
/// acceptance tallies.
///
/// Accept and manual apply count as positive, reject as negative; modify and
/// ignore inform stability, not preference, and are skipped. Feedback whose
/// pattern no longer exists is skipped too; there is nothing to bucket it
/// under.
pub fn learn_preferences(feedback: &[Feedback], patterns: &[Pattern]) -> PreferenceProfile {
    let by_id: HashMap<&str, &Pattern> =
        patterns.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut profile = PreferenceProfile::default();
    for fb in feedback {
        let positive = match fb.action {
            FeedbackAction::Accept | FeedbackAction::ManualApply => true,
            FeedbackAction::Reject => false,
            FeedbackAction::Modify | FeedbackAction::Ignore => continue,
        };
        let Some(pattern) = by_id.get(fb.pattern_id.as_str()) else {
            continue;
        };
        profile
            .components
            .entry(pattern.component_type.clone())
            .or_default()
            .record(positive);
        profile
            .enhancements
            .entry(pattern.enhancement.kind.clone())
            .or_default()
            .record(positive);
    }

    debug!(
        components = profile.components.len(),
        enhancements = profile.enhancements.len(),
        "preference profile learned"
    );
    profile
}
