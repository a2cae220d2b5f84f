use tracing::debug;

use muse_core::models::{Confidence, PreferenceProfile, Suggestion};

/// Preference score above which a bucket is called out as a strength.
const STRONG: f64 = 0.7;
/// Preference score below which a bucket is called out as a caution.
const WEAK: f64 = 0.3;

/// Rescale suggestion confidence by historical preference.
///
/// Each dimension multiplies by `0.5 + score * 0.5`, and only when that
/// bucket has actually been observed; an absent bucket applies no
/// multiplier at all. Results are clamped back to the
/// engine's score range. Markedly strong or weak preferences append a note
/// to the suggestion's reasoning.
pub fn adapt_suggestions(suggestions: &mut [Suggestion], profile: &PreferenceProfile) {
    if profile.is_empty() {
        return;
    }
    for suggestion in suggestions.iter_mut() {
        let mut adapted = suggestion.confidence.value();
        let mut notes: Vec<String> = Vec::new();

        if let Some(score) = profile.component_score(&suggestion.component_type) {
            adapted *= 0.5 + score * 0.5;
            if score > STRONG {
                notes.push(format!(
                    "changes to {} components are usually accepted",
                    suggestion.component_type
                ));
            } else if score < WEAK {
                notes.push(format!(
                    "changes to {} components are often rejected",
                    suggestion.component_type
                ));
            }
        }
        if let Some(score) = profile.enhancement_score(&suggestion.enhancement.kind) {
            adapted *= 0.5 + score * 0.5;
            if score > STRONG {
                notes.push(format!(
                    "{} enhancements have a strong track record",
                    suggestion.enhancement.kind
                ));
            } else if score < WEAK {
                notes.push(format!(
                    "{} enhancements are usually turned down",
                    suggestion.enhancement.kind
                ));
            }
        }

        let before = suggestion.confidence.value();
        suggestion.confidence = Confidence::floored(adapted);
        if !notes.is_empty() {
            suggestion.reasoning = format!("{}; {}", suggestion.reasoning, notes.join("; "));
        }
        debug!(
            pattern_id = %suggestion.pattern_id,
            before,
            after = suggestion.confidence.value(),
            "suggestion adapted to preferences"
        );
    }
}
