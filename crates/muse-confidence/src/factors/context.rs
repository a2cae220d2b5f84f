use muse_core::models::PatternContext;

use super::ContextFactors;

/// Baseline when nothing matches.
pub const BASELINE: f64 = 0.5;

/// Context factor: baseline plus a bonus per exact dimension match against
/// the caller's live context. Fully matched context saturates at 1.0.
pub fn calculate(pattern: &PatternContext, factors: &ContextFactors) -> f64 {
    let mut score = BASELINE;
    if dimension_matches(&pattern.framework, &factors.framework) {
        score += 0.15;
    }
    if dimension_matches(&pattern.brand_pack_id, &factors.brand_pack_id) {
        score += 0.15;
    }
    if dimension_matches(&pattern.theme, &factors.theme) {
        score += 0.10;
    }
    if dimension_matches(&pattern.file_type, &factors.file_type) {
        score += 0.10;
    }
    score.clamp(0.0, 1.0)
}

fn dimension_matches(pattern: &Option<String>, target: &Option<String>) -> bool {
    matches!((pattern, target), (Some(p), Some(t)) if p == t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn no_context_scores_baseline() {
        let factor = calculate(&PatternContext::default(), &ContextFactors::at(Utc::now()));
        assert_eq!(factor, BASELINE);
    }

    #[test]
    fn full_match_saturates() {
        let pattern = PatternContext {
            framework: Some("react".to_string()),
            theme: Some("dark".to_string()),
            brand_pack_id: Some("acme".to_string()),
            file_type: Some("tsx".to_string()),
            location: None,
        };
        let mut factors = ContextFactors::at(Utc::now());
        factors.framework = Some("react".to_string());
        factors.theme = Some("dark".to_string());
        factors.brand_pack_id = Some("acme".to_string());
        factors.file_type = Some("tsx".to_string());
        assert_eq!(calculate(&pattern, &factors), 1.0);
    }

    #[test]
    fn absent_dimensions_never_match() {
        // A pattern with no framework gets no bonus even if the caller has one.
        let mut factors = ContextFactors::at(Utc::now());
        factors.framework = Some("react".to_string());
        assert_eq!(calculate(&PatternContext::default(), &factors), BASELINE);
    }

    #[test]
    fn partial_match_adds_only_matching_bonuses() {
        let pattern = PatternContext {
            framework: Some("react".to_string()),
            theme: Some("light".to_string()),
            ..Default::default()
        };
        let mut factors = ContextFactors::at(Utc::now());
        factors.framework = Some("react".to_string());
        factors.theme = Some("dark".to_string());
        assert!((calculate(&pattern, &factors) - 0.65).abs() < 1e-9);
    }
}
