//! The three raw correlation metrics. All pure; timestamps arrive already
//! filtered to the analysis window.

use chrono::{DateTime, Duration, Utc};

use muse_core::models::PatternContext;

/// Fraction of matching context keys between two patterns, with the key
/// union as denominator. Symmetric; two empty contexts share nothing and
/// score 0.
pub fn context_similarity(a: &PatternContext, b: &PatternContext) -> f64 {
    let a_entries = a.entries();
    let b_entries = b.entries();

    let mut union: Vec<&str> = a_entries.iter().map(|(k, _)| *k).collect();
    for (k, _) in &b_entries {
        if !union.contains(k) {
            union.push(k);
        }
    }
    if union.is_empty() {
        return 0.0;
    }

    let matching = a_entries
        .iter()
        .filter(|(k, v)| b_entries.iter().any(|(bk, bv)| bk == k && bv == v))
        .count();
    matching as f64 / union.len() as f64
}

/// Fraction of positive events landing within `window` of the other
/// pattern's positive events, relative to the larger total feedback count.
///
/// Takes the larger of the two directed match counts so clustered events on
/// one side don't read differently depending on argument order.
pub fn co_occurrence(
    a_positive: &[DateTime<Utc>],
    b_positive: &[DateTime<Utc>],
    a_total: usize,
    b_total: usize,
    window: Duration,
) -> f64 {
    let denominator = a_total.max(b_total);
    if denominator == 0 {
        return 0.0;
    }
    let matched_a = events_near(a_positive, b_positive, window);
    let matched_b = events_near(b_positive, a_positive, window);
    (matched_a.max(matched_b) as f64 / denominator as f64).min(1.0)
}

/// Fraction of A's positive events followed within `window` by a B positive
/// event, relative to A's positive count. Deliberately asymmetric: detects
/// "A then B", not "B then A".
pub fn timing_correlation(
    a_positive: &[DateTime<Utc>],
    b_positive: &[DateTime<Utc>],
    window: Duration,
) -> f64 {
    if a_positive.is_empty() {
        return 0.0;
    }
    let followed = a_positive
        .iter()
        .filter(|a| {
            b_positive
                .iter()
                .any(|b| *b > **a && *b - **a <= window)
        })
        .count();
    followed as f64 / a_positive.len() as f64
}

fn events_near(from: &[DateTime<Utc>], to: &[DateTime<Utc>], window: Duration) -> usize {
    from.iter()
        .filter(|f| to.iter().any(|t| (**f - *t).abs() <= window))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(framework: Option<&str>, theme: Option<&str>) -> PatternContext {
        PatternContext {
            framework: framework.map(String::from),
            theme: theme.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn context_similarity_is_symmetric() {
        let a = ctx(Some("react"), Some("dark"));
        let b = ctx(Some("react"), Some("light"));
        assert_eq!(context_similarity(&a, &b), context_similarity(&b, &a));
        assert_eq!(context_similarity(&a, &b), 0.5);
    }

    #[test]
    fn context_similarity_uses_the_key_union() {
        // a has framework+theme, b only framework: one match over two keys.
        let a = ctx(Some("react"), Some("dark"));
        let b = ctx(Some("react"), None);
        assert_eq!(context_similarity(&a, &b), 0.5);
    }

    #[test]
    fn empty_contexts_share_nothing() {
        assert_eq!(
            context_similarity(&PatternContext::default(), &PatternContext::default()),
            0.0
        );
    }

    #[test]
    fn co_occurrence_counts_events_inside_the_window() {
        let t0 = Utc::now();
        let a = vec![t0, t0 + Duration::hours(5)];
        let b = vec![t0 + Duration::minutes(30)];
        // One of A's two events sits within an hour of B's event; A has the
        // larger count.
        let score = co_occurrence(&a, &b, 2, 1, Duration::hours(1));
        assert_eq!(score, 0.5);
    }

    #[test]
    fn timing_correlation_is_asymmetric_by_design() {
        let t0 = Utc::now();
        let a = vec![t0];
        let b = vec![t0 + Duration::minutes(5)];
        let forward = timing_correlation(&a, &b, Duration::minutes(10));
        let backward = timing_correlation(&b, &a, Duration::minutes(10));
        assert_eq!(forward, 1.0);
        assert_eq!(backward, 0.0);
        assert_ne!(forward, backward);
    }

    #[test]
    fn timing_correlation_ignores_gaps_beyond_the_window() {
        let t0 = Utc::now();
        let a = vec![t0];
        let b = vec![t0 + Duration::minutes(25)];
        assert_eq!(timing_correlation(&a, &b, Duration::minutes(10)), 0.0);
    }
}
