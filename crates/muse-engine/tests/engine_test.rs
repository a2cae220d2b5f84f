//! End-to-end tests over the full loop: observe → score → suggest →
//! feedback → maintenance, against the in-memory reference store.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use muse_core::clock::FixedClock;
use muse_core::Clock;
use muse_core::config::EngineConfig;
use muse_core::models::{
    Enhancement, Feedback, FeedbackAction, InteractionRecord, PatternContext, SuggestionAction,
};
use muse_core::traits::PatternStore;
use muse_engine::SuggestionEngine;
use muse_store::MemoryPatternStore;

fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
    ))
}

fn engine_with_clock(
    clock: Arc<FixedClock>,
) -> SuggestionEngine<MemoryPatternStore> {
    SuggestionEngine::with_clock(MemoryPatternStore::new(), EngineConfig::default(), clock)
}

fn interaction(component: &str, kind: &str, framework: Option<&str>) -> InteractionRecord {
    InteractionRecord {
        action: Some("apply".to_string()),
        component_type: Some(component.to_string()),
        enhancement: Some(Enhancement {
            kind: kind.to_string(),
            ..Default::default()
        }),
        context: PatternContext {
            framework: framework.map(String::from),
            ..Default::default()
        },
        timestamp: None,
    }
}

#[test]
fn observe_creates_then_strengthens_a_pattern() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock);

    let first = engine
        .observe_interaction("proj", &interaction("button", "spacing", Some("react")))
        .unwrap()
        .expect("pattern extracted");
    assert_eq!(first.metadata.frequency, 1);
    assert_eq!(first.metadata.confidence.value(), 0.5);

    let second = engine
        .observe_interaction("proj", &interaction("button", "spacing", Some("react")))
        .unwrap()
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.metadata.frequency, 2);
    assert!((second.metadata.confidence.value() - 0.65).abs() < 1e-9);
}

#[test]
fn noise_interactions_are_dropped_silently() {
    let engine = engine_with_clock(fixed_clock());
    let mut record = interaction("button", "spacing", None);
    record.action = None;
    assert!(engine.observe_interaction("proj", &record).unwrap().is_none());
    assert_eq!(engine.store().pattern_count("proj"), 0);
}

#[test]
fn feedback_updates_confidence_incrementally() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());
    let pattern = engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap()
        .unwrap();

    let fb = Feedback::new("proj", &pattern.id, FeedbackAction::Accept, clock.now());
    engine.record_feedback("proj", &fb).unwrap();

    let stored = engine.store().get_pattern("proj", &pattern.id).unwrap().unwrap();
    assert!((stored.metadata.confidence.value() - 0.6).abs() < 1e-9);

    let reject = Feedback::new("proj", &pattern.id, FeedbackAction::Reject, clock.now());
    engine.record_feedback("proj", &reject).unwrap();
    let stored = engine.store().get_pattern("proj", &pattern.id).unwrap().unwrap();
    assert!((stored.metadata.confidence.value() - 0.4).abs() < 1e-9);
}

#[test]
fn feedback_for_unknown_pattern_is_kept_but_changes_nothing() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());
    let fb = Feedback::new("proj", "ghost", FeedbackAction::Accept, clock.now());
    engine.record_feedback("proj", &fb).unwrap();

    let rows = engine.store().feedback_for_pattern("proj", "ghost").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(engine.store().pattern_count("proj"), 0);
}

#[test]
fn suggestions_are_ranked_explained_and_tagged() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());

    // Strong pattern: observed often, consistently accepted.
    let strong = engine
        .observe_interaction("proj", &interaction("button", "spacing", Some("react")))
        .unwrap()
        .unwrap();
    for _ in 0..5 {
        engine
            .observe_interaction("proj", &interaction("button", "spacing", Some("react")))
            .unwrap();
        let fb = Feedback::new("proj", &strong.id, FeedbackAction::Accept, clock.now());
        engine.record_feedback("proj", &fb).unwrap();
    }
    // Weak pattern: seen once, rejected.
    let weak = engine
        .observe_interaction("proj", &interaction("button", "shadow", Some("react")))
        .unwrap()
        .unwrap();
    let fb = Feedback::new("proj", &weak.id, FeedbackAction::Reject, clock.now());
    engine.record_feedback("proj", &fb).unwrap();

    let target = PatternContext {
        framework: Some("react".to_string()),
        ..Default::default()
    };
    let suggestions = engine.get_suggestions("proj", "button", &target).unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].pattern_id, strong.id);
    assert!(suggestions[0].confidence.value() > suggestions[1].confidence.value());
    assert!(!suggestions[0].reasoning.is_empty());
    // Every tier is consistent with its score.
    for s in &suggestions {
        match s.action {
            SuggestionAction::AutoApply => assert!(s.confidence.value() >= 0.9),
            SuggestionAction::Suggest => assert!(s.confidence.value() >= 0.7),
            SuggestionAction::Advisory => assert!(s.confidence.value() < 0.7),
        }
    }
}

#[test]
fn strong_history_with_matching_context_auto_applies() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());

    let mut record = interaction("button", "spacing", Some("react"));
    record.context.theme = Some("dark".to_string());
    record.context.brand_pack_id = Some("acme".to_string());
    record.context.file_type = Some("tsx".to_string());
    if let Some(e) = record.enhancement.as_mut() {
        e.tokens = vec!["space.md".to_string()];
    }

    let mut pattern_id = String::new();
    for _ in 0..10 {
        pattern_id = engine
            .observe_interaction("proj", &record)
            .unwrap()
            .unwrap()
            .id;
    }
    for _ in 0..10 {
        let fb = Feedback::new("proj", &pattern_id, FeedbackAction::Accept, clock.now());
        engine.record_feedback("proj", &fb).unwrap();
    }

    let target = PatternContext {
        framework: Some("react".to_string()),
        theme: Some("dark".to_string()),
        brand_pack_id: Some("acme".to_string()),
        file_type: Some("tsx".to_string()),
        location: None,
    };
    let suggestions = engine.get_suggestions("proj", "button", &target).unwrap();
    assert_eq!(suggestions[0].action, SuggestionAction::AutoApply);
    assert!(suggestions[0].confidence.value() >= 0.9);
}

#[test]
fn preference_history_reorders_suggestions() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());

    let liked = engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap()
        .unwrap();
    let disliked = engine
        .observe_interaction("proj", &interaction("button", "shadow", None))
        .unwrap()
        .unwrap();
    for _ in 0..4 {
        engine
            .record_feedback(
                "proj",
                &Feedback::new("proj", &liked.id, FeedbackAction::Accept, clock.now()),
            )
            .unwrap();
        engine
            .record_feedback(
                "proj",
                &Feedback::new("proj", &disliked.id, FeedbackAction::Reject, clock.now()),
            )
            .unwrap();
    }

    let suggestions = engine
        .get_suggestions("proj", "button", &PatternContext::default())
        .unwrap();
    assert_eq!(suggestions[0].pattern_id, liked.id);
    assert!(suggestions[0].reasoning.contains("track record"));

    let profile = engine.run_preference_learning("proj", None).unwrap();
    assert_eq!(profile.enhancement_score("spacing").unwrap(), 1.0);
    assert_eq!(profile.enhancement_score("shadow").unwrap(), 0.0);
}

#[test]
fn correlated_neighbors_are_attached() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());

    let a = engine
        .observe_interaction("proj", &interaction("button", "spacing", Some("react")))
        .unwrap()
        .unwrap();
    let b = engine
        .observe_interaction("proj", &interaction("card", "spacing", Some("react")))
        .unwrap()
        .unwrap();
    // Interleaved acceptances minutes apart: co-occurring and sequential.
    for i in 0..6i64 {
        let at = clock.now() - Duration::hours(2) + Duration::minutes(i * 20);
        engine
            .record_feedback("proj", &Feedback::new("proj", &a.id, FeedbackAction::Accept, at))
            .unwrap();
        engine
            .record_feedback(
                "proj",
                &Feedback::new("proj", &b.id, FeedbackAction::Accept, at + Duration::minutes(5)),
            )
            .unwrap();
    }

    let suggestions = engine
        .get_suggestions("proj", "button", &PatternContext::default())
        .unwrap();
    assert_eq!(suggestions.len(), 1);
    let related = &suggestions[0].related;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].pattern_id, b.id);
    assert!(related[0].score >= 0.6);

    let analysis = engine.run_correlation_analysis("proj", 30).unwrap();
    assert_eq!(analysis.correlations.len(), 1);
    assert!(!analysis.truncated);
}

#[test]
fn decay_sweep_only_touches_idle_patterns() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());
    let pattern = engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap()
        .unwrap();

    // Three days idle: untouched.
    clock.advance(Duration::days(3));
    let report = engine.run_decay_sweep("proj").unwrap();
    assert_eq!(report.examined, 1);
    assert_eq!(report.decayed, 0);

    // Three weeks idle: decayed by rate^3.
    clock.advance(Duration::days(18));
    let report = engine.run_decay_sweep("proj").unwrap();
    assert_eq!(report.decayed, 1);
    let stored = engine.store().get_pattern("proj", &pattern.id).unwrap().unwrap();
    assert!((stored.metadata.confidence.value() - 0.5 * 0.95f64.powi(3)).abs() < 1e-9);
}

#[test]
fn retention_cleanup_removes_abandoned_patterns() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());
    let pattern = engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap()
        .unwrap();
    // Drive confidence to the bottom.
    for _ in 0..3 {
        engine
            .record_feedback(
                "proj",
                &Feedback::new("proj", &pattern.id, FeedbackAction::Reject, clock.now()),
            )
            .unwrap();
    }

    // Not old enough yet.
    clock.advance(Duration::days(30));
    assert_eq!(engine.run_retention_cleanup("proj").unwrap(), 0);

    clock.advance(Duration::days(61));
    assert_eq!(engine.run_retention_cleanup("proj").unwrap(), 1);
    assert_eq!(engine.store().pattern_count("proj"), 0);
}

#[test]
fn calibration_audits_the_feedback_window() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());
    let pattern = engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap()
        .unwrap();
    for _ in 0..4 {
        engine
            .record_feedback(
                "proj",
                &Feedback::new("proj", &pattern.id, FeedbackAction::Accept, clock.now()),
            )
            .unwrap();
    }

    let report = engine.run_calibration("proj", 30).unwrap();
    assert_eq!(report.sample_count, 1);
    assert_eq!(report.bins.len(), 10);

    // An empty window produces the empty report, not an error.
    let empty = engine.run_calibration("empty-project", 30).unwrap();
    assert_eq!(empty.sample_count, 0);
}

#[test]
fn stats_summarize_the_project() {
    let clock = fixed_clock();
    let engine = engine_with_clock(clock.clone());
    engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap();
    engine
        .observe_interaction("proj", &interaction("card", "shadow", None))
        .unwrap();

    clock.advance(Duration::days(10));
    engine
        .observe_interaction("proj", &interaction("nav", "spacing", None))
        .unwrap();

    let stats = engine.stats("proj").unwrap();
    assert_eq!(stats.patterns, 3);
    assert!(stats.average_confidence > 0.0);
    assert_eq!(stats.stale_patterns, 2);
}

#[test]
fn result_count_is_bounded_by_config() {
    let clock = fixed_clock();
    let mut config = EngineConfig::default();
    config.max_suggestions = 1;
    let engine =
        SuggestionEngine::with_clock(MemoryPatternStore::new(), config, clock);

    engine
        .observe_interaction("proj", &interaction("button", "spacing", None))
        .unwrap();
    engine
        .observe_interaction("proj", &interaction("button", "shadow", None))
        .unwrap();

    let suggestions = engine
        .get_suggestions("proj", "button", &PatternContext::default())
        .unwrap();
    assert_eq!(suggestions.len(), 1);
}
