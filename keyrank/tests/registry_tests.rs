//! Integration tests for the keyword registry
//!
//! These tests drive the registry through its public API with a pinned clock
//! and check the observable contract: uniqueness by text, overwrite
//! semantics, extraction order, and error handling for unsupported
//! inflection points.

use keyrank::prelude::*;
use std::sync::Arc;

const NOW: i64 = 28_765_432;

fn registry_at(minute: i64) -> (KeywordRegistry<Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(minute));
    let registry = KeywordRegistry::with_clock(ScoringConfig::default(), Arc::clone(&clock));
    (registry, clock)
}

#[test]
fn test_new_keyword_grows_registry_by_one() {
    let (mut registry, _) = registry_at(NOW);

    for (i, text) in ["alpha", "beta", "gamma", "delta"].iter().enumerate() {
        let before = registry.len();
        registry.insert_now(*text, i as i32 + 1);
        assert_eq!(registry.len(), before + 1);
    }
}

#[test]
fn test_duplicate_handling() {
    let (mut registry, _) = registry_at(NOW);
    registry.insert("rust", 2, NOW - 5, false);

    registry.insert("rust", 7, NOW - 100, false);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("rust").map(|e| (e.rank, e.arrival_minute)), Some((2, NOW - 5)));

    registry.insert("rust", 7, NOW - 100, true);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("rust").map(|e| (e.rank, e.arrival_minute)), Some((7, NOW - 100)));
}

#[test]
fn test_rank_one_beats_rank_eight() {
    let (mut registry, _) = registry_at(NOW);
    registry.insert_now("A", 1);
    registry.insert_now("B", 8);

    assert_eq!(registry.extract_best_with(30).unwrap(), Some("A".to_string()));
    let remaining: Vec<&str> = registry.entries().map(|e| e.text.as_str()).collect();
    assert_eq!(remaining, vec!["B"]);
}

#[test]
fn test_stale_only_keyword_is_still_selected() {
    let (mut registry, _) = registry_at(NOW);
    registry.insert_at("X", 1, NOW - 200);

    assert_eq!(registry.extract_best_with(30).unwrap(), Some("X".to_string()));
    assert!(registry.is_empty());
}

#[test]
fn test_unsupported_inflection_point_is_rejected() {
    let (mut registry, _) = registry_at(NOW);
    registry.insert_now("A", 1);
    registry.insert_now("B", 2);

    let err = registry.extract_best_with(999).unwrap_err();
    assert_eq!(err, ScoringError::InvalidInflectionPoint(999));
    assert_eq!(registry.len(), 2);

    // Every table value works
    for point in InflectionPoint::all() {
        assert!(registry.ranking(point.minutes()).is_ok());
    }
}

#[test]
fn test_clear_then_extract_returns_nothing() {
    let (mut registry, _) = registry_at(NOW);
    registry.insert_now("A", 1);
    registry.insert_at("B", 4, NOW - 40);
    registry.clear();

    for point in InflectionPoint::all() {
        assert_eq!(registry.extract_best_with(point.minutes()).unwrap(), None);
    }
}

#[test]
fn test_feed_replay_over_time() {
    let (mut registry, clock) = registry_at(NOW);

    registry.insert_now("morning", 1);
    clock.advance(10);
    registry.insert_now("update", 3);
    clock.advance(20);

    // "morning" is at its 30-minute peak, "update" is still climbing
    assert_eq!(registry.extract_best().unwrap(), Some("morning".to_string()));

    clock.advance(200);
    registry.insert_now("evening", 5);
    clock.advance(30);

    // "update" has gone stale; "evening" now peaks
    assert_eq!(registry.extract_best().unwrap(), Some("evening".to_string()));
    assert_eq!(registry.extract_best().unwrap(), Some("update".to_string()));
    assert_eq!(registry.extract_best().unwrap(), None);
}

#[test]
fn test_inflection_point_changes_winner() {
    let (mut registry, _) = registry_at(NOW);
    registry.insert_at("ten-minutes", 5, NOW - 10);
    registry.insert_at("hour", 5, NOW - 60);

    let short = registry.ranking(10).unwrap();
    assert_eq!(short[0].entry.text, "ten-minutes");

    let long = registry.ranking(60).unwrap();
    assert_eq!(long[0].entry.text, "hour");

    assert_eq!(registry.extract_best_with(60).unwrap(), Some("hour".to_string()));
}

#[test]
fn test_registry_can_be_shared_behind_a_mutex() {
    use std::sync::Mutex;
    use std::thread;

    let (registry, _) = registry_at(NOW);
    let shared = Arc::new(Mutex::new(registry));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut registry = shared.lock().unwrap();
                registry.insert_now(format!("keyword-{i}"), i + 1);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut registry = shared.lock().unwrap();
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.extract_best().unwrap(), Some("keyword-0".to_string()));
}

#[test]
fn test_init_returns_empty_registry() {
    let config = ConfigBuilder::testing().build().unwrap();
    let mut registry = keyrank::init(config).unwrap();
    assert!(registry.is_empty());

    registry.insert_now("live", 1);
    assert_eq!(registry.extract_best().unwrap(), Some("live".to_string()));
}

#[test]
fn test_init_rejects_invalid_config() {
    let mut config = KeyrankConfig::default();
    config.scoring.default_inflection_point = 25;
    assert!(matches!(
        keyrank::init(config),
        Err(KeyrankError::Configuration(_))
    ));
}

#[test]
fn test_scoring_error_converts_to_keyrank_error() {
    fn pick(registry: &mut KeywordRegistry<ManualClock>) -> keyrank::Result<Option<String>> {
        Ok(registry.extract_best_with(5)?)
    }

    let mut registry = KeywordRegistry::with_clock(ScoringConfig::default(), ManualClock::new(NOW));
    registry.insert_now("A", 1);
    let err = pick(&mut registry).unwrap_err();
    assert!(matches!(
        err,
        KeyrankError::Scoring(ScoringError::InvalidInflectionPoint(5))
    ));
    assert_eq!(registry.len(), 1);
}
