//! Keyword registry
//!
//! Holds at most one entry per keyword text, in arrival order, and hands out
//! the best-scoring keyword on request. Extraction runs in two passes: score
//! everything and pick a winner, then remove the winner by its text.

use crate::clock::{Clock, SystemClock};
use crate::models::KeywordEntry;
use crate::scoring::{
    InflectionPoint, ScoreBreakdown, ScoreCalculator, ScoringConfig, ScoringError,
};
use serde::Serialize;
use std::fmt::{self, Write as _};
use tracing::{debug, warn};

/// What an insert did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The keyword was new and has been appended
    Inserted,

    /// The keyword already existed and overwrite was off; nothing changed
    Ignored,

    /// The keyword already existed and has been replaced by a fresh entry
    Replaced,
}

/// A registry entry paired with its score at a given moment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredKeyword {
    /// The scored entry
    pub entry: KeywordEntry,

    /// Component scores and the composite
    pub score: ScoreBreakdown,
}

/// In-memory collection of keywords waiting to be emitted.
///
/// The registry does no internal locking. It is `Send + Sync` whenever its
/// clock is, so a caller that needs shared access can put it behind a mutex.
#[derive(Debug)]
pub struct KeywordRegistry<C: Clock = SystemClock> {
    entries: Vec<KeywordEntry>,
    calculator: ScoreCalculator,
    clock: C,
}

impl KeywordRegistry<SystemClock> {
    /// Create an empty registry driven by the wall clock
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for KeywordRegistry<SystemClock> {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl<C: Clock> KeywordRegistry<C> {
    /// Create an empty registry that reads the current minute from `clock`
    pub fn with_clock(config: ScoringConfig, clock: C) -> Self {
        Self {
            entries: Vec::new(),
            calculator: ScoreCalculator::new(config),
            clock,
        }
    }

    /// Insert a keyword.
    ///
    /// A keyword that is not present yet is always appended. If it is
    /// present, `overwrite == false` leaves the existing entry untouched and
    /// `overwrite == true` removes it and appends a new entry with the given
    /// rank and arrival minute.
    pub fn insert(
        &mut self,
        text: impl Into<String>,
        rank: i32,
        arrival_minute: i64,
        overwrite: bool,
    ) -> InsertOutcome {
        let text = text.into();

        if self.contains(&text) {
            if !overwrite {
                debug!(keyword = %text, "keyword already registered, ignoring");
                return InsertOutcome::Ignored;
            }

            self.take(&text);
            debug!(keyword = %text, rank, arrival_minute, "replacing keyword");
            self.entries.push(KeywordEntry::new(text, rank, arrival_minute));
            return InsertOutcome::Replaced;
        }

        debug!(keyword = %text, rank, arrival_minute, "registering keyword");
        self.entries.push(KeywordEntry::new(text, rank, arrival_minute));
        InsertOutcome::Inserted
    }

    /// Insert a keyword arriving now, without overwriting
    pub fn insert_now(&mut self, text: impl Into<String>, rank: i32) -> InsertOutcome {
        let now = self.clock.now_minute();
        self.insert(text, rank, now, false)
    }

    /// Insert a keyword with an explicit arrival minute, without overwriting
    pub fn insert_at(
        &mut self,
        text: impl Into<String>,
        rank: i32,
        arrival_minute: i64,
    ) -> InsertOutcome {
        self.insert(text, rank, arrival_minute, false)
    }

    /// Remove and return the best keyword under the configured default
    /// inflection point.
    pub fn extract_best(&mut self) -> Result<Option<String>, ScoringError> {
        let point = self.calculator.config().default_inflection_point;
        self.extract_best_with(point)
    }

    /// Remove and return the best keyword under `inflection_point`.
    ///
    /// Returns `Ok(None)` for an empty registry. Among equal top scores the
    /// entry encountered last wins. An unsupported inflection point fails
    /// before anything is removed.
    pub fn extract_best_with(
        &mut self,
        inflection_point: u32,
    ) -> Result<Option<String>, ScoringError> {
        let point = InflectionPoint::new(inflection_point)?;
        Ok(self.extract_with_point(point))
    }

    /// Remove and return up to `count` keywords, best first.
    ///
    /// Each pick is scored against the clock at the time of that pick.
    pub fn extract_top(
        &mut self,
        count: usize,
        inflection_point: u32,
    ) -> Result<Vec<String>, ScoringError> {
        let point = InflectionPoint::new(inflection_point)?;

        let mut picked = Vec::with_capacity(count.min(self.entries.len()));
        while picked.len() < count {
            match self.extract_with_point(point) {
                Some(text) => picked.push(text),
                None => break,
            }
        }
        Ok(picked)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        debug!(removed = self.entries.len(), "clearing keyword registry");
        self.entries.clear();
    }

    /// Score every entry without removing anything, best first.
    ///
    /// Ties are ordered the way extraction would resolve them, so the first
    /// element is always what [`extract_best_with`](Self::extract_best_with)
    /// would return.
    pub fn ranking(&self, inflection_point: u32) -> Result<Vec<ScoredKeyword>, ScoringError> {
        let point = InflectionPoint::new(inflection_point)?;
        let now = self.clock.now_minute();

        let mut scored: Vec<(usize, ScoredKeyword)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let score = self.calculator.breakdown(
                    entry.rank,
                    entry.arrival_minute,
                    point,
                    now,
                );
                (
                    index,
                    ScoredKeyword {
                        entry: entry.clone(),
                        score,
                    },
                )
            })
            .collect();

        scored.sort_by(|(a_index, a), (b_index, b)| {
            b.score
                .composite
                .total_cmp(&a.score.composite)
                .then(b_index.cmp(a_index))
        });

        Ok(scored.into_iter().map(|(_, keyword)| keyword).collect())
    }

    /// Current composite score of one keyword, if present
    pub fn score_of(
        &self,
        text: &str,
        inflection_point: u32,
    ) -> Result<Option<f32>, ScoringError> {
        let point = InflectionPoint::new(inflection_point)?;
        let now = self.clock.now_minute();
        Ok(self
            .get(text)
            .map(|entry| self.calculator.score_entry(entry, point, now)))
    }

    /// Human-readable listing of every entry and its score under the
    /// default inflection point. Never fails and never mutates.
    pub fn render(&self) -> String {
        let now = self.clock.now_minute();
        let point = match InflectionPoint::new(self.calculator.config().default_inflection_point)
        {
            Ok(point) => Some(point),
            Err(e) => {
                warn!(error = %e, "cannot score keywords for rendering");
                None
            }
        };

        let mut out = String::new();
        for entry in &self.entries {
            let score = point
                .map(|p| self.calculator.score_entry(entry, p, now))
                .unwrap_or(0.0);
            let _ = writeln!(
                out,
                "{}: rank={} arrival_minute={} age={}m score={:.3}",
                entry.text,
                entry.rank,
                entry.arrival_minute,
                entry.age_minutes(now),
                score
            );
        }
        out
    }

    /// Number of registered keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no keywords
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a keyword with exactly this text is registered
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| entry.text == text)
    }

    /// Look up a keyword by its exact text
    pub fn get(&self, text: &str) -> Option<&KeywordEntry> {
        self.entries.iter().find(|entry| entry.text == text)
    }

    /// Registered entries in iteration order
    pub fn entries(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }

    /// Scoring configuration in use
    pub fn config(&self) -> &ScoringConfig {
        self.calculator.config()
    }

    /// The clock this registry reads
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn extract_with_point(&mut self, point: InflectionPoint) -> Option<String> {
        let now = self.clock.now_minute();

        // Running maximum starts at zero; `>=` lets later equal scores take over.
        let mut best: Option<&KeywordEntry> = None;
        let mut max_score = 0.0_f32;
        for entry in &self.entries {
            let score = self.calculator.score_entry(entry, point, now);
            if score >= max_score {
                max_score = score;
                best = Some(entry);
            }
        }

        let winner = best?.text.clone();
        self.take(&winner)?;
        debug!(keyword = %winner, score = max_score, inflection_point = %point, "extracted keyword");
        Some(winner)
    }

    fn take(&mut self, text: &str) -> Option<KeywordEntry> {
        let index = self.entries.iter().position(|entry| entry.text == text)?;
        Some(self.entries.remove(index))
    }
}

impl<C: Clock> fmt::Display for KeywordRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::scoring::RankScoring;

    const NOW: i64 = 29_000_000;

    fn registry() -> KeywordRegistry<ManualClock> {
        KeywordRegistry::with_clock(ScoringConfig::default(), ManualClock::new(NOW))
    }

    #[test]
    fn test_insert_new_keyword() {
        let mut reg = registry();
        assert_eq!(reg.insert("rust", 1, NOW, false), InsertOutcome::Inserted);
        assert_eq!(reg.insert("cargo", 2, NOW, true), InsertOutcome::Inserted);
        assert_eq!(reg.len(), 2);
        assert!(reg.contains("rust"));
        assert!(!reg.contains("Rust"));
    }

    #[test]
    fn test_insert_duplicate_without_overwrite() {
        let mut reg = registry();
        reg.insert("rust", 1, NOW, false);

        assert_eq!(reg.insert("rust", 9, NOW - 50, false), InsertOutcome::Ignored);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("rust"), Some(&KeywordEntry::new("rust", 1, NOW)));
    }

    #[test]
    fn test_insert_duplicate_with_overwrite() {
        let mut reg = registry();
        reg.insert("rust", 1, NOW, false);
        reg.insert("cargo", 2, NOW, false);

        assert_eq!(reg.insert("rust", 9, NOW - 50, true), InsertOutcome::Replaced);
        assert_eq!(reg.len(), 2);
        assert_eq!(
            reg.get("rust"),
            Some(&KeywordEntry::new("rust", 9, NOW - 50))
        );

        // The replacement moves to the end of the iteration order
        let order: Vec<&str> = reg.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(order, vec!["cargo", "rust"]);
    }

    #[test]
    fn test_insert_now_uses_clock() {
        let mut reg = registry();
        reg.insert_now("rust", 3);
        reg.clock().advance(5);
        reg.insert_at("cargo", 4, NOW - 10);

        assert_eq!(reg.get("rust").map(|e| e.arrival_minute), Some(NOW));
        assert_eq!(reg.get("cargo").map(|e| e.arrival_minute), Some(NOW - 10));
    }

    #[test]
    fn test_extract_empty() {
        let mut reg = registry();
        assert_eq!(reg.extract_best(), Ok(None));
        assert_eq!(reg.extract_best_with(120), Ok(None));
    }

    #[test]
    fn test_extract_prefers_rank_one() {
        let mut reg = registry();
        reg.insert_now("A", 1);
        reg.insert_now("B", 8);

        assert_eq!(reg.extract_best_with(30), Ok(Some("A".to_string())));
        assert_eq!(reg.len(), 1);
        assert!(reg.contains("B"));
    }

    #[test]
    fn test_extract_prefers_peak_freshness() {
        let mut reg = registry();
        reg.insert_at("fresh", 5, NOW);
        reg.insert_at("peaking", 5, NOW - 30);
        reg.insert_at("stale", 1, NOW - 200);

        assert_eq!(reg.extract_best(), Ok(Some("peaking".to_string())));
        assert_eq!(reg.extract_best(), Ok(Some("fresh".to_string())));
        assert_eq!(reg.extract_best(), Ok(Some("stale".to_string())));
        assert_eq!(reg.extract_best(), Ok(None));
    }

    #[test]
    fn test_extract_single_stale_keyword() {
        let mut reg = registry();
        reg.insert_at("X", 1, NOW - 200);

        assert_eq!(reg.extract_best_with(30), Ok(Some("X".to_string())));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_extract_zero_score_keyword() {
        let mut reg = registry();
        // Stale and outside the top ten: composite score is exactly zero
        reg.insert_at("nobody", 50, NOW - 500);

        assert_eq!(reg.extract_best(), Ok(Some("nobody".to_string())));
    }

    #[test]
    fn test_extract_tie_last_wins() {
        let mut reg = registry();
        reg.insert_at("first", 3, NOW - 10);
        reg.insert_at("second", 3, NOW - 10);
        reg.insert_at("third", 3, NOW - 10);

        assert_eq!(reg.extract_best(), Ok(Some("third".to_string())));
        assert_eq!(reg.extract_best(), Ok(Some("second".to_string())));
        assert_eq!(reg.extract_best(), Ok(Some("first".to_string())));
    }

    #[test]
    fn test_extract_invalid_inflection_point_leaves_registry() {
        let mut reg = registry();
        reg.insert_now("A", 1);
        reg.insert_now("B", 2);
        let before: Vec<KeywordEntry> = reg.entries().cloned().collect();

        assert_eq!(
            reg.extract_best_with(999),
            Err(ScoringError::InvalidInflectionPoint(999))
        );
        let after: Vec<KeywordEntry> = reg.entries().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_extract_top() {
        let mut reg = registry();
        reg.insert_at("a", 1, NOW - 30);
        reg.insert_at("b", 1, NOW - 90);
        reg.insert_at("c", 1, NOW - 170);

        assert_eq!(
            reg.extract_top(2, 30),
            Ok(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(reg.extract_top(5, 30), Ok(vec!["c".to_string()]));
        assert_eq!(reg.extract_top(5, 30), Ok(vec![]));
    }

    #[test]
    fn test_extract_top_invalid_point_removes_nothing() {
        let mut reg = registry();
        reg.insert_now("a", 1);
        assert!(reg.extract_top(3, 15).is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut reg = registry();
        reg.insert_now("a", 1);
        reg.insert_now("b", 2);
        reg.clear();

        assert!(reg.is_empty());
        assert_eq!(reg.extract_best(), Ok(None));
        reg.clear();
        assert!(reg.is_empty());
    }

    #[test]
    fn test_ranking_matches_extraction() {
        let mut reg = registry();
        reg.insert_at("tie-a", 4, NOW - 20);
        reg.insert_at("top", 1, NOW - 30);
        reg.insert_at("tie-b", 4, NOW - 20);
        reg.insert_at("old", 2, NOW - 300);

        let ranking = reg.ranking(30).unwrap();
        let order: Vec<&str> = ranking.iter().map(|k| k.entry.text.as_str()).collect();
        assert_eq!(order, vec!["top", "tie-b", "tie-a", "old"]);
        assert_eq!(reg.len(), 4);

        for expected in order.clone() {
            assert_eq!(reg.extract_best_with(30), Ok(Some(expected.to_string())));
        }
    }

    #[test]
    fn test_ranking_invalid_point() {
        let reg = registry();
        assert!(matches!(
            reg.ranking(1),
            Err(ScoringError::InvalidInflectionPoint(1))
        ));
    }

    #[test]
    fn test_score_of() {
        let mut reg = registry();
        reg.insert_at("rust", 1, NOW - 30);

        let score = reg.score_of("rust", 30).unwrap().unwrap();
        assert!((score - 100.0).abs() < 1e-3);
        assert_eq!(reg.score_of("missing", 30), Ok(None));
        assert!(reg.score_of("rust", 33).is_err());
    }

    #[test]
    fn test_scores_follow_the_clock() {
        let mut reg = registry();
        reg.insert_now("rust", 2);

        let fresh = reg.score_of("rust", 30).unwrap().unwrap();
        reg.clock().advance(30);
        let peak = reg.score_of("rust", 30).unwrap().unwrap();
        reg.clock().advance(200);
        let gone = reg.score_of("rust", 30).unwrap().unwrap();

        assert!(peak > fresh);
        assert_eq!(gone, 0.0);
    }

    #[test]
    fn test_linear_rank_changes_winner() {
        let config = ScoringConfig {
            rank_scoring: RankScoring::Linear,
            ..Default::default()
        };
        let mut reg = KeywordRegistry::with_clock(config, ManualClock::new(NOW));
        reg.insert_at("better", 2, NOW - 10);
        reg.insert_at("worse", 9, NOW - 10);

        assert_eq!(reg.extract_best(), Ok(Some("better".to_string())));

        // With truncation both score the same and the later one wins
        let mut truncated = registry();
        truncated.insert_at("better", 2, NOW - 10);
        truncated.insert_at("worse", 9, NOW - 10);
        assert_eq!(truncated.extract_best(), Ok(Some("worse".to_string())));
    }

    #[test]
    fn test_render() {
        let mut reg = registry();
        reg.insert_at("rust", 1, NOW - 30);
        reg.insert_at("cargo", 8, NOW - 500);

        let rendered = reg.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("rust: rank=1 arrival_minute={} age=30m score=100.000", NOW - 30)
        );
        assert_eq!(
            lines[1],
            format!("cargo: rank=8 arrival_minute={} age=500m score=0.000", NOW - 500)
        );
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.to_string(), rendered);
    }

    #[test]
    fn test_render_swallows_scoring_errors() {
        let config = ScoringConfig {
            default_inflection_point: 31,
            ..Default::default()
        };
        let mut reg = KeywordRegistry::with_clock(config, ManualClock::new(NOW));
        reg.insert_at("rust", 1, NOW - 30);

        let rendered = reg.render();
        assert!(rendered.contains("score=0.000"));
        assert!(reg.extract_best().is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_extreme_arrivals_are_scored() {
        let mut reg = registry();
        reg.insert_at("ancient", 1, i64::MIN);
        reg.insert_at("rust", 5, NOW);
        reg.insert_at("far future", 5, i64::MAX);

        let ranking = reg.ranking(30).unwrap();
        assert_eq!(ranking[0].entry.text, "far future");
        assert_eq!(ranking[0].score.composite, 97.0);
        assert_eq!(ranking[2].entry.text, "ancient");
        assert_eq!(ranking[2].score.age_minutes, i64::MAX);
        assert!((ranking[2].score.composite - 3.0).abs() < 1e-4);

        assert_eq!(reg.extract_best().unwrap(), Some("far future".to_string()));
        assert_eq!(reg.extract_best().unwrap(), Some("rust".to_string()));
        assert_eq!(reg.extract_best().unwrap(), Some("ancient".to_string()));
        assert_eq!(reg.extract_best().unwrap(), None);
    }

    #[test]
    fn test_render_extreme_arrivals() {
        let mut reg = registry();
        reg.insert_at("ancient", 1, i64::MIN);
        reg.insert_at("far future", 5, i64::MAX);

        let rendered = reg.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[0],
            format!(
                "ancient: rank=1 arrival_minute={} age={}m score=3.000",
                i64::MIN,
                i64::MAX
            )
        );
        assert_eq!(
            lines[1],
            format!(
                "far future: rank=5 arrival_minute={} age={}m score=97.000",
                i64::MAX,
                NOW - i64::MAX
            )
        );
    }

    #[test]
    fn test_empty_render() {
        assert_eq!(registry().render(), "");
    }
}
