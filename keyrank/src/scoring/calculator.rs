//! Composite score calculator
//!
//! Combines the time score and the rank score of a keyword into the single
//! number the registry ranks by.

use super::config::{RankScoring, ScoringConfig};
use super::curve::{Coefficients, InflectionPoint};
use super::ScoringError;
use crate::models::KeywordEntry;
use serde::Serialize;

/// Age in minutes after which the time score is always zero
pub const STALE_AFTER_MINUTES: i64 = 180;

const MAX_COMPONENT_SCORE: f32 = 100.0;

/// Per-component view of one keyword's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Minutes since arrival (negative for arrivals in the future)
    pub age_minutes: i64,

    /// Time score, 0–100
    pub time: f32,

    /// Rank score, 0–100
    pub rank: f32,

    /// Weighted blend of the two
    pub composite: f32,
}

/// Calculator for turning a keyword's rank and age into a composite score
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Create a new score calculator with the given configuration
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Create a score calculator, returning an error if the configuration is invalid
    pub fn try_new(config: ScoringConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Composite score for a raw inflection point value.
    ///
    /// Fails with [`ScoringError::InvalidInflectionPoint`] when the value is
    /// not in the coefficient table.
    pub fn score(
        &self,
        rank: i32,
        arrival_minute: i64,
        inflection_point: u32,
        now_minute: i64,
    ) -> Result<f32, ScoringError> {
        let point = InflectionPoint::new(inflection_point)?;
        Ok(self
            .breakdown(rank, arrival_minute, point, now_minute)
            .composite)
    }

    /// Composite score of a registry entry
    pub fn score_entry(
        &self,
        entry: &KeywordEntry,
        point: InflectionPoint,
        now_minute: i64,
    ) -> f32 {
        self.breakdown(entry.rank, entry.arrival_minute, point, now_minute)
            .composite
    }

    /// Full breakdown of a score
    pub fn breakdown(
        &self,
        rank: i32,
        arrival_minute: i64,
        point: InflectionPoint,
        now_minute: i64,
    ) -> ScoreBreakdown {
        let age_minutes = now_minute.saturating_sub(arrival_minute);
        let time = self.time_score(age_minutes, point);
        let rank = self.rank_score(rank);
        let composite = (time as f64 * self.config.time_weight
            + rank as f64 * self.config.rank_weight) as f32;

        ScoreBreakdown {
            age_minutes,
            time,
            rank,
            composite,
        }
    }

    /// Time score for a keyword `age_minutes` old.
    ///
    /// Rises along `a1 * (age - p)^2 + 100` while `0 <= age <= p`, then
    /// follows `a2 * (age - 180)^2` down to zero at 180 minutes. Older
    /// keywords score 0. Negative ages take the second branch. The result is
    /// clamped to `[0, 100]`, so any `i64` age is accepted.
    pub fn time_score(&self, age_minutes: i64, point: InflectionPoint) -> f32 {
        let peak = i64::from(point.minutes());
        let Coefficients { a1, a2 } = point.coefficients();

        let raw = if (0..=peak).contains(&age_minutes) {
            a1 * ((age_minutes - peak) as f64).powi(2) + 100.0
        } else if age_minutes <= STALE_AFTER_MINUTES {
            a2 * (age_minutes as f64 - STALE_AFTER_MINUTES as f64).powi(2)
        } else {
            0.0
        };

        (raw as f32).clamp(0.0, MAX_COMPONENT_SCORE)
    }

    /// Rank score according to the configured [`RankScoring`] mode
    pub fn rank_score(&self, rank: i32) -> f32 {
        if !(1..=10).contains(&rank) {
            return 0.0;
        }

        match self.config.rank_scoring {
            RankScoring::Truncated => (((11 - rank) / 10) * 100) as f32,
            RankScoring::Linear => (11 - rank) as f32 * 10.0,
        }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
