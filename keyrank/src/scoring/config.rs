//! Scoring configuration

use super::InflectionPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the observed rank is turned into a 0–100 rank score.
///
/// Ranks outside `1..=10` always score 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RankScoring {
    /// `((11 - rank) / 10) * 100` with integer division.
    ///
    /// Rank 1 scores 100 and ranks 2 through 10 all score 0. This is the
    /// historical behaviour of the feed and remains the default.
    Truncated,

    /// `(11 - rank) / 10 * 100` in floating point.
    ///
    /// Rank 1 scores 100, rank 2 scores 90, down to 10 for rank 10.
    Linear,
}

impl Default for RankScoring {
    fn default() -> Self {
        Self::Truncated
    }
}

impl fmt::Display for RankScoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "truncated"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

/// Configuration for composite keyword scoring
///
/// # Example
///
/// ```rust
/// use keyrank::scoring::{RankScoring, ScoringConfig};
///
/// let config = ScoringConfig {
///     default_inflection_point: 60,
///     rank_scoring: RankScoring::Linear,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Inflection point used when the caller does not pass one.
    ///
    /// Must be a multiple of 10 from 0 to 120. Default: 30
    pub default_inflection_point: u32,

    /// Rank score mode. Default: truncated
    pub rank_scoring: RankScoring,

    /// Weight of the time score in the composite. Default: 0.97
    pub time_weight: f64,

    /// Weight of the rank score in the composite. Default: 0.03
    pub rank_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_inflection_point: InflectionPoint::DEFAULT.minutes(),
            rank_scoring: RankScoring::Truncated,
            time_weight: 0.97,
            rank_weight: 0.03,
        }
    }
}

impl ScoringConfig {
    /// Create a new scoring configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that gives every top-ten rank a graded score
    pub fn linear_rank() -> Self {
        Self {
            rank_scoring: RankScoring::Linear,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// Returns an error if any parameters are invalid:
    /// - `default_inflection_point` must be a supported inflection point
    /// - both weights must be finite and >= 0.0
    pub fn validate(&self) -> Result<(), String> {
        InflectionPoint::new(self.default_inflection_point).map_err(|e| e.to_string())?;

        if !self.time_weight.is_finite() || self.time_weight < 0.0 {
            return Err("time_weight must be a finite value >= 0.0".to_string());
        }
        if !self.rank_weight.is_finite() || self.rank_weight < 0.0 {
            return Err("rank_weight must be a finite value >= 0.0".to_string());
        }

        Ok(())
    }
}
