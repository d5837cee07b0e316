//! Keyword scoring
//!
//! A keyword's composite score blends two components, both on a 0–100 scale:
//!
//! - **Time score**: a piecewise parabola over the minutes since arrival. It
//!   climbs towards 100 at the inflection point, then decays to 0 at the
//!   three-hour mark and stays there.
//! - **Rank score**: derived from the observed rank, zero outside the top ten.
//!
//! The blend is weighted 97% time, 3% rank by default.
//!
//! # Example
//!
//! ```rust
//! use keyrank::scoring::{InflectionPoint, ScoreCalculator, ScoringConfig};
//!
//! let calculator = ScoreCalculator::new(ScoringConfig::default());
//! let point = InflectionPoint::try_from(30).unwrap();
//!
//! // Arrived 30 minutes ago at rank 1: peak freshness and best rank
//! let breakdown = calculator.breakdown(1, 970, point, 1_000);
//! assert_eq!(breakdown.time, 100.0);
//! assert_eq!(breakdown.rank, 100.0);
//! ```

pub mod calculator;
pub mod config;
pub mod curve;

pub use calculator::{ScoreBreakdown, ScoreCalculator, STALE_AFTER_MINUTES};
pub use config::{RankScoring, ScoringConfig};
pub use curve::{Coefficients, InflectionPoint};

/// Error type for scoring operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The requested inflection point has no entry in the coefficient table
    #[error("Invalid inflection point {0}: expected a multiple of 10 from 0 to 120")]
    InvalidInflectionPoint(u32),
}
