//! # Keyrank
//!
//! Tracks trending keywords as they arrive from a live feed and picks the
//! single best one to emit next. Each keyword carries the rank it was observed
//! at and the minute it arrived; the composite score blends freshness
//! relative to an inflection point (97%) with rank quality (3%).
//!
//! ## Quick Start
//!
//! ```rust
//! use keyrank::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let clock = ManualClock::new(1_000);
//!     let mut registry = KeywordRegistry::with_clock(ScoringConfig::default(), clock);
//!
//!     registry.insert_now("rust 2024", 1);
//!     registry.insert_now("cargo", 8);
//!
//!     assert_eq!(registry.extract_best()?, Some("rust 2024".to_string()));
//!     assert_eq!(registry.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Registry**: the in-memory collection of not-yet-extracted keywords
//! - **Scoring**: the piecewise time curve, the rank score and their blend
//! - **Clock**: an injected source of the current minute, so tests can pin time
//!
//! The registry is a plain value owned by the caller. It does no locking of
//! its own; wrap it in a mutex if several threads need it.

pub mod clock;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod scoring;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::{init, init_with_defaults};

    pub use crate::clock::{Clock, ManualClock, SystemClock};

    pub use crate::config::{ConfigBuilder, KeyrankConfig, LogFormat, LogLevel, LoggingConfig};

    pub use crate::core::{InsertOutcome, KeywordRegistry, ScoredKeyword};

    pub use crate::models::KeywordEntry;

    pub use crate::scoring::{
        Coefficients, InflectionPoint, RankScoring, ScoreBreakdown, ScoreCalculator,
        ScoringConfig, ScoringError,
    };

    pub use crate::{KeyrankError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Keyrank operations
#[derive(Debug, thiserror::Error)]
pub enum KeyrankError {
    /// Scoring failed, e.g. an unsupported inflection point was requested
    #[error("Scoring error: {0}")]
    Scoring(#[from] crate::scoring::ScoringError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] crate::config::ConfigError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

/// Result type for Keyrank operations
pub type Result<T> = std::result::Result<T, KeyrankError>;

/// Initialize Keyrank with default configuration
///
/// # Examples
///
/// ```rust
/// use keyrank::prelude::*;
///
/// fn example() -> Result<()> {
///     let mut registry = init_with_defaults()?;
///     registry.insert_now("breaking news", 1);
///     let best = registry.extract_best()?;
///     assert_eq!(best.as_deref(), Some("breaking news"));
///     Ok(())
/// }
/// ```
pub fn init_with_defaults() -> Result<core::KeywordRegistry<clock::SystemClock>> {
    let config = config::ConfigBuilder::defaults().build()?;
    init(config)
}

/// Initialize Keyrank with the provided configuration
///
/// Sets up logging, validates the configuration and hands back an empty
/// registry driven by the wall clock. The caller owns the registry; keep it
/// for as long as keywords should accumulate.
///
/// # Examples
///
/// ```rust
/// use keyrank::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_default_inflection_point(60)
///         .with_log_level(LogLevel::Warn)
///         .build()?;
///
///     let registry = init(config)?;
///     assert!(registry.is_empty());
///     Ok(())
/// }
/// ```
pub fn init(config: config::KeyrankConfig) -> Result<core::KeywordRegistry<clock::SystemClock>> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    config::validate_config(&config)?;

    tracing::debug!(
        default_inflection_point = config.scoring.default_inflection_point,
        rank_scoring = %config.scoring.rank_scoring,
        "keyword registry initialized"
    );

    Ok(core::KeywordRegistry::new(config.scoring))
}
