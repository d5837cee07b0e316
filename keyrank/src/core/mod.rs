//! Core keyword registry.
//!
//! This module provides the [`KeywordRegistry`], the in-memory collection of
//! observed keywords that have not been emitted yet, together with the
//! outcome and ranking types its operations return.

pub mod registry;

pub use registry::{InsertOutcome, KeywordRegistry, ScoredKeyword};
