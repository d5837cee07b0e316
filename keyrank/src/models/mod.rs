//! Domain models for observed keywords

pub mod keyword;

pub use keyword::KeywordEntry;
