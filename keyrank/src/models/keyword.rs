use serde::{Deserialize, Serialize};
use std::fmt;

/// One observed keyword waiting to be emitted.
///
/// Entries are immutable once created. Replacing a keyword's rank or arrival
/// time means removing the old entry and inserting a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Keyword text; identity is exact string equality
    pub text: String,

    /// Ranking position at arrival (1 = best). Not bounds-checked here.
    pub rank: i32,

    /// Arrival time in whole minutes since the Unix epoch
    pub arrival_minute: i64,
}

impl KeywordEntry {
    /// Create a new entry
    pub fn new(text: impl Into<String>, rank: i32, arrival_minute: i64) -> Self {
        Self {
            text: text.into(),
            rank,
            arrival_minute,
        }
    }

    /// Minutes elapsed between arrival and `now_minute`.
    ///
    /// Negative when the arrival lies in the future. Saturates at the `i64`
    /// bounds.
    pub fn age_minutes(&self, now_minute: i64) -> i64 {
        now_minute.saturating_sub(self.arrival_minute)
    }
}

impl fmt::Display for KeywordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (rank {}, arrived at minute {})",
            self.text, self.rank, self.arrival_minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_minutes() {
        let entry = KeywordEntry::new("rust", 1, 1_000);
        assert_eq!(entry.age_minutes(1_030), 30);
        assert_eq!(entry.age_minutes(990), -10);

        let ancient = KeywordEntry::new("rust", 1, i64::MIN);
        assert_eq!(ancient.age_minutes(1_000), i64::MAX);
        let future = KeywordEntry::new("rust", 1, i64::MAX);
        assert_eq!(future.age_minutes(-1_000), i64::MIN);
    }

    #[test]
    fn test_display() {
        let entry = KeywordEntry::new("rust", 3, 42);
        assert_eq!(entry.to_string(), "rust (rank 3, arrived at minute 42)");
    }

    #[test]
    fn test_serde_field_names() {
        let entry = KeywordEntry::new("rust", 2, 7);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "rust", "rank": 2, "arrival_minute": 7})
        );
    }
}
