use keyrank::KeyrankError;
use keyrank::clock::Clock;
use keyrank::core::{InsertOutcome, KeywordRegistry};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One keyword observation as read from an input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub text: String,
    pub rank: i32,
    #[serde(default)]
    pub arrival_minute: Option<i64>,
    #[serde(default)]
    pub minutes_ago: Option<i64>,
    #[serde(default)]
    pub overwrite: bool,
}

impl Observation {
    /// Absolute arrival minute, falling back to `now_minute`
    pub fn arrival(&self, now_minute: i64) -> i64 {
        match (self.arrival_minute, self.minutes_ago) {
            (Some(minute), _) => minute,
            (None, Some(ago)) => now_minute.saturating_sub(ago),
            (None, None) => now_minute,
        }
    }
}

/// Counts of what happened while loading observations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub inserted: usize,
    pub replaced: usize,
    pub ignored: usize,
}

pub fn parse_observations(json: &str) -> keyrank::Result<Vec<Observation>> {
    let observations: Vec<Observation> = serde_json::from_str(json)
        .map_err(|e| KeyrankError::Other(format!("Invalid observation file: {}", e)))?;

    for (index, observation) in observations.iter().enumerate() {
        if observation.text.is_empty() {
            return Err(KeyrankError::Other(format!(
                "Observation {} has an empty keyword",
                index
            )));
        }
        if observation.arrival_minute.is_some() && observation.minutes_ago.is_some() {
            return Err(KeyrankError::Other(format!(
                "Observation {} ('{}') sets both arrival_minute and minutes_ago",
                index, observation.text
            )));
        }
    }

    Ok(observations)
}

/// Read observations from a file path, or from stdin when the path is `-`
pub fn read_observations(path: &str) -> keyrank::Result<Vec<Observation>> {
    let contents = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| KeyrankError::Other(format!("Failed to read stdin: {}", e)))?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| KeyrankError::Other(format!("Failed to read '{}': {}", path, e)))?
    };

    parse_observations(&contents)
}

/// Feed observations into a registry in file order
pub fn load_observations<C: Clock>(
    registry: &mut KeywordRegistry<C>,
    observations: &[Observation],
) -> LoadSummary {
    let now = registry.clock().now_minute();
    let mut summary = LoadSummary::default();

    for observation in observations {
        let outcome = registry.insert(
            observation.text.clone(),
            observation.rank,
            observation.arrival(now),
            observation.overwrite,
        );
        match outcome {
            InsertOutcome::Inserted => summary.inserted += 1,
            InsertOutcome::Replaced => summary.replaced += 1,
            InsertOutcome::Ignored => summary.ignored += 1,
        }
    }

    tracing::debug!(
        inserted = summary.inserted,
        replaced = summary.replaced,
        ignored = summary.ignored,
        "loaded observations"
    );

    summary
}
