//! Command enum definitions

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Display version information
    Version,

    /// Extract the best keywords from an observation file
    #[command(
        alias = "next",
        long_about = r#"
Load observations into a fresh registry and extract the best keywords, one
at a time. Every extraction removes the winner before the next one is scored.

OBSERVATION FILE:
A JSON array of objects:
  [
    {"text": "rust 2024", "rank": 1},
    {"text": "cargo", "rank": 4, "minutes_ago": 25},
    {"text": "crates.io", "rank": 2, "arrival_minute": 28765400, "overwrite": true}
  ]

  • text - keyword, compared by exact string equality
  • rank - observed rank, 1 is best; ranks outside 1-10 get no rank score
  • arrival_minute - minutes since the Unix epoch (optional)
  • minutes_ago - arrival relative to now (optional)
  • overwrite - replace an earlier observation of the same keyword

SCORING:
97% of the score comes from freshness, which peaks at the inflection point
and fades to zero three hours after arrival. 3% comes from the rank.
"#
    )]
    Pick(PickArgs),

    /// Show every keyword with its score, best first, without extracting
    Rank(RankArgs),

    /// Print the diagnostic listing of an observation file
    Render(RenderArgs),

    /// Print the supported inflection points and their coefficients
    Table,
}
