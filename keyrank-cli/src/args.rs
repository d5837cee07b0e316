//! Command argument structures

use clap::Args;

#[derive(Args)]
pub struct PickArgs {
    /// Observation file (JSON array), or `-` for stdin
    pub input: String,

    /// How many keywords to extract, best first
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Inflection point in minutes (0, 10, ..., 120); defaults to the configured value
    #[arg(short, long)]
    pub inflection: Option<u32>,
}

#[derive(Args)]
pub struct RankArgs {
    /// Observation file (JSON array), or `-` for stdin
    pub input: String,

    /// Inflection point in minutes (0, 10, ..., 120); defaults to the configured value
    #[arg(short, long)]
    pub inflection: Option<u32>,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Observation file (JSON array), or `-` for stdin
    pub input: String,
}
