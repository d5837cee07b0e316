pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use context::KeyrankCliContext;
pub use output::{
    CliColors, format_error, format_info, format_warning, output_error,
    print_coefficient_table, print_picks, print_ranking,
};
pub use utils::{LoadSummary, Observation, load_observations, parse_observations, read_observations};
