use clap::Parser;
use is_terminal::IsTerminal;
use keyrank_cli::KeyrankCliContext;
use keyrank_cli::commands::Commands;
use keyrank_cli::handlers::{handle_pick_command, handle_rank_command, handle_render_command};
use keyrank_cli::output::{output_error, print_coefficient_table};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "keyrank-cli")]
#[command(about = "Pick the freshest, best-ranked trending keyword", long_about = None)]
#[command(version = keyrank::VERSION)]
struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true)]
    config: Option<String>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    output: String,

    /// Use machine-readable output (alias for --output json)
    #[arg(long, global = true)]
    machine: bool,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli_args = Cli::parse();

    // Determine output format - priority: machine flag > env var > cli arg > default
    let output_format = if cli_args.machine {
        "json".to_string()
    } else if let Ok(env_output) = std::env::var("KEYRANK_OUTPUT") {
        env_output
    } else {
        cli_args.output.clone()
    };

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // Machine mode automatically enables quiet mode for clean JSON output
    let log_level = if cli_args.quiet || cli_args.machine {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli_args, &output_format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output_error(&e, &output_format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli_args: Cli, output_format: &str) -> keyrank::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("Keyrank CLI v{}", keyrank::VERSION);
        }

        Commands::Table => {
            print_coefficient_table(output_format);
        }

        Commands::Pick(args) => {
            let mut ctx = KeyrankCliContext::new(cli_args.config.as_deref())?;
            handle_pick_command(args, &mut ctx, output_format)?;
        }

        Commands::Rank(args) => {
            let mut ctx = KeyrankCliContext::new(cli_args.config.as_deref())?;
            handle_rank_command(args, &mut ctx, output_format)?;
        }

        Commands::Render(args) => {
            let mut ctx = KeyrankCliContext::new(cli_args.config.as_deref())?;
            handle_render_command(args, &mut ctx, output_format)?;
        }
    }

    Ok(())
}
