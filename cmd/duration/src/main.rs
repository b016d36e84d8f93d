//! Duration CLI - converts between duration strings and nanoseconds.

use clap::{Parser, Subcommand};

mod commands;

use commands::{CheckCommand, FormatCommand, ParseCommand};

/// Duration CLI - converts between duration strings and nanoseconds.
///
/// Duration strings look like "300ms", "-1.5h" or "2h45m". Valid units are
/// d, h, m, s, ms, us (or µs) and ns. A number without a unit is seconds.
#[derive(Parser)]
#[command(name = "duration")]
#[command(about = "Duration string conversion tool")]
#[command(version)]
pub struct Cli {
    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse duration strings into nanoseconds
    Parse(ParseCommand),
    /// Format nanosecond counts as duration strings
    Format(FormatCommand),
    /// Validate and normalize a file of named durations
    Check(CheckCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Parse(cmd) => cmd.run(&cli),
        Commands::Format(cmd) => cmd.run(&cli),
        Commands::Check(cmd) => cmd.run(&cli),
    }
}
