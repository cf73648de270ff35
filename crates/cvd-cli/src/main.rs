//! cvd - color vision deficiency simulator
//!
//! Shows how an sRGB color appears under the common forms of color blindness.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;
mod table;

#[derive(Parser)]
#[command(name = "cvd")]
#[command(author, version, about = "Color vision deficiency simulator")]
#[command(long_about = "
Converts \"normally\" colored RGB/hex values to the colors seen under
each type of color vision deficiency, together with the nearest CSS3
color name.

Conditions:
  0 Normal         (normal vision)
  1 Protanopia     (red-blind)
  2 Deuteranopia   (green-blind)
  3 Tritanopia     (blue-blind)
  4 Protanomaly    (red-weak)
  5 Deuteranomaly  (green-weak)
  6 Tritanomaly    (blue-weak)
  7 Monochromacy   (totally colorblind)

Examples:
  cvd convert 255 128 0                 # All conditions
  cvd convert '#ff8000' -t deuter       # Deuteranopia and Deuteranomaly
  cvd convert ff8000 -t 7 --json        # Monochromacy as JSON
  cvd name 18 52 86                     # Nearest CSS3 name
  cvd list                              # Condition indices
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to FILE instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a color under one or more conditions
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// List the simulated conditions
    #[command(visible_alias = "l")]
    List,

    /// Print the nearest CSS3 color name
    #[command(visible_alias = "n")]
    Name(NameArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Color: one hex value (#rrggbb, rrggbb, #rgb), a CSS3 name, or R G B
    #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true, value_name = "COLOR")]
    color: Vec<String>,

    /// Condition to simulate: index, name prefix, or All
    #[arg(
        short = 't',
        long = "type",
        visible_short_alias = 'n',
        visible_alias = "no",
        default_value = "All",
        value_name = "TYPE"
    )]
    condition: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

#[derive(Args)]
struct NameArgs {
    /// Color: one hex value, a CSS3 name, or R G B
    #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true, value_name = "COLOR")]
    color: Vec<String>,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`. The returned
/// guard flushes the file writer and must live until exit.
fn init_logging(verbose: u8, log: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log.as_deref())?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose > 0),
        Commands::List => commands::list::run(cli.verbose > 0),
        Commands::Name(args) => commands::name::run(args, cli.verbose > 0),
    }
}
