//! graph-codec CLI
//!
//! Terminal front end for the acquaintance-graph codec:
//! - Run the built-in demo graph (with a cycle)
//! - Inspect a record file or snapshot
//! - Check a file for asymmetric relations
//! - Re-encode a file, optionally with fresh identifiers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graph_codec::{Codec, CodecConfig, IdPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{demo, inspect, reencode, validate};
use error::CliResult;

/// graph-codec CLI application
#[derive(Parser)]
#[command(name = "graph-codec")]
#[command(about = "Serialize and inspect cyclic acquaintance graphs", long_about = None)]
#[command(version)]
struct Cli {
    /// Codec configuration file (TOML)
    #[arg(short, long, env = "GRAPH_CODEC_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value = "text")]
    output: output::OutputFormat,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Give decoded persons fresh identifiers
    #[arg(long)]
    regenerate_ids: bool,

    /// Reject input with asymmetric relations
    #[arg(long)]
    verify_symmetry: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Encode and decode the built-in Ivan/Petr/Anna graph
    Demo(demo::DemoArgs),

    /// List the persons of a record file
    Inspect(inspect::InspectArgs),

    /// Check that every relation has a reverse edge
    Validate(validate::ValidateArgs),

    /// Decode and encode again
    Reencode(reencode::ReencodeArgs),
}

impl Cli {
    /// Configuration file values, overridden by command-line flags.
    fn codec_config(&self) -> CliResult<CodecConfig> {
        let mut config = match &self.config {
            Some(path) => CodecConfig::load(path)?,
            None => CodecConfig::default(),
        };
        if self.compact {
            config.pretty = false;
        }
        if self.regenerate_ids {
            config.id_policy = IdPolicy::Regenerate;
        }
        if self.verify_symmetry {
            config.verify_symmetry = true;
        }
        Ok(config)
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.codec_config()?;
    tracing::debug!(?config, "Codec configuration");
    let codec = Codec::new(config);

    match cli.command {
        Commands::Demo(args) => demo::execute(args, &codec, cli.output),
        Commands::Inspect(args) => inspect::execute(args, &codec, cli.output),
        Commands::Validate(args) => validate::execute(args, &codec, cli.output),
        Commands::Reencode(args) => reencode::execute(args, &codec),
    }
}
