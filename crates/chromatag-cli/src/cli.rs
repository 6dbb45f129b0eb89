use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::config::GeneratorMode;

/// Chromatag — descriptive labels for 24-bit colors.
#[derive(Parser, Debug)]
#[command(name = "chromatag", version, about)]
pub struct Args {
    /// Log level override (e.g. debug, chromatag=trace). Defaults to RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the label set of each color.
    Classify(ClassifyArgs),
    /// Emit synthetic catalog items as JSON lines.
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ClassifyArgs {
    /// Colors as `#rrggbb` or `rrggbb`.
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// One JSON object per color instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// JSON file with generator settings; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of items to emit.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// How colors are chosen.
    #[arg(long, value_enum)]
    pub mode: Option<GeneratorMode>,

    /// RNG seed for random mode.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Category tag attached to every item.
    #[arg(long)]
    pub category: Option<String>,

    /// Comment attached to every item.
    #[arg(long)]
    pub comment: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
