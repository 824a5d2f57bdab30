use std::path::PathBuf;

use clap::Parser;

/// Odyssey Explorer: a 3D view of odysseys orbiting a spiral galaxy.
#[derive(Parser, Debug)]
#[command(name = "odyssey-explorer", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug` or `odyssey_universe=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,

    /// Seed for all random generation, for reproducible scenes.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
