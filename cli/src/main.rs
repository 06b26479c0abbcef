use std::io;

use anyhow::anyhow;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::CellCount;

mod play;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = play::TURN_HELP)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of mines, asked for on startup when omitted
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn random_seed() -> anyhow::Result<u64> {
    let mut bytes = [0; 8];
    getrandom::fill(&mut bytes).map_err(|err| anyhow!("Failed to draw a random seed: {err}"))?;
    Ok(u64::from_le_bytes(bytes))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => random_seed()?,
    };
    log::debug!("seed: {seed}");

    let outcome = play::run(io::stdin().lock(), io::stdout().lock(), args.mines, seed)?;
    log::debug!("Game stopped with outcome {outcome:?}");
    Ok(())
}
