//! CLI for generating mazes and finding their escape

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io;
use tracing_subscriber::EnvFilter;

mod menu;
use menu::Session;

/// Maze generator and escape finder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Print a maze of this size and its escape, instead of opening the menu
    #[arg(long)]
    size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(rng);

    if let Some(size) = args.size {
        println!("{}", session.generate(size)?);
        match session.escape() {
            Ok(solved) => println!("{solved}"),
            Err(err) => tracing::warn!("maze has no escape: {err:#}"),
        }
        return Ok(());
    }

    menu::run(&mut session, io::stdin().lock(), io::stdout().lock())
}
