use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::{rngs::StdRng, Rng};

mod demo;
mod logging;
mod tester;

use tester::{list_ops::ListOperation, test_operations};

#[derive(Parser, Debug)]
#[command(name = "tester")]
#[command(about = "Randomized model checks and a demo for slist", long_about = None)]
struct Args {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply seeded random operations to a list and a reference model
    Run {
        /// Seed of the first run; random if omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Operations per run
        #[arg(long, default_value_t = 10_000)]
        ops: usize,

        /// Number of runs, with consecutive seeds
        #[arg(long, default_value_t = 10)]
        runs: u64,
    },
    /// Print a list through both cursor kinds
    Demo,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose.then_some(LevelFilter::Debug));

    match args.command {
        Command::Run { seed, ops, runs } => {
            let base = seed.unwrap_or_else(|| rand::thread_rng().gen());
            log::info!("running {runs} runs of {ops} operations from seed {base}");
            for seed in (0..runs).map(|i| base.wrapping_add(i)) {
                if let Err(failure) = test_operations::<ListOperation, StdRng>(seed, ops) {
                    failure.playback();
                    return Err(failure.into_error().into());
                }
            }
            log::info!("all runs matched the reference model");
        }
        Command::Demo => demo::run(),
    }
    Ok(())
}
