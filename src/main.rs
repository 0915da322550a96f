use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use poker_odds::deck::Deck;
use poker_odds::sim::{self, TALLY_TRIALS};

/// Deals random five-card poker hands and estimates how often each kind shows up
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle RNG, drawn from the OS when omitted
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Command {
    /// Print a fresh deck, the same deck shuffled, and its top card
    Deck,
    /// Estimate the probability of being dealt a straight
    #[default]
    Straight,
    /// Count every hand type over a fixed number of deals
    Tally,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    log::debug!("seed: {:?}", args.seed);

    match args.command.unwrap_or_default() {
        Command::Deck => {
            let mut deck = Deck::new();
            println!("{deck}");

            deck.shuffle(&mut rng);
            println!("{deck}");

            println!("{}", deck.deal()?);
        }
        Command::Straight => {
            let estimate = sim::straight(&mut rng)?;
            println!("{}", sim::straight_report(&estimate));
        }
        Command::Tally => {
            let tally = sim::tally(TALLY_TRIALS, &mut rng)?;
            print!("{tally}");
        }
    }
    Ok(())
}
