use std::fmt;

use rand::Rng;

use crate::deck::{Deck, DeckError};
use crate::hand::{HandCategory, PokerHand};

/// Straights to collect before the estimator stops.
pub const STRAIGHT_TARGET: u64 = 100;

/// Hands dealt by [`tally`] from the command line.
pub const TALLY_TRIALS: u64 = 1_000_000;

/// Outcome of a stopping-time run: how many hands were dealt and how many of
/// them matched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub matches: u64,
    pub trials: u64,
}

impl Estimate {
    pub fn percentage(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        100.0 * self.matches as f64 / self.trials as f64
    }
}

/// Deals one hand per trial from a freshly built and shuffled deck until
/// `predicate` has matched `target` times.
///
/// The trial count is itself random, so two runs with the same target but
/// different random sources will generally deal a different number of hands.
pub fn run_until<R, F, P>(
    target: u64,
    rng: &mut R,
    mut deck_factory: F,
    mut predicate: P,
) -> Result<Estimate, DeckError>
where
    R: Rng + ?Sized,
    F: FnMut() -> Deck,
    P: FnMut(&PokerHand) -> bool,
{
    let mut estimate = Estimate::default();
    while estimate.matches < target {
        let mut deck = deck_factory();
        deck.shuffle(rng);
        let hand = PokerHand::deal(&mut deck)?;
        log::trace!("trial {}: {}", estimate.trials, hand);
        if predicate(&hand) {
            estimate.matches += 1;
            log::debug!(
                "match {}/{} after {} trials: {}",
                estimate.matches,
                target,
                estimate.trials + 1,
                hand
            );
        }
        estimate.trials += 1;
    }
    log::info!("{} matches in {} trials", estimate.matches, estimate.trials);
    Ok(estimate)
}

/// The straight estimator over a standard 52-card deck.
pub fn straight<R: Rng + ?Sized>(rng: &mut R) -> Result<Estimate, DeckError> {
    run_until(STRAIGHT_TARGET, rng, Deck::new, PokerHand::is_straight)
}

pub fn straight_report(estimate: &Estimate) -> String {
    format!("probability of  straight is {:?}%", estimate.percentage())
}

/// Per-category counts over a fixed number of dealt hands. Each count comes
/// from its own predicate, so a straight flush also shows up under straight
/// and under flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub trials: u64,
    pub counts: Vec<(HandCategory, u64)>,
}

const TALLIED: [(HandCategory, fn(&PokerHand) -> bool); 8] = [
    (HandCategory::Pair, PokerHand::is_pair),
    (HandCategory::TwoPair, PokerHand::is_two_pair),
    (HandCategory::Trips, PokerHand::is_trips),
    (HandCategory::Straight, PokerHand::is_straight),
    (HandCategory::Flush, PokerHand::is_flush),
    (HandCategory::FullHouse, PokerHand::is_full_house),
    (HandCategory::Quads, PokerHand::is_quads),
    (HandCategory::StraightFlush, PokerHand::is_straight_flush),
];

pub fn tally<R: Rng + ?Sized>(trials: u64, rng: &mut R) -> Result<Tally, DeckError> {
    let mut counts = TALLIED.map(|(category, _)| (category, 0u64));
    for _ in 0..trials {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hand = PokerHand::deal(&mut deck)?;
        for ((_, pred), (_, count)) in TALLIED.iter().zip(counts.iter_mut()) {
            if pred(&hand) {
                *count += 1;
            }
        }
    }
    let mut counts = counts.to_vec();
    counts.sort_by_key(|(_, c)| *c);
    counts.reverse();
    log::info!("tallied {} hands", trials);
    Ok(Tally { trials, counts })
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self
            .counts
            .iter()
            .map(|(category, c)| (category.to_string(), *c))
            .collect::<Vec<_>>();
        let width = names.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
        for (s, c) in names {
            let p = if self.trials == 0 {
                0.0
            } else {
                c as f64 / self.trials as f64
            };
            writeln!(f, "{s: >width$}: {p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spades_only() -> Deck {
        Deck::from(
            Rank::ALL
                .into_iter()
                .map(|rank| Card::from_parts(Suit::Spades, rank))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_percentage() {
        assert_eq!(0.0, Estimate::default().percentage());
        let estimate = Estimate {
            matches: 1,
            trials: 4,
        };
        assert_eq!(25.0, estimate.percentage());
    }

    #[test]
    fn test_report() {
        let estimate = Estimate {
            matches: 100,
            trials: 400,
        };
        assert_eq!("probability of  straight is 25.0%", straight_report(&estimate));
    }

    #[test]
    fn test_zero_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let estimate = run_until(0, &mut rng, Deck::new, |_| true).unwrap();
        assert_eq!(Estimate::default(), estimate);
    }

    #[test]
    fn test_always_matches() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let estimate = run_until(5, &mut rng, Deck::new, |_| true).unwrap();
        assert_eq!(Estimate { matches: 5, trials: 5 }, estimate);
        assert_eq!(100.0, estimate.percentage());
    }

    #[test]
    fn test_deck_factory() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut built = 0;
        let estimate = run_until(
            10,
            &mut rng,
            || {
                built += 1;
                spades_only()
            },
            PokerHand::is_flush,
        )
        .unwrap();
        assert_eq!(Estimate { matches: 10, trials: 10 }, estimate);
        assert_eq!(10, built);
    }

    #[test]
    fn test_short_deck_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let short = || Deck::from(spades_only().cards().copied().take(3).collect::<Vec<_>>());
        assert_eq!(
            Err(DeckError::Empty),
            run_until(1, &mut rng, short, |_| true)
        );
    }

    #[test]
    fn test_straight_is_seeded() {
        let a = straight(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = straight(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(STRAIGHT_TARGET, a.matches);
    }

    #[test]
    fn test_straight_estimate_in_range() {
        // ace-high only straights: 9 * 4^5 / C(52, 5) ~= 0.355%
        let estimate = straight(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        assert!(estimate.trials > estimate.matches);
        let p = estimate.percentage();
        assert!(p > 0.2 && p < 0.6, "{p}");
    }

    #[test]
    fn test_tally() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let tally = tally(20_000, &mut rng).unwrap();
        assert_eq!(20_000, tally.trials);
        assert_eq!(TALLIED.len(), tally.counts.len());
        assert_eq!(HandCategory::Pair, tally.counts[0].0);
        assert!(tally.counts.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(tally.counts.iter().all(|&(_, c)| c <= tally.trials));

        let pairs = tally.counts[0].1 as f64 / tally.trials as f64;
        assert!(pairs > 0.38 && pairs < 0.47, "{pairs}");
    }

    #[test]
    fn test_tally_display() {
        let tally = Tally {
            trials: 4,
            counts: vec![(HandCategory::Pair, 2), (HandCategory::FullHouse, 1)],
        };
        assert_eq!("      Pair: 0.5\nFull House: 0.25\n", tally.to_string());
    }
}
