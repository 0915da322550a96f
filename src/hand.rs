use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::card::{Card, CardError, NUM_RANKS, NUM_SUITS};
use crate::deck::{write_cards, Deck, DeckError};

pub const HAND_SIZE: usize = 5;

type RankCounts = [u8; NUM_RANKS as usize];

type SuitCounts = [u8; NUM_SUITS as usize];

/// Non-zero rank counts, largest first. A full house is `[3, 2]`.
pub type Pattern = ArrayVec<u8, HAND_SIZE>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("a hand holds 5 cards, got {0}")]
    WrongSize(usize),
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "2 pair",
            HandCategory::Trips => "3 of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::Quads => "4 of a kind",
            HandCategory::StraightFlush => "Strt Flush",
        })
    }
}

fn rank_counts(cards: &[Card]) -> RankCounts {
    let mut ret = RankCounts::default();
    for c in cards {
        ret[c.rank().index() as usize] += 1;
    }
    ret
}

fn suit_counts(cards: &[Card]) -> SuitCounts {
    let mut ret = SuitCounts::default();
    for c in cards {
        ret[c.suit().index() as usize] += 1;
    }
    ret
}

fn pattern(cards: &[Card]) -> Pattern {
    let mut ret = rank_counts(cards)
        .into_iter()
        .filter(|&c| c > 0)
        .collect::<Pattern>();
    ret.sort_unstable_by(|a, b| b.cmp(a));
    ret
}

/// Ordered pairs `(i, j)`, `i != j`, of cards sharing a rank. Each unordered
/// pair counts twice, so a rank held `n` times contributes `n * (n - 1)`.
fn number_matches(cards: &[Card]) -> u32 {
    rank_counts(cards)
        .iter()
        .map(|&n| n as u32 * (n as u32).saturating_sub(1))
        .sum()
}

fn is_flush(cards: &[Card]) -> bool {
    !cards.is_empty() && suit_counts(cards).iter().any(|&c| c as usize == cards.len())
}

/// Five distinct ranks spanning exactly five places. The ace only plays high.
fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != HAND_SIZE {
        return false;
    }
    let mut sorted = cards.iter().copied().collect::<ArrayVec<Card, HAND_SIZE>>();
    sorted.sort_by(Card::rank_cmp);
    let distance = sorted[HAND_SIZE - 1].rank().index() - sorted[0].rank().index();
    number_matches(&sorted) == 0 && distance == 4
}

/// A fixed five-card sample. Queries never reorder the held cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokerHand {
    cards: [Card; HAND_SIZE],
}

impl PokerHand {
    /// Takes the next five cards off the front of `deck`.
    pub fn deal(deck: &mut Deck) -> Result<Self, DeckError> {
        let mut cards = ArrayVec::<Card, HAND_SIZE>::new();
        while !cards.is_full() {
            cards.push(deck.deal()?);
        }
        let cards = cards.into_inner().map_err(|_| DeckError::Empty)?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn number_matches(&self) -> u32 {
        number_matches(&self.cards)
    }

    pub fn pattern(&self) -> Pattern {
        pattern(&self.cards)
    }

    pub fn is_flush(&self) -> bool {
        is_flush(&self.cards)
    }

    pub fn is_straight(&self) -> bool {
        is_straight(&self.cards)
    }

    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    pub fn is_pair(&self) -> bool {
        self.pattern().as_slice() == [2, 1, 1, 1]
    }

    pub fn is_two_pair(&self) -> bool {
        self.pattern().as_slice() == [2, 2, 1]
    }

    pub fn is_trips(&self) -> bool {
        self.pattern().as_slice() == [3, 1, 1]
    }

    pub fn is_full_house(&self) -> bool {
        self.pattern().as_slice() == [3, 2]
    }

    pub fn is_quads(&self) -> bool {
        self.pattern().as_slice() == [4, 1]
    }

    /// The single best category the hand qualifies for.
    pub fn category(&self) -> HandCategory {
        let straight = self.is_straight();
        let flush = self.is_flush();
        match (self.pattern().as_slice(), straight, flush) {
            (_, true, true) => HandCategory::StraightFlush,
            ([4, 1], _, _) => HandCategory::Quads,
            ([3, 2], _, _) => HandCategory::FullHouse,
            (_, _, true) => HandCategory::Flush,
            (_, true, _) => HandCategory::Straight,
            ([3, 1, 1], _, _) => HandCategory::Trips,
            ([2, 2, 1], _, _) => HandCategory::TwoPair,
            ([2, 1, 1, 1], _, _) => HandCategory::Pair,
            _ => HandCategory::HighCard,
        }
    }
}

impl From<[Card; HAND_SIZE]> for PokerHand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }
}

/// Five whitespace separated cards, e.g. `"2♠ 3♣ 4♥ 5♦ 6♣"`.
impl FromStr for PokerHand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        let n = cards.len();
        let cards = <[Card; HAND_SIZE]>::try_from(cards).map_err(|_| HandError::WrongSize(n))?;
        Ok(Self { cards })
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}
