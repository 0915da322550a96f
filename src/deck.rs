use std::collections::VecDeque;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::card::{Card, Rank, Suit, NUM_RANKS, NUM_SUITS};

pub const DECK_SIZE: usize = (NUM_RANKS * NUM_SUITS) as usize;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot deal from an empty deck")]
    Empty,
}

/// An ordered pile of cards. Dealing takes from the front, and the deck never
/// grows after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 52 cards, suits in the outer loop and ranks in the inner loop.
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::from_parts(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

pub(crate) fn write_cards<'a>(
    f: &mut fmt::Formatter,
    cards: impl IntoIterator<Item = &'a Card>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, card) in cards.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}
