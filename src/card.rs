use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const NUM_RANKS: u8 = 13;

pub const NUM_SUITS: u8 = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("invalid suit: {0:?}")]
    InvalidSuit(String),
}

/// Face value, ordered low to high with the ace on top.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.symbol() == s)
            .ok_or_else(|| CardError::InvalidRank(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Suits carry no order of their own; the enumeration order only fixes the
/// layout of a fresh deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Suit {
    Spades = 0,
    Clubs = 1,
    Hearts = 2,
    Diamonds = 3,
}

impl Suit {
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.symbol() == s)
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable playing card.
///
/// Equality and hashing cover both rank and suit. Rank-only comparisons go
/// through [`Card::same_rank`], [`Card::outranks`] and [`Card::rank_cmp`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Builds a card from its suit and rank symbols, e.g. `Card::new("♥", "10")`.
    /// The rank is checked first.
    pub fn new(suit: &str, rank: &str) -> Result<Self, CardError> {
        let rank = rank.parse::<Rank>()?;
        let suit = suit.parse::<Suit>()?;
        Ok(Self { suit, rank })
    }

    pub const fn from_parts(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    pub fn outranks(&self, other: &Card) -> bool {
        self.rank > other.rank
    }

    pub fn rank_cmp(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Parses the display form, rank symbol followed by suit symbol (`"10♥"`).
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| CardError::InvalidRank(s.to_string()))?;
        let (rank, suit) = s.split_at(split);
        Card::new(suit, rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
