//! Card types.

use core::fmt;

/// Card rank. The discriminant is the rank's ordinal (2..=14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Every rank in ordinal order, one standard set.
pub const RANKS: [Rank; RANK_COUNT] = [
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

/// Number of ranks in one standard set.
pub const RANK_COUNT: usize = 13;

impl Rank {
    /// Returns the rank's ordinal, from 2 (Two) to 14 (Ace).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the blackjack value of the rank.
    ///
    /// Numeric ranks count their face value, Ten and the court cards count 10,
    /// and an Ace always counts 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            other => other.ordinal(),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{Card, Rank};
    ///
    /// let card = Card::new(Rank::Queen);
    /// assert_eq!(card.rank(), Rank::Queen);
    /// assert_eq!(card.value(), 10);
    /// ```
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self { rank }
    }

    /// Returns the card's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the blackjack value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Self::new(rank)
    }
}

/// Cards display as their blackjack value.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
