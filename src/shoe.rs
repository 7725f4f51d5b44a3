//! The multi-deck shoe cards are dealt from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANK_COUNT, RANKS};
use crate::error::ShoeError;
use crate::rules::DECKS;

/// Number of cards in a freshly built shoe.
pub const SHOE_SIZE: usize = DECKS * RANK_COUNT;

/// How the shoe orders its cards when shuffled.
#[derive(Debug, Clone)]
enum Ordering {
    /// Uniform random permutation drawn from the generator.
    Random(ChaCha8Rng),
    /// Order is fixed; shuffling leaves the cards untouched.
    Stacked,
}

/// A pool of cards shared by every round of a session.
///
/// The shoe is filled once and never replenished. Cards leave from the end of
/// the sequence (the top of the shoe).
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards remaining, top of the shoe last.
    cards: Vec<Card>,
    ordering: Ordering,
}

impl Shoe {
    /// Creates a full shoe seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a full shoe with a deterministic generator.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{SHOE_SIZE, Shoe};
    ///
    /// let shoe = Shoe::with_seed(42);
    /// assert_eq!(shoe.cards_remaining(), SHOE_SIZE);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Self::fill(),
            ordering: Ordering::Random(rng),
        }
    }

    /// Creates a shoe that deals exactly `draws`, first element first.
    ///
    /// Shuffling a stacked shoe has no effect, so a scripted round plays out
    /// the same way every time.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{Card, Rank, Shoe};
    ///
    /// let mut shoe = Shoe::stacked(&[Card::new(Rank::Ace), Card::new(Rank::Two)]);
    /// shoe.shuffle();
    /// assert_eq!(shoe.deal_card(), Ok(Card::new(Rank::Ace)));
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            ordering: Ordering::Stacked,
        }
    }

    fn fill() -> Vec<Card> {
        let mut cards = Vec::with_capacity(SHOE_SIZE);
        for _ in 0..DECKS {
            cards.extend(RANKS.iter().copied().map(Card::new));
        }
        cards
    }

    /// Reorders the remaining cards uniformly at random.
    ///
    /// The shoe is not refilled; only the cards still in it are reordered.
    pub fn shuffle(&mut self) {
        match &mut self.ordering {
            Ordering::Random(rng) => {
                self.cards.shuffle(rng);
                log::debug!("shuffled shoe, {} cards remaining", self.cards.len());
            }
            Ordering::Stacked => {}
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] once every card has been dealt.
    pub fn deal_card(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or_else(|| {
            log::warn!("shoe exhausted");
            ShoeError::Empty
        })
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top of the shoe last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
