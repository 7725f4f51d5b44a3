//! Participant hands.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::card::Card;
use crate::rules::{BLACKJACK, HIDDEN_CARD, INITIAL_CARDS};

/// Cards held by the player or the dealer for the current round.
///
/// The point total is kept in step with the cards as they arrive. An Ace
/// always counts 11; the hand never re-values it to 1, so two Aces are a
/// bust.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
    /// Sum of the cards' values.
    total_points: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total_points: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total_points = self.total_points.saturating_add(card.value());
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub const fn total_points(&self) -> u8 {
        self.total_points
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == INITIAL_CARDS && self.total_points == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.total_points > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total_points = 0;
    }

    /// Renders the card values separated by spaces.
    ///
    /// With `reveal_all` unset only the first card is shown and every later
    /// card is masked, which is how the dealer's hole card is displayed
    /// during the player's turn.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{Card, Hand, Rank};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::King));
    /// hand.add_card(Card::new(Rank::Seven));
    /// assert_eq!(hand.render(true), "10 7");
    /// assert_eq!(hand.render(false), "10 X");
    /// ```
    #[must_use]
    pub fn render(&self, reveal_all: bool) -> String {
        let mut out = String::new();
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            if reveal_all || index == 0 {
                let _ = write!(out, "{card}");
            } else {
                out.push_str(HIDDEN_CARD);
            }
        }
        out
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        for card in iter {
            hand.add_card(card);
        }
        hand
    }
}
