//! Round controller and state management.

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::GameState;

/// A single-player blackjack table that runs one round at a time.
///
/// The game owns the shoe, both hands, and the player's balance. Each round
/// moves through [`GameState`] in a fixed order: [`bet`](Self::bet),
/// [`deal`](Self::deal), player actions, [`dealer_play`](Self::dealer_play),
/// then [`settle`](Self::settle). Calling an operation out of turn returns an
/// `InvalidState` error and leaves the game untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Current game state.
    state: GameState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Player's balance.
    credits: usize,
    /// Wager for the round in progress.
    bet: Option<usize>,
}

impl Game {
    /// Creates a new game around `shoe` with a starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{Game, GameState, INITIAL_CREDITS, Shoe};
    ///
    /// let game = Game::new(Shoe::with_seed(7), INITIAL_CREDITS);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.credits(), 1000);
    /// ```
    #[must_use]
    pub fn new(shoe: Shoe, credits: usize) -> Self {
        let state = if credits == 0 {
            GameState::SessionOver
        } else {
            GameState::AwaitingBet
        };

        Self {
            shoe,
            state,
            player: Hand::new(),
            dealer: Hand::new(),
            credits,
            bet: None,
        }
    }

    /// Draws a card from the shoe.
    ///
    /// Running out of cards ends the session; the balance is left as is.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.shoe.deal_card();
        if card.is_err() {
            self.state = GameState::SessionOver;
        }
        card
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn credits(&self) -> usize {
        self.credits
    }

    /// Returns the wager for the round in progress.
    #[must_use]
    pub const fn bet_amount(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.cards_remaining()
    }

    /// Returns whether the session has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::SessionOver
    }

    /// Ends the session. No further rounds can be played.
    pub fn finish(&mut self) {
        log::info!("session finished with {} credits", self.credits);
        self.bet = None;
        self.state = GameState::SessionOver;
    }
}
