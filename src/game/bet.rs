use crate::error::{BetError, DealError};
use crate::rules::INITIAL_CARDS;

use super::{Game, GameState};

impl Game {
    /// Places the wager for the next round.
    ///
    /// The balance is not touched until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, the bet is zero,
    /// or the bet exceeds the balance.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.credits {
            return Err(BetError::InsufficientFunds);
        }

        log::info!("bet {amount} of {} credits", self.credits);
        self.bet = Some(amount);
        self.state = GameState::Dealing;

        Ok(())
    }

    /// Shuffles the shoe and deals the opening cards.
    ///
    /// Both hands are cleared, then two cards go to the player followed by
    /// two to the dealer. An opening hand that is already over 21 (a pair of
    /// Aces) ends the player's turn on the spot and skips the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or the shoe runs out. An
    /// empty shoe ends the session.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.shoe.shuffle();
        self.player.clear();
        self.dealer.clear();

        for _ in 0..INITIAL_CARDS {
            let card = self.draw()?;
            self.player.add_card(card);
        }

        for _ in 0..INITIAL_CARDS {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealt player [{}], dealer [{}]; {} cards left",
            self.player.render(true),
            self.dealer.render(true),
            self.shoe.cards_remaining()
        );

        self.state = if self.player.is_busted() {
            GameState::Settlement
        } else {
            GameState::PlayerTurn
        };

        Ok(())
    }
}
