use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{HandSummary, Outcome, RoundResult};
use crate::rules::DEALER_STANDS_AT;

use super::{Game, GameState};

impl Game {
    /// Plays one step of the dealer's turn.
    ///
    /// Draws a card while the dealer is below 17 and returns it. Once the
    /// dealer stands, returns `None` and moves on to settlement. There is no
    /// soft 17 rule; an Ace always counts 11.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe is empty
    /// while the dealer must draw. An empty shoe ends the session.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if self.dealer.total_points() >= DEALER_STANDS_AT {
            log::debug!("dealer stands at {}", self.dealer.total_points());
            self.state = GameState::Settlement;
            return Ok(None);
        }

        let card = self.draw()?;
        self.dealer.add_card(card);
        log::debug!("dealer draws {card}, now {}", self.dealer.total_points());

        Ok(Some(card))
    }

    /// Dealer plays their hand to completion.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_step()? {
            drawn_cards.push(card);
        }
        Ok(drawn_cards)
    }

    /// Decides the round and applies the wager to the balance.
    ///
    /// A win adds the bet, a loss removes it, and a push leaves the balance
    /// alone. The game then waits for the next bet, or ends the session if
    /// the balance reached zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready to settle.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }
        let bet = self.bet.take().ok_or(ShowdownError::InvalidState)?;

        let outcome = Outcome::resolve(
            HandSummary::from(&self.player),
            HandSummary::from(&self.dealer),
        );
        let net = outcome.net(bet);
        self.credits = self.credits.saturating_add_signed(net);

        log::info!("round settled: {outcome:?}, net {net}, balance {}", self.credits);

        self.state = if self.credits == 0 {
            GameState::SessionOver
        } else {
            GameState::AwaitingBet
        };

        Ok(RoundResult {
            outcome,
            bet,
            net,
            player_value: self.player.total_points(),
            dealer_value: self.dealer.total_points(),
            credits: self.credits,
        })
    }
}
