use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

/// A choice offered during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the wager for one more card. Not offered at this table; the
    /// choice is accepted and does nothing.
    DoubleDown,
    /// Give up the turn without drawing.
    Pass,
}

impl Action {
    /// Parses the single-letter menu choice (`H`, `S`, `D`, or `P`).
    ///
    /// Letters are case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::Action;
    ///
    /// assert_eq!(Action::from_choice('H'), Some(Action::Hit));
    /// assert_eq!(Action::from_choice('h'), None);
    /// ```
    #[must_use]
    pub const fn from_choice(choice: char) -> Option<Self> {
        match choice {
            'H' => Some(Self::Hit),
            'S' => Some(Self::Stand),
            'D' => Some(Self::DoubleDown),
            'P' => Some(Self::Pass),
            _ => None,
        }
    }
}

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Applies `action` and returns the card drawn, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or a hit finds the
    /// shoe empty.
    pub fn act(&mut self, action: Action) -> Result<Option<Card>, ActionError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(|()| None),
            Action::DoubleDown => self.double_down().map(|()| None),
            Action::Pass => self.pass().map(|()| None),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the turn and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    /// An empty shoe ends the session.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.is_busted() {
            log::debug!("player busted at {}", self.player.total_points());
            self.state = GameState::Settlement;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Player action: Pass. Ends the turn the same way as standing.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn pass(&mut self) -> Result<(), ActionError> {
        self.stand()
    }

    /// Player action: Double down.
    ///
    /// The table does not offer doubling. The choice is accepted and the
    /// turn continues with the wager and hand unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn double_down(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        log::debug!("double down requested; not offered at this table");
        Ok(())
    }
}
