//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the current balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The shoe ran out while dealing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The shoe ran out on a hit.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe ran out while the dealer had to draw.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The shoe was exhausted mid-session.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// The engine rejected a step because it was out of turn.
    #[error("game engine driven out of turn")]
    InvalidState,
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

macro_rules! impl_from_phase_error {
    ($($phase:ident),+) => {
        $(
            impl From<$phase> for SessionError {
                fn from(err: $phase) -> Self {
                    match err {
                        $phase::Shoe(err) => Self::Shoe(err),
                        $phase::InvalidState => Self::InvalidState,
                    }
                }
            }
        )+
    };
}

impl_from_phase_error!(DealError, ActionError, ShowdownError);
