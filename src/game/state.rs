//! Game state types.

/// Phase of the round controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to place a wager.
    AwaitingBet,
    /// Wager accepted; initial cards are next.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the wager can be settled.
    Settlement,
    /// The player is out of credits, has left, or the shoe ran dry.
    SessionOver,
}
