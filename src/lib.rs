//! A single-player console blackjack game against an automated dealer.
//!
//! The crate provides a [`Game`] type that runs the round flow (betting,
//! dealing, the player's turn, the dealer's turn, and settlement) over a
//! six-deck [`Shoe`], and a [`Session`] that plays it over a text console.
//!
//! # Example
//!
//! ```
//! use shoejack::{Card, Game, GameState, Outcome, Rank, Shoe};
//!
//! let shoe = Shoe::stacked(&[
//!     Card::new(Rank::King),
//!     Card::new(Rank::Ace),
//!     Card::new(Rank::Nine),
//!     Card::new(Rank::Seven),
//!     Card::new(Rank::Two),
//! ]);
//! let mut game = Game::new(shoe, 1000);
//!
//! game.bet(100).unwrap();
//! game.deal().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//!
//! let result = game.settle().unwrap();
//! assert_eq!(result.outcome, Outcome::Blackjack);
//! assert_eq!(game.credits(), 1100);
//! assert_eq!(game.state(), GameState::AwaitingBet);
//! ```

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod rules;
pub mod session;
pub mod shoe;

// Re-export main types
pub use card::{Card, RANK_COUNT, RANKS, Rank};
pub use error::{ActionError, BetError, DealError, SessionError, ShoeError, ShowdownError};
pub use game::{Action, Game, GameState};
pub use hand::Hand;
pub use result::{HandSummary, Outcome, RoundResult};
pub use rules::{BLACKJACK, DEALER_STANDS_AT, DECKS, HIDDEN_CARD, INITIAL_CARDS, INITIAL_CREDITS};
pub use session::Session;
pub use shoe::{SHOE_SIZE, Shoe};
