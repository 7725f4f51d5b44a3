//! Fixed table rules.
//!
//! The table does not offer rule variants; every value here is a constant.

/// Number of rank sets loaded into the shoe.
pub const DECKS: usize = 6;

/// Credits a new session starts with.
pub const INITIAL_CREDITS: usize = 1000;

/// Total at or above which the dealer stops drawing.
pub const DEALER_STANDS_AT: u8 = 17;

/// Best possible total; anything above it is a bust.
pub const BLACKJACK: u8 = 21;

/// Cards dealt to each participant at the start of a round.
pub const INITIAL_CARDS: usize = 2;

/// Token shown in place of a face-down card.
pub const HIDDEN_CARD: &str = "X";
