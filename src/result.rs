//! Round outcome types for settlement.

use core::fmt;

use crate::hand::Hand;

/// What the settlement rules need to know about one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSummary {
    /// Point total.
    pub total: u8,
    /// Two cards totalling 21.
    pub blackjack: bool,
    /// Total over 21.
    pub busted: bool,
}

impl From<&Hand> for HandSummary {
    fn from(hand: &Hand) -> Self {
        Self {
            total: hand.total_points(),
            blackjack: hand.has_blackjack(),
            busted: hand.is_busted(),
        }
    }
}

/// Outcome of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player has blackjack and the dealer does not.
    Blackjack,
    /// Dealer has blackjack and the player does not.
    DealerBlackjack,
    /// Player went over 21.
    Bust,
    /// Dealer busted or the player's total is higher.
    Win,
    /// Dealer's total is higher.
    Lose,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Decides the round. Rules are checked in order and the first match wins.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{HandSummary, Outcome};
    ///
    /// let player = HandSummary { total: 21, blackjack: true, busted: false };
    /// let dealer = HandSummary { total: 21, blackjack: false, busted: false };
    /// assert_eq!(Outcome::resolve(player, dealer), Outcome::Blackjack);
    /// ```
    #[must_use]
    pub const fn resolve(player: HandSummary, dealer: HandSummary) -> Self {
        if player.blackjack && !dealer.blackjack {
            Self::Blackjack
        } else if dealer.blackjack && !player.blackjack {
            Self::DealerBlackjack
        } else if player.busted {
            Self::Bust
        } else if dealer.busted || player.total > dealer.total {
            Self::Win
        } else if player.total < dealer.total {
            Self::Lose
        } else {
            Self::Push
        }
    }

    /// Returns the signed credit change for a wager of `bet`.
    ///
    /// Wins pay even money; blackjack is not paid a premium.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets are bounded by the balance")]
    pub const fn net(self, bet: usize) -> isize {
        match self {
            Self::Blackjack | Self::Win => bet as isize,
            Self::DealerBlackjack | Self::Bust | Self::Lose => -(bet as isize),
            Self::Push => 0,
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }
}

/// Announcement printed at the end of the round.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "Blackjack! You win!",
            Self::DealerBlackjack => "Dealer has Blackjack. You lose!",
            Self::Bust => "Busted! You lose!",
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Push => "It's a tie!",
        })
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount wagered.
    pub bet: usize,
    /// Net credit change (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Balance after settlement.
    pub credits: usize,
}
