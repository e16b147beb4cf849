//! Round outcome types and winner determination.

use crate::hand::BUST_LIMIT;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Tie.
    Push,
    /// Dealer has the higher total.
    DealerWins,
}

impl Outcome {
    /// Returns how many times the bet is paid back to the player.
    #[must_use]
    pub const fn payout_multiplier(self) -> usize {
        match self {
            Self::DealerBust | Self::PlayerWins => 2,
            Self::Push => 1,
            Self::PlayerBust | Self::DealerWins => 0,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You went over! Dealer wins.",
            Self::DealerBust | Self::PlayerWins => "You win!",
            Self::Push => "Push!",
            Self::DealerWins => "Dealer wins!",
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// Decides a round from the two totals.
///
/// A player bust loses before the dealer total is even looked at.
///
/// ```
/// use blackjack_table::{Outcome, determine_winner};
///
/// assert_eq!(determine_winner(22, 20), Outcome::DealerBust);
/// assert_eq!(determine_winner(18, 18), Outcome::Push);
/// assert_eq!(determine_winner(10, 23), Outcome::PlayerBust);
/// ```
#[must_use]
pub const fn determine_winner(dealer_sum: u8, player_sum: u8) -> Outcome {
    if player_sum > BUST_LIMIT {
        Outcome::PlayerBust
    } else if dealer_sum > BUST_LIMIT {
        Outcome::DealerBust
    } else if player_sum > dealer_sum {
        Outcome::PlayerWins
    } else if player_sum == dealer_sum {
        Outcome::Push
    } else {
        Outcome::DealerWins
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's hand value at settlement (hidden cards included).
    pub dealer_value: u8,
    /// The escrowed bet.
    pub bet: usize,
    /// Chips credited back to the player.
    pub payout: usize,
}
