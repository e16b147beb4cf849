//! Chip balances and bet escrow.

use crate::error::BetError;
use crate::result::Outcome;

/// Player and dealer chip balances plus the bet held in escrow.
///
/// Chips only move between `player_chips` and `bet` while betting, and only
/// come back through [`ChipLedger::settle`]. Dealer chips are displayed but
/// never touched by payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipLedger {
    player_chips: usize,
    dealer_chips: usize,
    bet: usize,
}

impl ChipLedger {
    /// Creates a ledger with both balances set to `stake` and nothing escrowed.
    #[must_use]
    pub const fn new(stake: usize) -> Self {
        Self {
            player_chips: stake,
            dealer_chips: stake,
            bet: 0,
        }
    }

    /// Moves `amount` chips from the player's balance into escrow.
    ///
    /// `window_open` is false once cards are on the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the betting window is closed, the amount is zero,
    /// or the player holds fewer than `amount` chips. Nothing changes on error.
    pub const fn place_bet(&mut self, amount: usize, window_open: bool) -> Result<(), BetError> {
        if !window_open {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.player_chips {
            return Err(BetError::InsufficientFunds);
        }

        self.player_chips -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Credits the payout for `outcome` and returns it.
    ///
    /// The escrowed bet stays visible until the next round reset.
    pub const fn settle(&mut self, outcome: Outcome) -> usize {
        let payout = self.bet * outcome.payout_multiplier();
        self.player_chips += payout;
        payout
    }

    /// Clears the escrow for a new round.
    pub const fn reset_round(&mut self) {
        self.bet = 0;
    }

    /// Restores both balances to `stake` and clears the escrow.
    pub const fn reset_game(&mut self, stake: usize) {
        *self = Self::new(stake);
    }

    /// Returns whether the player has no chips left.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.player_chips == 0
    }

    /// Returns the player's chips outside escrow.
    #[must_use]
    pub const fn player_chips(&self) -> usize {
        self.player_chips
    }

    /// Returns the dealer's chips.
    #[must_use]
    pub const fn dealer_chips(&self) -> usize {
        self.dealer_chips
    }

    /// Returns the escrowed bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }
}
