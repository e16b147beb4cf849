use alloc::string::ToString;

use tracing::{debug, info};

use crate::error::{DealerError, ResetError};
use crate::result::{RoundResult, determine_winner};

use super::{DealerStep, Game, Phase, ResetKind};

impl Game {
    /// Returns whether the dealer still has to draw.
    ///
    /// Always `false` outside the dealer turn.
    #[must_use]
    pub fn dealer_must_draw(&self) -> bool {
        self.phase == Phase::DealerTurn
            && self.dealer_hand.value() < self.options.dealer_stands_on
    }

    /// Plays one step of the dealer's hand.
    ///
    /// Below the stand value the dealer draws one card; otherwise the round
    /// is settled. Hosts that animate the dealer call this once per tick so
    /// each intermediate hand can be shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.phase != Phase::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if self.dealer_must_draw() {
            let card = self.draw();
            self.dealer_hand.add_card(card);
            debug!(%card, value = self.dealer_hand.value(), "dealer draws");
            return Ok(DealerStep::Drew(card));
        }

        Ok(DealerStep::Settled(self.settle()))
    }

    /// Plays the dealer's hand to completion without pausing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn.
    pub fn play_dealer(&mut self) -> Result<RoundResult, DealerError> {
        loop {
            if let DealerStep::Settled(result) = self.dealer_step()? {
                return Ok(result);
            }
        }
    }

    /// Decides the round, pays the player, and records the result.
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let outcome = determine_winner(dealer_value, player_value);
        let payout = self.ledger.settle(outcome);

        let result = RoundResult {
            outcome,
            player_value,
            dealer_value,
            bet: self.ledger.bet(),
            payout,
        };

        self.message = outcome.message().to_string();
        self.last_result = Some(result);
        self.phase = Phase::Settled;

        info!(
            ?outcome,
            won = outcome.is_player_win(),
            player_value,
            dealer_value,
            bet = result.bet,
            payout,
            chips = self.ledger.player_chips(),
            "round settled"
        );
        result
    }

    /// Closes a settled round and opens betting for the next one.
    ///
    /// A player with no chips left gets a full game reset; otherwise chips
    /// carry over and only the table is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn finish_round(&mut self) -> Result<ResetKind, ResetError> {
        if self.phase != Phase::Settled {
            return Err(ResetError::InvalidState);
        }

        if self.ledger.is_broke() {
            self.reset_game();
            Ok(ResetKind::Game)
        } else {
            self.reset_round();
            Ok(ResetKind::Round)
        }
    }
}
