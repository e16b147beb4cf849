use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, Phase};

/// Player value at which a hit ends the round on the spot.
const HIT_SETTLES_ABOVE: u8 = 20;

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the hand reaches 21 or busts, the round is settled immediately
    /// against the dealer's full two-card value. The dealer does not draw
    /// and the hole card stays hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw();
        self.player_hand.add_card(card);

        let value = self.player_hand.value();
        debug!(%card, value, "player hit");

        if value > HIT_SETTLES_ABOVE {
            self.settle();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card and hands the turn to the dealer. Drive the
    /// dealer with [`Game::dealer_step`] or [`Game::play_dealer`].
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer_hand.reveal_hole();
        self.phase = Phase::DealerTurn;
        debug!(
            player = self.player_hand.value(),
            dealer = self.dealer_hand.value(),
            "player stands"
        );

        Ok(())
    }
}
