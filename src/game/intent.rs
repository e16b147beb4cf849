//! Player intents forwarded by a presentation layer.

use thiserror::Error;
use tracing::debug;

use crate::error::{ActionError, BetError, DealError};

use super::Game;

/// A request from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Add chips to the bet.
    PlaceBet(usize),
    /// Finish betting and deal.
    DealCards,
    /// Draw a card.
    Hit,
    /// Keep the hand and let the dealer play.
    Stand,
}

/// Why an intent was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntentError {
    /// Bet rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Deal rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Hit or stand rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl Game {
    /// Applies a player intent.
    ///
    /// After a successful [`Intent::Stand`] the game is in the dealer turn;
    /// the caller drives the dealer from there.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the game is unchanged on error.
    pub fn apply(&mut self, intent: Intent) -> Result<(), IntentError> {
        debug!(?intent, phase = ?self.phase, "applying intent");
        match intent {
            Intent::PlaceBet(amount) => self.place_bet(amount)?,
            Intent::DealCards => self.deal_cards()?,
            Intent::Hit => {
                self.hit()?;
            }
            Intent::Stand => self.stand()?,
        }
        Ok(())
    }
}
