use tracing::debug;

use crate::error::{BetError, DealError};

use super::{Game, Phase};

impl Game {
    /// Moves `amount` chips from the player into the bet.
    ///
    /// Bets accumulate until the cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase, the amount
    /// is zero, or the player lacks chips. The ledger is untouched on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        let window_open = self.phase == Phase::Betting && self.player_hand.is_empty();
        self.ledger.place_bet(amount, window_open)?;

        debug!(
            amount,
            bet = self.ledger.bet(),
            chips = self.ledger.player_chips(),
            "bet placed"
        );
        Ok(())
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// The dealer's second card is the hole card and stays hidden.
    /// A zero bet is allowed; the round is simply played for nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase.
    pub fn deal_cards(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Betting {
            return Err(DealError::InvalidState);
        }

        self.phase = Phase::Dealt;

        for _ in 0..2 {
            let card = self.draw();
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw();
            self.dealer_hand.add_card(card);
        }

        debug!(
            player = self.player_hand.value(),
            dealer_up = self.dealer_hand.visible_value(),
            bet = self.ledger.bet(),
            "cards dealt"
        );

        self.phase = Phase::PlayerTurn;
        Ok(())
    }
}
