//! Read-only view of the table for a presentation layer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Game, Phase};

/// An intent the player can currently send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Add to the bet.
    PlaceBet,
    /// Finish betting and deal.
    DealCards,
    /// Draw a card.
    Hit,
    /// Keep the hand.
    Stand,
}

/// Everything a renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Cards left in the shoe.
    pub shoe_size: usize,
    /// Player's cards.
    pub player_hand: Vec<Card>,
    /// Player's hand value.
    pub player_value: u8,
    /// Dealer's cards, hole card included.
    pub dealer_hand: Vec<Card>,
    /// Whether the hole card may be shown.
    pub dealer_visible: bool,
    /// Full dealer value if visible, else the up card's value.
    pub dealer_display_value: u8,
    /// Player's chips outside the bet.
    pub player_chips: usize,
    /// Dealer's chips.
    pub dealer_chips: usize,
    /// Escrowed bet.
    pub bet: usize,
    /// Outcome message, empty until settlement.
    pub message: String,
    /// Intents that would be accepted right now.
    pub available_actions: Vec<Action>,
}

impl Snapshot {
    /// Returns whether `action` is currently accepted.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.available_actions.contains(&action)
    }

    /// Returns the dealer cards the player may see.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        if self.dealer_visible {
            &self.dealer_hand
        } else {
            &self.dealer_hand[..self.dealer_hand.len().min(1)]
        }
    }
}

impl Game {
    /// Returns the intents the game would accept in its current state.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        match self.phase() {
            Phase::Betting if self.ledger().player_chips() > 0 => {
                alloc::vec![Action::PlaceBet, Action::DealCards]
            }
            Phase::Betting => alloc::vec![Action::DealCards],
            Phase::PlayerTurn => alloc::vec![Action::Hit, Action::Stand],
            Phase::Idle | Phase::Dealt | Phase::DealerTurn | Phase::Settled => Vec::new(),
        }
    }

    /// Captures the current table state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let dealer = self.dealer_hand();
        let ledger = self.ledger();

        Snapshot {
            phase: self.phase(),
            shoe_size: self.cards_remaining(),
            player_hand: self.player_hand().cards().to_vec(),
            player_value: self.player_hand().value(),
            dealer_hand: dealer.cards().to_vec(),
            dealer_visible: dealer.is_hole_revealed(),
            dealer_display_value: dealer.visible_value(),
            player_chips: ledger.player_chips(),
            dealer_chips: ledger.dealer_chips(),
            bet: ledger.bet(),
            message: self.message().to_string(),
            available_actions: self.available_actions(),
        }
    }
}
