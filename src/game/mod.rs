//! Round controller and table state.

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::ledger::ChipLedger;
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod intent;
pub mod state;

pub use intent::{Intent, IntentError};
pub use state::{DealerStep, Phase, ResetKind};

/// A single-player blackjack table.
///
/// The game owns the shoe, both hands, and the chip ledger. Every operation
/// takes `&mut self` and either completes a whole transition or returns an
/// error without touching anything.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    options: TableOptions,
    /// Current phase.
    phase: Phase,
    /// Cards left to draw.
    shoe: Shoe,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Chip balances and escrow.
    ledger: ChipLedger,
    /// Outcome message for the settled round.
    message: String,
    /// Result of the settled round, until the next reset.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and opens betting.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, Phase, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Betting);
    /// assert_eq!(game.ledger().player_chips(), 10);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut game = Self {
            ledger: ChipLedger::new(options.starting_stake),
            shoe: Shoe::default(),
            options,
            phase: Phase::Idle,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            message: String::new(),
            last_result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.reset_game();
        game
    }

    /// Rebuilds the shoe from full decks.
    fn reshuffle(&mut self) {
        self.shoe = Shoe::generate(self.options.decks.max(1));
        debug!(cards = self.shoe.len(), "shoe rebuilt");
    }

    /// Draws a card, rebuilding the shoe first if it has run dry.
    fn draw(&mut self) -> Card {
        loop {
            match self.shoe.draw(&mut self.rng) {
                Ok(card) => {
                    trace!(%card, remaining = self.shoe.len(), "card drawn");
                    return card;
                }
                Err(err) => {
                    warn!(%err, "forcing reshuffle mid-round");
                    self.reshuffle();
                }
            }
        }
    }

    /// Clears the table for a new round and opens betting.
    ///
    /// Chips carry over. The shoe is rebuilt if it is at or below the
    /// reshuffle threshold. Returns whether a reshuffle happened.
    fn reset_round(&mut self) -> bool {
        self.phase = Phase::Idle;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.ledger.reset_round();
        self.message.clear();
        self.last_result = None;

        let reshuffled = self.shoe.needs_reshuffle(self.options.reshuffle_threshold);
        if reshuffled {
            self.reshuffle();
        }

        self.phase = Phase::Betting;
        debug!(
            shoe = self.shoe.len(),
            chips = self.ledger.player_chips(),
            "betting open"
        );
        reshuffled
    }

    /// Restores both stakes, rebuilds the shoe, and opens betting.
    fn reset_game(&mut self) {
        self.ledger.reset_game(self.options.starting_stake);
        self.reshuffle();
        self.reset_round();
        info!(stake = self.options.starting_stake, "new game");
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Replaces the shoe.
    ///
    /// Pair with [`Shoe::stacked`] to script the next draws. A shoe that runs
    /// dry mid-round is rebuilt from full decks before the draw.
    pub fn set_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the chip ledger.
    pub const fn ledger(&self) -> &ChipLedger {
        &self.ledger
    }

    /// Returns the outcome message, empty until the round is settled.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the result of the settled round.
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }
}
