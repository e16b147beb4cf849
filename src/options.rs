//! Table configuration options.

use core::time::Duration;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use blackjack_table::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_stake(50)
///     .with_dealer_draw_interval(Duration::from_millis(500));
/// assert_eq!(options.starting_stake, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks the shoe is rebuilt from.
    pub decks: u8,
    /// The shoe is rebuilt at round start when this many cards or fewer remain.
    pub reshuffle_threshold: usize,
    /// Chips given to the player and the dealer on a game reset.
    pub starting_stake: usize,
    /// Dealer stops drawing at this value or higher.
    pub dealer_stands_on: u8,
    /// Chips added to the bet by one bet click.
    pub bet_increment: usize,
    /// Pause before each dealer draw.
    pub dealer_draw_interval: Duration,
    /// Pause between settlement and the next round.
    pub settle_pause: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            reshuffle_threshold: 15,
            starting_stake: 10,
            dealer_stands_on: 17,
            bet_increment: 1,
            dealer_draw_interval: Duration::from_millis(2000),
            settle_pause: Duration::from_millis(3000),
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting stake.
    #[must_use]
    pub const fn with_starting_stake(mut self, stake: usize) -> Self {
        self.starting_stake = stake;
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the bet increment.
    #[must_use]
    pub const fn with_bet_increment(mut self, increment: usize) -> Self {
        self.bet_increment = increment;
        self
    }

    /// Sets the pause before each dealer draw.
    #[must_use]
    pub const fn with_dealer_draw_interval(mut self, interval: Duration) -> Self {
        self.dealer_draw_interval = interval;
        self
    }

    /// Sets the pause after settlement.
    #[must_use]
    pub const fn with_settle_pause(mut self, pause: Duration) -> Self {
        self.settle_pause = pause;
        self
    }
}
