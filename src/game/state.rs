//! Round phase types.

/// Phase of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Between rounds, while the table is being reset.
    Idle,
    /// Accepting bets for the next round.
    Betting,
    /// Initial cards are on the table.
    Dealt,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been decided and paid.
    Settled,
}

/// Which reset closed a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    /// Chips carried over; only hands and bet were cleared.
    Round,
    /// The player was out of chips; stakes and shoe were restored.
    Game,
}

/// What one step of dealer play did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// Dealer drew this card.
    Drew(crate::Card),
    /// Dealer stood and the round was settled.
    Settled(crate::RoundResult),
}
