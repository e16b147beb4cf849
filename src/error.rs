//! Error types for game operations.
//!
//! None of these reach the player: the session driver treats every rejection
//! as an ignored intent. They exist so that hosts and tests can tell why a
//! request did nothing.

use thiserror::Error;

/// Drawing from a shoe with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Cards have already been dealt this round.
    #[error("betting is closed for this round")]
    InvalidState,
    /// Bet exceeds the chips the player holds.
    #[error("insufficient chips")]
    InsufficientFunds,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not in the betting phase.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No hand is in progress.
    #[error("no hand in progress")]
    InvalidState,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Not in the dealer turn.
    #[error("invalid game state for dealer play")]
    InvalidState,
}

/// Errors that can occur when closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The round has not been settled.
    #[error("round has not been settled")]
    InvalidState,
}
