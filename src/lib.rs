//! A single-player blackjack table with a chip economy.
//!
//! The crate provides a [`Game`] type that runs the round flow: betting,
//! dealing, player hits and stands, dealer play, settlement, and the reset
//! into the next round. With the `session` feature, [`session::Session`]
//! drives a game on a tokio task, applying intents one at a time and
//! publishing a [`Snapshot`] after every change.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, Phase, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! game.place_bet(3).unwrap();
//! game.deal_cards().unwrap();
//! if game.phase() == Phase::PlayerTurn {
//!     game.stand().unwrap();
//!     let result = game.play_dealer().unwrap();
//!     println!("{}", result.outcome.message());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
#[cfg(feature = "session")]
#[cfg_attr(docsrs, doc(cfg(feature = "session")))]
pub mod session;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, DealerError, EmptyShoeError, ResetError};
pub use game::{DealerStep, Game, Intent, IntentError, Phase, ResetKind};
pub use hand::{DealerHand, Hand, hand_value};
pub use ledger::ChipLedger;
pub use options::TableOptions;
pub use result::{Outcome, RoundResult, determine_winner};
pub use shoe::Shoe;
pub use snapshot::{Action, Snapshot};
