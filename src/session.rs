//! Async driver that runs a [`Game`] for a presentation layer.
//!
//! A [`Session`] owns the game and reads intents from a mailbox one at a
//! time. Dealer draws and the post-settlement pause are timed sleeps inside
//! the actor, so nothing else is read from the mailbox until a sequence has
//! run to the next betting phase. Every change is published as a
//! [`Snapshot`] on a watch channel.
//!
//! ```no_run
//! use blackjack_table::TableOptions;
//! use blackjack_table::session::Session;
//!
//! # async fn run() -> Result<(), blackjack_table::session::SessionClosed> {
//! let (session, mailbox, mut snapshots) = Session::new(TableOptions::default(), 7);
//! tokio::spawn(session.run());
//!
//! mailbox.place_bet(1).await?;
//! mailbox.deal_cards().await?;
//! mailbox.stand().await?;
//! while snapshots.changed().await.is_ok() {
//!     println!("{}", snapshots.borrow().message);
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::game::{DealerStep, Game, Intent, Phase};
use crate::options::TableOptions;
use crate::snapshot::Snapshot;

/// Intents queued before the sender waits.
pub const MAILBOX_CAPACITY: usize = 16;

/// The session has stopped and no longer accepts intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("session has stopped")]
pub struct SessionClosed;

/// Sends player intents to a running [`Session`].
#[derive(Debug, Clone)]
pub struct Mailbox {
    sender: mpsc::Sender<Intent>,
}

impl Mailbox {
    /// Queues an intent.
    ///
    /// Queued intents are applied in order; invalid ones are dropped by the
    /// session without a reply.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session has stopped.
    pub async fn send(&self, intent: Intent) -> Result<(), SessionClosed> {
        self.sender.send(intent).await.map_err(|_| SessionClosed)
    }

    /// Queues [`Intent::PlaceBet`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session has stopped.
    pub async fn place_bet(&self, amount: usize) -> Result<(), SessionClosed> {
        self.send(Intent::PlaceBet(amount)).await
    }

    /// Queues [`Intent::DealCards`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session has stopped.
    pub async fn deal_cards(&self) -> Result<(), SessionClosed> {
        self.send(Intent::DealCards).await
    }

    /// Queues [`Intent::Hit`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session has stopped.
    pub async fn hit(&self) -> Result<(), SessionClosed> {
        self.send(Intent::Hit).await
    }

    /// Queues [`Intent::Stand`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the session has stopped.
    pub async fn stand(&self) -> Result<(), SessionClosed> {
        self.send(Intent::Stand).await
    }
}

/// Actor owning one game.
#[derive(Debug)]
pub struct Session {
    game: Game,
    intents: mpsc::Receiver<Intent>,
    snapshots: watch::Sender<Snapshot>,
}

impl Session {
    /// Creates a session around a fresh game.
    ///
    /// Returns the actor, its mailbox, and a receiver already holding the
    /// opening snapshot. Spawn [`Session::run`] to start it.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> (Self, Mailbox, watch::Receiver<Snapshot>) {
        Self::from_game(Game::new(options, seed))
    }

    /// Creates a session around an existing game.
    #[must_use]
    pub fn from_game(game: Game) -> (Self, Mailbox, watch::Receiver<Snapshot>) {
        let (sender, intents) = mpsc::channel(MAILBOX_CAPACITY);
        let (snapshots, receiver) = watch::channel(game.snapshot());

        let session = Self {
            game,
            intents,
            snapshots,
        };
        (session, Mailbox { sender }, receiver)
    }

    /// Returns a new snapshot receiver.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Processes intents until every [`Mailbox`] is dropped.
    ///
    /// Returns the game as it stood when the last intent was handled.
    pub async fn run(mut self) -> Game {
        while let Some(intent) = self.intents.recv().await {
            if let Err(err) = self.game.apply(intent) {
                debug!(?intent, %err, "intent ignored");
                continue;
            }
            self.publish();

            match self.game.phase() {
                Phase::DealerTurn => {
                    self.dealer_turn().await;
                    self.close_round().await;
                }
                Phase::Settled => self.close_round().await,
                _ => {}
            }
        }

        debug!("mailbox closed, session stopping");
        self.game
    }

    /// Plays the dealer out, pausing before each draw.
    async fn dealer_turn(&mut self) {
        let interval = self.game.options().dealer_draw_interval;

        loop {
            if self.game.dealer_must_draw() {
                sleep(interval).await;
            }

            match self.game.dealer_step() {
                Ok(DealerStep::Drew(_)) => self.publish(),
                Ok(DealerStep::Settled(_)) => {
                    self.publish();
                    return;
                }
                Err(err) => {
                    warn!(%err, "dealer turn interrupted");
                    return;
                }
            }
        }
    }

    /// Holds the settled table on screen, then opens the next round.
    async fn close_round(&mut self) {
        sleep(self.game.options().settle_pause).await;

        match self.game.finish_round() {
            Ok(kind) => {
                debug!(?kind, "round closed");
                self.publish();
            }
            Err(err) => warn!(%err, "round could not be closed"),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.game.snapshot());
    }
}
