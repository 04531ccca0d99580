/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Table wiring.
//!
//! [`RouletteTable`] owns a ledger, a round counter and a sink, builds the
//! clock (one settlement listener per player) and the intake, and spawns
//! both as independent tasks. The two tasks share no lock; they meet only
//! at the round counter and the ledger.

use super::clock::RoundClock;
use super::config::GameConfig;
use super::error::TableError;
use super::intake::{BetIntake, IntakeMessage};
use super::ledger::PlayerLedger;
use super::presentation::ResultSink;
use super::receipt::IntakeReceipt;
use super::round::RoundCounter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::info;

const ROUND_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A configured table, ready to be spawned.
///
/// # Examples
///
/// ```no_run
/// use roulette_rs::{GameConfig, MemorySink, Player, PlayerLedger, RouletteTable};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let ledger: PlayerLedger = [Player::new("Barbara")].into_iter().collect();
/// let table = RouletteTable::new(GameConfig::default(), ledger, Arc::new(MemorySink::new()))?;
/// let handle = table.spawn();
///
/// let receipt = handle.submit("Barbara ODD 1.60").await?;
/// assert!(receipt.is_accepted());
///
/// let summary = handle.shutdown().await?;
/// println!("closed {} rounds", summary.rounds_closed);
/// # Ok(())
/// # }
/// ```
pub struct RouletteTable {
    config: GameConfig,
    ledger: Arc<PlayerLedger>,
    round: RoundCounter,
    sink: Arc<dyn ResultSink>,
    rng: Option<StdRng>,
}

impl RouletteTable {
    /// Creates a table.
    ///
    /// # Errors
    ///
    /// [`TableError::Config`] if `config` does not validate,
    /// [`TableError::NoPlayers`] if the ledger is empty.
    pub fn new(
        config: GameConfig,
        ledger: PlayerLedger,
        sink: Arc<dyn ResultSink>,
    ) -> Result<Self, TableError> {
        config.validate()?;
        if ledger.is_empty() {
            return Err(TableError::NoPlayers);
        }
        Ok(Self {
            config,
            ledger: Arc::new(ledger),
            round: RoundCounter::new(),
            sink,
            rng: None,
        })
    }

    /// Seeds the draw so the sequence of winning numbers is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    /// Starts numbering rounds at `round_id`.
    #[must_use]
    pub fn starting_round(mut self, round_id: u64) -> Self {
        self.round = RoundCounter::starting_at(round_id);
        self
    }

    /// The ledger the table records into.
    #[must_use]
    pub fn ledger(&self) -> &Arc<PlayerLedger> {
        &self.ledger
    }

    /// Builds the clock with one settlement listener per player.
    #[must_use]
    pub fn build_clock(&mut self) -> RoundClock {
        let mut clock = RoundClock::new(&self.config, self.round.clone(), Arc::clone(&self.sink));
        if let Some(rng) = self.rng.take() {
            clock = clock.with_rng(rng);
        }
        clock.register_ledger(&self.ledger, self.config.payouts());
        clock
    }

    /// Builds the intake for this table.
    #[must_use]
    pub fn build_intake(&self) -> BetIntake {
        BetIntake::new(
            &self.config,
            Arc::clone(&self.ledger),
            self.round.clone(),
            Arc::clone(&self.sink),
        )
    }

    /// Spawns the clock and intake tasks.
    #[must_use]
    pub fn spawn(mut self) -> TableHandle {
        let (request_tx, request_rx) = mpsc::channel(self.config.request_capacity);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let clock = self.build_clock();
        info!(
            players = self.ledger.len(),
            listeners = clock.listener_count(),
            interval_secs = self.config.round_interval_secs,
            "starting roulette table"
        );
        let intake = self.build_intake();

        TableHandle {
            requests: request_tx,
            shutdown: shutdown_tx,
            clock: clock.spawn(shutdown_rx.clone()),
            intake: intake.spawn(request_rx, shutdown_rx),
            round: self.round,
            ledger: self.ledger,
        }
    }
}

/// Counts reported when a table shuts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    /// Rounds the clock closed.
    pub rounds_closed: u64,

    /// Requests intake processed.
    pub requests_processed: u64,
}

/// Handle to a running table.
pub struct TableHandle {
    requests: mpsc::Sender<IntakeMessage>,
    shutdown: watch::Sender<bool>,
    clock: tokio::task::JoinHandle<u64>,
    intake: tokio::task::JoinHandle<u64>,
    round: RoundCounter,
    ledger: Arc<PlayerLedger>,
}

impl TableHandle {
    /// Submits a request line and waits for its receipt.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Shutdown`] if intake has stopped.
    pub async fn submit(&self, line: impl Into<String>) -> Result<IntakeReceipt, TableError> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send((line.into(), Some(tx)))
            .await
            .map_err(|_| TableError::Shutdown)?;
        rx.await.map_err(|_| TableError::Shutdown)
    }

    /// Queues a request line without waiting for its receipt.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Shutdown`] if intake has stopped.
    pub async fn push(&self, line: impl Into<String>) -> Result<(), TableError> {
        self.requests
            .send((line.into(), None))
            .await
            .map_err(|_| TableError::Shutdown)
    }

    /// Returns a clone of the request sender.
    ///
    /// Intake stops once every sender, including the handle's own, is dropped.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<IntakeMessage> {
        self.requests.clone()
    }

    /// The round currently accepting bets.
    #[must_use]
    pub fn current_round(&self) -> u64 {
        self.round.current()
    }

    /// The ledger the table records into.
    #[must_use]
    pub fn ledger(&self) -> &Arc<PlayerLedger> {
        &self.ledger
    }

    /// Resolves once the clock has closed `round_id`.
    ///
    /// Listeners for that round may still be running when this returns.
    pub async fn wait_round_closed(&self, round_id: u64) {
        while self.round.current() <= round_id {
            tokio::time::sleep(ROUND_POLL_INTERVAL).await;
        }
    }

    /// Signals both tasks to stop and waits for them.
    ///
    /// Requests already queued are processed before intake stops. A round
    /// being settled when the signal arrives finishes first.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Join`] if either task panicked.
    pub async fn shutdown(self) -> Result<TableSummary, TableError> {
        let _ = self.shutdown.send(true);
        drop(self.requests);
        let rounds_closed = self.clock.await?;
        let requests_processed = self.intake.await?;
        info!(rounds_closed, requests_processed, "roulette table stopped");
        Ok(TableSummary {
            rounds_closed,
            requests_processed,
        })
    }
}
