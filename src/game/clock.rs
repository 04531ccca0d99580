/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Round clock.
//!
//! The clock is the table's heartbeat. Each tick it sleeps for the round
//! interval, draws a number, advances the [`RoundCounter`] and publishes a
//! [`RoundClosed`] event to every listener, synchronously and in
//! registration order. The next sleep does not start until every listener
//! has returned, so a slow listener delays the next round.

use super::config::GameConfig;
use super::event::{RoundClosed, nanos_since_epoch};
use super::ledger::PlayerLedger;
use super::presentation::ResultSink;
use super::round::RoundCounter;
use super::settlement::Payouts;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Type alias for round listener functions.
pub type RoundListener = Arc<dyn Fn(&RoundClosed) + Send + Sync>;

/// Draws numbers and closes rounds on a fixed cadence.
///
/// # Examples
///
/// ```
/// use roulette_rs::{GameConfig, MemorySink, RoundClock, RoundCounter};
/// use std::sync::Arc;
///
/// let round = RoundCounter::new();
/// let mut clock = RoundClock::new(&GameConfig::default(), round.clone(), Arc::new(MemorySink::new()));
/// let event = clock.tick_with(17);
/// assert_eq!(event.round_id, 0);
/// assert_eq!(round.current(), 1);
/// ```
pub struct RoundClock {
    round: RoundCounter,
    lower_bound: u8,
    upper_bound: u8,
    interval: Duration,
    rng: StdRng,
    sink: Arc<dyn ResultSink>,
    listeners: Vec<RoundListener>,
}

impl RoundClock {
    /// Creates a clock driving `round`, reporting headers to `sink`.
    #[must_use]
    pub fn new(config: &GameConfig, round: RoundCounter, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            round,
            lower_bound: config.lower_bound,
            upper_bound: config.upper_bound,
            interval: config.round_interval(),
            rng: StdRng::from_entropy(),
            sink,
            listeners: Vec::new(),
        }
    }

    /// Replaces the random source, e.g. with a seeded one for reproducible draws.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Overrides the round interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Registers a listener.
    ///
    /// Listeners are called synchronously, in registration order, after
    /// the round counter has advanced.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&RoundClosed) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Registers one settlement listener per ledger player, in name order.
    ///
    /// Each listener settles its player's bet for the closed round, if
    /// there is one, and writes the result row to the clock's sink.
    pub fn register_ledger(&mut self, ledger: &PlayerLedger, payouts: Payouts) {
        for player in ledger.players() {
            let sink = Arc::clone(&self.sink);
            self.add_listener(move |event| {
                if let Some(result) =
                    player.settle_round(event.round_id, event.winning_number, &payouts)
                {
                    sink.result_row(&result, player.total_bet(), player.total_win());
                }
            });
        }
    }

    /// Number of registered listeners.
    #[inline]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The counter this clock advances.
    #[must_use]
    pub fn round(&self) -> &RoundCounter {
        &self.round
    }

    /// Draws a number uniformly from `[lower_bound, upper_bound]`.
    pub fn draw(&mut self) -> u8 {
        self.rng.gen_range(self.lower_bound..=self.upper_bound)
    }

    /// Closes the current round with a fresh draw.
    pub fn tick(&mut self) -> RoundClosed {
        debug!("generating the winning number of the current round");
        let winning_number = self.draw();
        self.tick_with(winning_number)
    }

    /// Closes the current round with `winning_number` as the draw.
    ///
    /// Advances the counter, writes the result header and notifies every
    /// listener before returning.
    pub fn tick_with(&mut self, winning_number: u8) -> RoundClosed {
        let closed_round = self.round.advance();
        let event = RoundClosed::new(closed_round, winning_number, nanos_since_epoch());
        info!(round_id = closed_round, winning_number, "round closed");

        self.sink.round_header(&event);
        for listener in &self.listeners {
            listener(&event);
        }
        event
    }

    /// Runs ticks until `shutdown` flips or its sender is dropped.
    ///
    /// Returns the number of rounds closed.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        let mut closed = 0u64;
        while !*shutdown.borrow() {
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {
                    self.tick();
                    closed = closed.saturating_add(1);
                }
                _ = shutdown.changed() => break,
            }
        }
        info!(rounds = closed, "round clock stopped");
        closed
    }

    /// Spawns [`run`](Self::run) on a new task.
    #[must_use]
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> tokio::task::JoinHandle<u64> {
        tokio::spawn(self.run(shutdown))
    }
}
