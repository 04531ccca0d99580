/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Round-based roulette engine.
//!
//! Two independent tasks drive a table. The [`RoundClock`] sleeps for the
//! round interval, draws a number, advances the shared [`RoundCounter`]
//! and notifies one settlement listener per player. The [`BetIntake`]
//! waits for request lines, validates them and records each bet under the
//! round id it observed. Neither task locks the whole table.
//!
//! # Architecture
//!
//! - The round id is an atomic counter with a single writer (the clock)
//! - Each player's bet history is a concurrent map keyed by round id;
//!   insert-if-absent guarantees at most one bet per player per round
//! - Totals are atomic cells updated with compare-and-swap
//! - Listeners run synchronously on the clock task, in name order
//! - Both loops observe a shutdown signal at every suspension point
//!
//! # Examples
//!
//! ```no_run
//! use roulette_rs::{ConsoleSink, GameConfig, RouletteTable, load_ledger_from_path};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameConfig::default();
//! let ledger = load_ledger_from_path("player_data.txt", &config)?;
//! let handle = RouletteTable::new(config, ledger, Arc::new(ConsoleSink))?.spawn();
//!
//! handle.push("Barbara 6 2.00").await?;
//! handle.push("Tiki_Monkey EVEN 3.50").await?;
//!
//! handle.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod bet;
pub mod choice;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod intake;
pub mod ledger;
pub mod player;
pub mod presentation;
pub mod receipt;
pub mod roster;
pub mod round;
pub mod settlement;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export main types
pub use bet::{Bet, BetRules};
pub use choice::BetChoice;
pub use clock::{RoundClock, RoundListener};
pub use config::GameConfig;
pub use error::{BetRejection, ConfigError, RosterError, RosterLineError, TableError};
pub use event::RoundClosed;
pub use intake::{BetIntake, BetRequest, IntakeMessage};
pub use ledger::PlayerLedger;
pub use player::Player;
pub use presentation::{ConsoleSink, JsonLinesSink, MemorySink, ResultSink};
pub use receipt::IntakeReceipt;
pub use roster::{RosterEntry, load_ledger, load_ledger_from_path, parse_roster_line, read_roster};
pub use round::RoundCounter;
pub use settlement::{BetResult, Outcome, Payouts, evaluate, evaluate_with, settle};
pub use table::{RouletteTable, TableHandle, TableSummary};
