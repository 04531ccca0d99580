/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # roulette-rs
//!
//! A concurrent, round-based roulette engine.
//!
//! Players submit bets against the round currently open while an
//! independent clock periodically closes the round, draws a number and
//! settles every bet placed in it. The engine guarantees, without a lock
//! over the whole table, that:
//!
//! - a player holds at most one bet per round,
//! - a bet is settled against exactly the round it was recorded under,
//! - a closed round id is never handed out again.
//!
//! ## Quick start
//!
//! ```
//! use roulette_rs::{Bet, BetChoice, Outcome, Player, Payouts};
//! use rust_decimal::Decimal;
//!
//! let player = Player::new("Barbara");
//! player
//!     .record_bet(Bet::new("Barbara", BetChoice::Odd, Decimal::new(160, 2), 0))
//!     .unwrap();
//!
//! let result = player.settle_round(0, 11, &Payouts::default()).unwrap();
//! assert_eq!(result.outcome, Outcome::Win);
//! assert_eq!(result.payout, Decimal::new(320, 2));
//! assert_eq!(player.total_win(), Decimal::new(320, 2));
//! ```
//!
//! See [`game`] for the architecture and [`RouletteTable`] for running a
//! full table.

pub mod game;

pub use game::*;
