/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Settlement engine.
//!
//! Turns a drawn number and a recorded [`Bet`] into an [`Outcome`] and a
//! payout. Everything here is pure: no clock, no ledger, no I/O.

use super::bet::Bet;
use super::choice::BetChoice;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a bet won or lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// The drawn number is covered by the bet.
    Win,

    /// The drawn number is not covered by the bet.
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => f.write_str("WIN"),
            Self::Lose => f.write_str("LOSE"),
        }
    }
}

/// Payout multipliers applied to a winning stake.
///
/// The payout includes the returned stake: a straight win at 36 on a stake
/// of 2 pays 72.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payouts {
    /// Multiplier for a single-number bet.
    pub straight: Decimal,

    /// Multiplier for an ODD or EVEN bet.
    pub parity: Decimal,
}

impl Default for Payouts {
    fn default() -> Self {
        Self {
            straight: Decimal::from(36),
            parity: Decimal::from(2),
        }
    }
}

impl Payouts {
    /// Returns the multiplier that applies to `choice`.
    #[inline]
    #[must_use]
    pub fn multiplier(&self, choice: BetChoice) -> Decimal {
        if choice.is_parity() {
            self.parity
        } else {
            self.straight
        }
    }
}

/// The settled form of a bet, as presented in the round result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResult {
    /// Player that placed the bet.
    pub player: String,

    /// Round the bet was settled in.
    pub round_id: u64,

    /// Number drawn for the round.
    pub winning_number: u8,

    /// What the bet covered.
    pub choice: BetChoice,

    /// Amount wagered.
    pub stake: Decimal,

    /// Whether the bet won.
    pub outcome: Outcome,

    /// Amount paid out, zero on a loss.
    pub payout: Decimal,
}

impl BetResult {
    /// Returns `true` if the bet won.
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}

/// Evaluates `bet` against `winning_number` with the standard multipliers.
///
/// # Examples
///
/// ```
/// use roulette_rs::{Bet, BetChoice, Outcome, evaluate};
/// use rust_decimal::Decimal;
///
/// let bet = Bet::new("Barbara", BetChoice::Straight(6), Decimal::new(200, 2), 10);
/// assert_eq!(evaluate(6, &bet), (Outcome::Win, Decimal::new(7200, 2)));
/// assert_eq!(evaluate(7, &bet), (Outcome::Lose, Decimal::ZERO));
/// ```
#[must_use]
pub fn evaluate(winning_number: u8, bet: &Bet) -> (Outcome, Decimal) {
    evaluate_with(&Payouts::default(), winning_number, bet)
}

/// Evaluates `bet` against `winning_number` with explicit multipliers.
///
/// A payout too large for [`Decimal`] saturates at [`Decimal::MAX`].
#[must_use]
pub fn evaluate_with(payouts: &Payouts, winning_number: u8, bet: &Bet) -> (Outcome, Decimal) {
    if bet.choice.covers(winning_number) {
        (
            Outcome::Win,
            bet.stake.saturating_mul(payouts.multiplier(bet.choice)),
        )
    } else {
        (Outcome::Lose, Decimal::ZERO)
    }
}

/// Evaluates `bet` and packages the result for presentation.
#[must_use]
pub fn settle(payouts: &Payouts, winning_number: u8, bet: &Bet) -> BetResult {
    let (outcome, payout) = evaluate_with(payouts, winning_number, bet);
    BetResult {
        player: bet.player.clone(),
        round_id: bet.round_id,
        winning_number,
        choice: bet.choice,
        stake: bet.stake,
        outcome,
        payout,
    }
}
