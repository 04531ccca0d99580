/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Player state: identity, running totals and per-round history.

use super::bet::Bet;
use super::error::BetRejection;
use super::settlement::{BetResult, Payouts, settle};
use crossbeam::atomic::AtomicCell;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, trace};

/// A player seated at the table.
///
/// All mutation goes through `&self`: bet history and result history are
/// concurrent maps keyed by round id, and the totals are atomic cells. A
/// round key, once set, is never overwritten.
pub struct Player {
    name: String,
    total_bet: AtomicCell<Decimal>,
    total_win: AtomicCell<Decimal>,
    bet_history: DashMap<u64, Bet>,
    result_history: DashMap<u64, BetResult>,
}

impl Player {
    /// Creates a player with zero totals.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_totals(name, Decimal::ZERO, Decimal::ZERO)
    }

    /// Creates a player carrying totals from an earlier session.
    #[must_use]
    pub fn with_totals(name: impl Into<String>, total_bet: Decimal, total_win: Decimal) -> Self {
        Self {
            name: name.into(),
            total_bet: AtomicCell::new(total_bet),
            total_win: AtomicCell::new(total_win),
            bet_history: DashMap::new(),
            result_history: DashMap::new(),
        }
    }

    /// The player's unique name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of every stake the player has wagered.
    #[inline]
    #[must_use]
    pub fn total_bet(&self) -> Decimal {
        self.total_bet.load()
    }

    /// Sum of every payout the player has received.
    #[inline]
    #[must_use]
    pub fn total_win(&self) -> Decimal {
        self.total_win.load()
    }

    /// Returns the bet recorded for `round_id`, if any.
    #[must_use]
    pub fn bet_for(&self, round_id: u64) -> Option<Bet> {
        self.bet_history.get(&round_id).map(|entry| entry.value().clone())
    }

    /// Returns the settled result for `round_id`, if any.
    #[must_use]
    pub fn result_for(&self, round_id: u64) -> Option<BetResult> {
        self.result_history
            .get(&round_id)
            .map(|entry| entry.value().clone())
    }

    /// Number of rounds the player has placed a bet in.
    #[inline]
    #[must_use]
    pub fn bet_count(&self) -> usize {
        self.bet_history.len()
    }

    /// Records `bet` under its round id and adds its stake to the total bet.
    ///
    /// The check and the insert happen under the same map entry, so two
    /// concurrent bets for one round cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`BetRejection::DuplicateBet`] if the round already holds a
    /// bet. Nothing is mutated in that case.
    pub fn record_bet(&self, bet: Bet) -> Result<(), BetRejection> {
        match self.bet_history.entry(bet.round_id) {
            Entry::Occupied(_) => Err(BetRejection::DuplicateBet {
                player: self.name.clone(),
                round_id: bet.round_id,
            }),
            Entry::Vacant(slot) => {
                let stake = bet.stake;
                slot.insert(bet);
                accumulate(&self.total_bet, stake);
                Ok(())
            }
        }
    }

    /// Settles the player's bet for a closed round.
    ///
    /// Returns `None` if the player has no bet for `round_id` or the round
    /// was already settled; neither changes any total.
    pub fn settle_round(
        &self,
        round_id: u64,
        winning_number: u8,
        payouts: &Payouts,
    ) -> Option<BetResult> {
        let Some(bet) = self.bet_for(round_id) else {
            trace!(player = %self.name, round_id, "no bet for round");
            return None;
        };

        let result = settle(payouts, winning_number, &bet);
        match self.result_history.entry(round_id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                accumulate(&self.total_win, result.payout);
                slot.insert(result.clone());
                debug!(
                    player = %self.name,
                    round_id,
                    outcome = %result.outcome,
                    payout = %result.payout,
                    "bet settled"
                );
                Some(result)
            }
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("total_bet", &self.total_bet())
            .field("total_win", &self.total_win())
            .field("bets", &self.bet_history.len())
            .finish()
    }
}

/// Atomically adds `amount` to `cell`, returning the new value.
fn accumulate(cell: &AtomicCell<Decimal>, amount: Decimal) -> Decimal {
    let previous = cell
        .fetch_update(|current| Some(current.saturating_add(amount)))
        .unwrap_or_else(|current| current);
    previous.saturating_add(amount)
}
