/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Bets and the stake rules they must satisfy.

use super::choice::BetChoice;
use super::error::BetRejection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A bet recorded against a round.
///
/// Bets are immutable once created. The round id is the one intake observed
/// when it validated the request, not the one current at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// Name of the player that placed the bet.
    pub player: String,

    /// What the bet covers.
    pub choice: BetChoice,

    /// Amount wagered.
    pub stake: Decimal,

    /// Round the bet is addressed to.
    pub round_id: u64,
}

impl Bet {
    /// Creates a new bet.
    #[must_use]
    pub fn new(player: impl Into<String>, choice: BetChoice, stake: Decimal, round_id: u64) -> Self {
        Self {
            player: player.into(),
            choice,
            stake,
            round_id,
        }
    }
}

/// Table limits applied to every incoming bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetRules {
    /// Lowest number on the table.
    pub lower_bound: u8,

    /// Highest number on the table.
    pub upper_bound: u8,

    /// Exclusive upper limit for a stake.
    pub max_bet: Decimal,
}

impl Default for BetRules {
    fn default() -> Self {
        Self {
            lower_bound: 1,
            upper_bound: 36,
            max_bet: Decimal::from(100),
        }
    }
}

impl BetRules {
    /// Parses a choice token within the table range.
    ///
    /// # Errors
    ///
    /// See [`BetChoice::parse`].
    pub fn parse_choice(&self, token: &str) -> Result<BetChoice, BetRejection> {
        BetChoice::parse(token, self.lower_bound, self.upper_bound)
    }

    /// Parses a stake token and checks `0 < stake < max_bet`.
    ///
    /// # Errors
    ///
    /// [`BetRejection::NonNumericStake`] if the token is not a decimal,
    /// [`BetRejection::InvalidStake`] if it is out of range.
    pub fn parse_stake(&self, token: &str) -> Result<Decimal, BetRejection> {
        let stake = Decimal::from_str(token).map_err(|_| BetRejection::NonNumericStake {
            stake: token.to_string(),
        })?;
        self.check_stake(stake)?;
        Ok(stake)
    }

    /// Checks that `stake` lies in the open interval `(0, max_bet)`.
    ///
    /// # Errors
    ///
    /// Returns [`BetRejection::InvalidStake`] otherwise.
    pub fn check_stake(&self, stake: Decimal) -> Result<(), BetRejection> {
        if stake > Decimal::ZERO && stake < self.max_bet {
            Ok(())
        } else {
            Err(BetRejection::InvalidStake {
                stake,
                max: self.max_bet,
            })
        }
    }
}
