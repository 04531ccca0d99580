/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Table configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```
//! use roulette_rs::GameConfig;
//!
//! let config = GameConfig::from_toml_str("round_interval_secs = 5").unwrap();
//! assert_eq!(config.round_interval_secs, 5);
//! assert_eq!(config.upper_bound, 36);
//! ```

use super::bet::BetRules;
use super::error::ConfigError;
use super::settlement::Payouts;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Number of tokens in a bet request: player, choice and stake.
pub const BET_REQUEST_TOKENS: usize = 3;

/// Settings for one roulette table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lowest number that can be drawn or bet on.
    pub lower_bound: u8,

    /// Highest number that can be drawn or bet on.
    pub upper_bound: u8,

    /// Length of a betting round.
    pub round_interval_secs: u64,

    /// Exclusive upper limit for a stake.
    pub max_bet: Decimal,

    /// Maximum number of fields on a roster line.
    pub roster_tokens: usize,

    /// Field separator for roster lines.
    pub roster_delimiter: char,

    /// Number of whitespace-separated tokens in a bet request.
    pub bet_tokens: usize,

    /// Payout multiplier for a single-number bet.
    pub straight_multiplier: u32,

    /// Payout multiplier for an ODD or EVEN bet.
    pub parity_multiplier: u32,

    /// Bet requests buffered before the reader is made to wait.
    pub request_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lower_bound: 1,
            upper_bound: 36,
            round_interval_secs: 30,
            max_bet: Decimal::from(100),
            roster_tokens: 3,
            roster_delimiter: ',',
            bet_tokens: BET_REQUEST_TOKENS,
            straight_multiplier: 36,
            parity_multiplier: 2,
            request_capacity: 1024,
        }
    }
}

impl GameConfig {
    /// Parses a config from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML, [`ConfigError::Invalid`]
    /// if a value fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks that the table can run with these values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lower_bound > self.upper_bound {
            return Err(invalid(
                "lower_bound",
                format!(
                    "{} is above upper_bound {}",
                    self.lower_bound, self.upper_bound
                ),
            ));
        }
        if self.round_interval_secs == 0 {
            return Err(invalid("round_interval_secs", "must be at least 1".into()));
        }
        if self.max_bet <= Decimal::ZERO {
            return Err(invalid("max_bet", format!("{} is not positive", self.max_bet)));
        }
        if !(1..=3).contains(&self.roster_tokens) {
            return Err(invalid(
                "roster_tokens",
                format!("{} is outside 1..=3", self.roster_tokens),
            ));
        }
        if self.bet_tokens != BET_REQUEST_TOKENS {
            return Err(invalid(
                "bet_tokens",
                format!(
                    "bet requests carry player, choice and stake, {} tokens are not supported",
                    self.bet_tokens
                ),
            ));
        }
        if self.straight_multiplier == 0 {
            return Err(invalid("straight_multiplier", "must be positive".into()));
        }
        if self.parity_multiplier == 0 {
            return Err(invalid("parity_multiplier", "must be positive".into()));
        }
        let top_multiplier = self.straight_multiplier.max(self.parity_multiplier);
        if self.max_bet.checked_mul(Decimal::from(top_multiplier)).is_none() {
            return Err(invalid(
                "max_bet",
                format!("{} overflows when paid at {top_multiplier}x", self.max_bet),
            ));
        }
        if self.request_capacity == 0 {
            return Err(invalid("request_capacity", "must be at least 1".into()));
        }
        Ok(())
    }

    /// Round length as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn round_interval(&self) -> Duration {
        Duration::from_secs(self.round_interval_secs)
    }

    /// Stake and choice limits derived from this config.
    #[must_use]
    pub fn rules(&self) -> BetRules {
        BetRules {
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            max_bet: self.max_bet,
        }
    }

    /// Payout multipliers derived from this config.
    #[must_use]
    pub fn payouts(&self) -> Payouts {
        Payouts {
            straight: Decimal::from(self.straight_multiplier),
            parity: Decimal::from(self.parity_multiplier),
        }
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
