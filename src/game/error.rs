/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the roulette engine.
//!
//! Bet rejections are ordinary values: intake converts every validation
//! failure into a [`BetRejection`] and keeps running. Only roster, config
//! and task failures are surfaced as hard errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a bet request is refused by intake.
///
/// Every variant renders as a one-line, human-readable explanation suitable
/// for echoing back to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetRejection {
    /// The request did not split into the expected number of tokens.
    #[error("'{line}' was malformed. The format is 'Username Choice Stake'")]
    Malformed {
        /// The raw request line.
        line: String,
    },

    /// The named player is not present in the ledger.
    #[error("player '{player}' does not exist in record, please check the spelling")]
    UnknownPlayer {
        /// The name that was looked up.
        player: String,
    },

    /// The choice is neither a number inside the table range nor ODD/EVEN.
    #[error("choice '{choice}' is invalid, it must be a number in {lower}-{upper} inclusive, ODD or EVEN")]
    InvalidChoice {
        /// The choice token as submitted.
        choice: String,
        /// Lowest number on the table.
        lower: u8,
        /// Highest number on the table.
        upper: u8,
    },

    /// The stake token is not a decimal number.
    #[error("stake '{stake}' is not a number (i.e. 0.15, 3.50)")]
    NonNumericStake {
        /// The stake token as submitted.
        stake: String,
    },

    /// The stake is zero, negative, or not strictly below the maximum bet.
    #[error("stake {stake} is out of range, it must be above 0 and below {max}")]
    InvalidStake {
        /// The parsed stake.
        stake: Decimal,
        /// The configured maximum bet (exclusive).
        max: Decimal,
    },

    /// The player already holds a bet for this round.
    #[error("a bet from {player} was already made for round {round_id}, it cannot be changed")]
    DuplicateBet {
        /// The player that attempted the second bet.
        player: String,
        /// The round the bet was addressed to.
        round_id: u64,
    },
}

/// Errors raised while loading the player roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster source could not be read.
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    /// The roster held no valid player entries.
    #[error("roster was empty or did not have any valid entries")]
    Empty,
}

/// Errors raised while loading or validating [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot run with.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was refused.
        reason: String,
    },
}

/// Errors that can occur when driving a running [`RouletteTable`](super::RouletteTable).
#[derive(Debug, Error)]
pub enum TableError {
    /// The table has no players; no game can be played.
    #[error("no players registered, a game cannot start without players")]
    NoPlayers,

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The intake task is no longer accepting requests.
    #[error("table has been shut down")]
    Shutdown,

    /// A spawned task panicked or was cancelled.
    #[error("table task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Reasons a single roster line is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterLineError {
    /// The line has more fields than the roster format allows.
    #[error("'{line}' was malformed. The format is 'Username[,TotalWin[,TotalBet]]'")]
    TooManyFields {
        /// The raw line.
        line: String,
    },

    /// The name field is empty.
    #[error("the user name cannot be empty")]
    EmptyName,

    /// An amount field is not a decimal number.
    #[error("{field} '{value}' is not a number (i.e. 0.15, 3.50)")]
    NonNumeric {
        /// Which amount was being read.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// An amount field is negative.
    #[error("{field} {value} must not be negative")]
    Negative {
        /// Which amount was being read.
        field: &'static str,
        /// The parsed amount.
        value: Decimal,
    },
}
