/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Roster loading.
//!
//! A roster is a line-oriented text source, one player per line:
//! `Username[,TotalWin[,TotalBet]]`. Empty amount fields count as zero.
//! Malformed lines are skipped with a warning; an I/O failure or a roster
//! with no valid line stops the table from starting.

use super::config::GameConfig;
use super::error::{RosterError, RosterLineError};
use super::ledger::PlayerLedger;
use super::player::Player;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// One parsed roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Player name.
    pub name: String,

    /// Total won in earlier sessions.
    pub total_win: Decimal,

    /// Total wagered in earlier sessions.
    pub total_bet: Decimal,
}

impl RosterEntry {
    /// Builds the [`Player`] this entry describes.
    #[must_use]
    pub fn into_player(self) -> Player {
        Player::with_totals(self.name, self.total_bet, self.total_win)
    }
}

/// Parses a single roster line.
///
/// # Errors
///
/// Returns the [`RosterLineError`] explaining why the line is skipped.
pub fn parse_roster_line(
    line: &str,
    delimiter: char,
    max_fields: usize,
) -> Result<RosterEntry, RosterLineError> {
    let fields: Vec<&str> = line.splitn(max_fields + 1, delimiter).collect();
    if fields.len() > max_fields {
        return Err(RosterLineError::TooManyFields {
            line: line.to_string(),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(RosterLineError::EmptyName);
    }

    let total_win = parse_amount("total win", fields.get(1).copied())?;
    let total_bet = parse_amount("total bet", fields.get(2).copied())?;

    Ok(RosterEntry {
        name: name.to_string(),
        total_win,
        total_bet,
    })
}

fn parse_amount(field: &'static str, value: Option<&str>) -> Result<Decimal, RosterLineError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let amount = Decimal::from_str(value).map_err(|_| RosterLineError::NonNumeric {
        field,
        value: value.to_string(),
    })?;
    if amount < Decimal::ZERO {
        return Err(RosterLineError::Negative {
            field,
            value: amount,
        });
    }
    Ok(amount)
}

/// Reads every valid entry from `reader`, skipping malformed lines.
///
/// # Errors
///
/// Returns [`RosterError::Io`] if reading fails part way.
pub fn read_roster<R: BufRead>(
    reader: R,
    delimiter: char,
    max_fields: usize,
) -> Result<Vec<RosterEntry>, RosterError> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_roster_line(&line, delimiter, max_fields) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!(line = index + 1, "skipping roster line: {e}"),
        }
    }
    Ok(entries)
}

/// Reads a roster and builds the ledger for a table.
///
/// A name that appears twice keeps the later line.
///
/// # Errors
///
/// [`RosterError::Io`] on read failure, [`RosterError::Empty`] if no line
/// produced a player.
pub fn load_ledger<R: BufRead>(reader: R, config: &GameConfig) -> Result<PlayerLedger, RosterError> {
    let ledger = PlayerLedger::new();
    for entry in read_roster(reader, config.roster_delimiter, config.roster_tokens)? {
        let name = entry.name.clone();
        if !ledger.insert(entry.into_player()) {
            warn!(player = %name, "duplicate roster entry, keeping the later one");
        }
    }

    if ledger.is_empty() {
        return Err(RosterError::Empty);
    }
    info!(players = ledger.len(), "roster loaded");
    Ok(ledger)
}

/// Opens `path` and loads the ledger from it.
///
/// # Errors
///
/// As [`load_ledger`], plus [`RosterError::Io`] if the file cannot be opened.
pub fn load_ledger_from_path(
    path: impl AsRef<Path>,
    config: &GameConfig,
) -> Result<PlayerLedger, RosterError> {
    let file = File::open(path)?;
    load_ledger(BufReader::new(file), config)
}
