/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Presentation sinks.
//!
//! The engine reports through a [`ResultSink`]: one header per closed
//! round, one row per settled bet, and a notice for every intake decision.
//! Sinks return nothing; a failed write is logged and dropped.

use super::event::RoundClosed;
use super::settlement::BetResult;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;
use tracing::warn;

/// Receiver for everything the table prints.
pub trait ResultSink: Send + Sync {
    /// Called once per closed round, before any result row.
    fn round_header(&self, event: &RoundClosed);

    /// Called once per settled bet, with the player's totals after settlement.
    fn result_row(&self, result: &BetResult, total_bet: Decimal, total_win: Decimal);

    /// Called for every accepted or rejected bet request.
    fn notice(&self, message: &str);
}

/// Formats the header lines for a closed round.
#[must_use]
pub fn format_header(event: &RoundClosed) -> Vec<String> {
    vec![
        format!("Number: {}", event.winning_number),
        format!(
            "{:<10} {:>5} {:>9} {:>10} {:>10} {:>10}",
            "Player", "Bet", "Outcome", "Winnings", "TotalBet", "TotalWin"
        ),
        "----------".to_string(),
    ]
}

/// Formats one result row.
#[must_use]
pub fn format_row(result: &BetResult, total_bet: Decimal, total_win: Decimal) -> String {
    format!(
        "{:<10} {:>5} {:>9} {:>10} {:>10} {:>10}",
        result.player,
        result.choice.to_string(),
        result.outcome.to_string(),
        result.payout.to_string(),
        total_bet.to_string(),
        total_win.to_string()
    )
}

/// Fixed-width table on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn write_lines<I: IntoIterator<Item = String>>(lines: I) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            if let Err(e) = writeln!(out, "{line}") {
                warn!("failed to write to stdout: {e}");
                return;
            }
        }
    }
}

impl ResultSink for ConsoleSink {
    fn round_header(&self, event: &RoundClosed) {
        Self::write_lines(format_header(event));
    }

    fn result_row(&self, result: &BetResult, total_bet: Decimal, total_win: Decimal) {
        Self::write_lines([format_row(result, total_bet, total_win)]);
    }

    fn notice(&self, message: &str) {
        Self::write_lines([message.to_string()]);
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonRecord<'a> {
    RoundClosed(&'a RoundClosed),
    Result {
        #[serde(flatten)]
        result: &'a BetResult,
        total_bet: Decimal,
        total_win: Decimal,
    },
    Notice {
        message: &'a str,
    },
}

/// One JSON object per line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLinesSink;

impl JsonLinesSink {
    fn emit(record: &JsonRecord<'_>) {
        match serde_json::to_string(record) {
            Ok(line) => ConsoleSink::write_lines([line]),
            Err(e) => warn!("failed to encode result record: {e}"),
        }
    }
}

impl ResultSink for JsonLinesSink {
    fn round_header(&self, event: &RoundClosed) {
        Self::emit(&JsonRecord::RoundClosed(event));
    }

    fn result_row(&self, result: &BetResult, total_bet: Decimal, total_win: Decimal) {
        Self::emit(&JsonRecord::Result {
            result,
            total_bet,
            total_win,
        });
    }

    fn notice(&self, message: &str) {
        Self::emit(&JsonRecord::Notice { message });
    }
}

/// Keeps every line in memory, formatted as [`ConsoleSink`] would print it.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push<I: IntoIterator<Item = String>>(&self, lines: I) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend(lines);
    }
}

impl ResultSink for MemorySink {
    fn round_header(&self, event: &RoundClosed) {
        self.push(format_header(event));
    }

    fn result_row(&self, result: &BetResult, total_bet: Decimal, total_win: Decimal) {
        self.push([format_row(result, total_bet, total_win)]);
    }

    fn notice(&self, message: &str) {
        self.push([message.to_string()]);
    }
}
