/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Console roulette.
//!
//! Loads the roster, starts the table and feeds it one bet per line read
//! from standard input. Results go to standard output, logs to standard
//! error. Stops on Ctrl-C or at end of input.

use anyhow::Context;
use clap::Parser;
use roulette_rs::{
    ConsoleSink, GameConfig, JsonLinesSink, ResultSink, RouletteTable, load_ledger_from_path,
};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Consecutive stdin read failures tolerated before input is abandoned.
const MAX_READ_ERRORS: u32 = 3;

/// Counts consecutive read failures; any successful read resets it.
#[derive(Debug, Default)]
struct ReadErrors {
    consecutive: u32,
}

impl ReadErrors {
    fn reset(&mut self) {
        self.consecutive = 0;
    }

    /// Records a failure and returns `true` once the limit is reached.
    fn record(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive >= MAX_READ_ERRORS
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster file, one `Username[,TotalWin[,TotalBet]]` per line
    #[arg(short, long, default_value = "player_data.txt")]
    roster: PathBuf,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round length in seconds, overrides the config file
    #[arg(short, long)]
    interval: Option<u64>,

    /// Exclusive maximum stake, overrides the config file
    #[arg(long)]
    max_bet: Option<Decimal>,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Print results as JSON lines instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(interval) = args.interval {
        config.round_interval_secs = interval;
    }
    if let Some(max_bet) = args.max_bet {
        config.max_bet = max_bet;
    }
    config.validate().context("invalid configuration")?;

    let ledger = load_ledger_from_path(&args.roster, &config)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;

    let sink: Arc<dyn ResultSink> = if args.json {
        Arc::new(JsonLinesSink)
    } else {
        Arc::new(ConsoleSink)
    };

    let mut table = RouletteTable::new(config, ledger, sink).context("failed to set up table")?;
    if let Some(seed) = args.seed {
        table = table.with_seed(seed);
    }

    if !args.json {
        println!("************************");
        println!("*                      *");
        println!("* Starting roulette... *");
        println!("*                      *");
        println!("************************");
    }
    let handle = table.spawn();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut read_errors = ReadErrors::default();
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    read_errors.reset();
                    if line.trim().is_empty() {
                        continue;
                    }
                    if handle.push(line).await.is_err() {
                        warn!("table stopped accepting bets");
                        break;
                    }
                }
                Ok(None) => {
                    let open_round = handle.current_round();
                    info!(round_id = open_round, "end of input, waiting for the open round to settle");
                    tokio::select! {
                        _ = handle.wait_round_closed(open_round) => {}
                        _ = tokio::signal::ctrl_c() => info!("interrupted"),
                    }
                    break;
                }
                Err(e) => {
                    warn!("there was a problem reading the input: {e}");
                    if read_errors.record() {
                        error!("giving up on standard input");
                        break;
                    }
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    let summary = handle.shutdown().await.context("table did not shut down cleanly")?;
    info!(
        rounds = summary.rounds_closed,
        requests = summary.requests_processed,
        "goodbye"
    );
    Ok(())
}
