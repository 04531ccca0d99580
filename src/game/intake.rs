/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Bet intake.
//!
//! Intake turns one raw request line (`"Username Choice Stake"`) into a
//! validated [`Bet`] and records it in the ledger. Validation stamps the
//! bet with the round id current at that moment; recording never re-reads
//! the counter. A request racing a round boundary therefore lands in the
//! closing round or the new one, never both.

use super::bet::{Bet, BetRules};
use super::config::GameConfig;
use super::error::BetRejection;
use super::ledger::PlayerLedger;
use super::presentation::ResultSink;
use super::receipt::IntakeReceipt;
use super::round::RoundCounter;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{info, warn};

/// A request line paired with an optional channel for its receipt.
pub type IntakeMessage = (String, Option<oneshot::Sender<IntakeReceipt>>);

/// The three tokens of a bet request, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetRequest<'a> {
    /// Player name.
    pub player: &'a str,
    /// Choice token.
    pub choice: &'a str,
    /// Stake token.
    pub stake: &'a str,
}

impl<'a> BetRequest<'a> {
    /// Splits a request line on whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BetRejection::Malformed`] unless the line has exactly
    /// three tokens.
    pub fn parse(line: &'a str) -> Result<Self, BetRejection> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(player), Some(choice), Some(stake), None) => Ok(Self {
                player,
                choice,
                stake,
            }),
            _ => Err(BetRejection::Malformed {
                line: line.trim_end().to_string(),
            }),
        }
    }
}

/// Validates bet requests and records them in the ledger.
pub struct BetIntake {
    ledger: Arc<PlayerLedger>,
    round: RoundCounter,
    rules: BetRules,
    sink: Arc<dyn ResultSink>,
}

impl BetIntake {
    /// Creates an intake recording into `ledger` and reading `round`.
    #[must_use]
    pub fn new(
        config: &GameConfig,
        ledger: Arc<PlayerLedger>,
        round: RoundCounter,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            ledger,
            round,
            rules: config.rules(),
            sink,
        }
    }

    /// The limits applied to incoming bets.
    #[must_use]
    pub fn rules(&self) -> &BetRules {
        &self.rules
    }

    /// Validates a request line and stamps it with the current round.
    ///
    /// Checks run in order and stop at the first failure: token count,
    /// player name, choice, stake.
    ///
    /// # Errors
    ///
    /// Returns the [`BetRejection`] of the first failed check.
    pub fn validate(&self, line: &str) -> Result<Bet, BetRejection> {
        let request = BetRequest::parse(line)?;

        if !self.ledger.contains(request.player) {
            return Err(BetRejection::UnknownPlayer {
                player: request.player.to_string(),
            });
        }
        let choice = self.rules.parse_choice(request.choice)?;
        let stake = self.rules.parse_stake(request.stake)?;

        Ok(Bet::new(request.player, choice, stake, self.round.current()))
    }

    /// Records an already validated bet under the round it carries.
    ///
    /// # Errors
    ///
    /// [`BetRejection::DuplicateBet`] if the player already has a bet for
    /// that round, [`BetRejection::UnknownPlayer`] if the player vanished.
    pub fn record(&self, bet: Bet) -> Result<IntakeReceipt, BetRejection> {
        let receipt = IntakeReceipt::Accepted {
            player: bet.player.clone(),
            round_id: bet.round_id,
            choice: bet.choice,
            stake: bet.stake,
        };
        let round_id = bet.round_id;
        self.ledger.record_bet(bet)?;

        if self.round.current() > round_id {
            warn!(round_id, "bet recorded just as its round closed");
        }
        Ok(receipt)
    }

    /// Validates and records one request line, reporting the outcome to the sink.
    pub fn process(&self, line: &str) -> IntakeReceipt {
        let receipt = match self.validate(line).and_then(|bet| self.record(bet)) {
            Ok(receipt) => {
                if let IntakeReceipt::Accepted {
                    player,
                    round_id,
                    choice,
                    stake,
                } = &receipt
                {
                    info!(%player, round_id, %choice, %stake, "bet accepted");
                }
                receipt
            }
            Err(reason) => {
                warn!("bet rejected: {reason}");
                IntakeReceipt::from(reason)
            }
        };
        self.sink.notice(&receipt.to_string());
        receipt
    }

    /// Processes requests until the channel closes or `shutdown` flips.
    ///
    /// A rejected request never stops the loop. On shutdown the channel is
    /// closed and every request already queued is still processed.
    /// Returns the number of requests processed.
    pub async fn run(
        self,
        mut requests: mpsc::Receiver<IntakeMessage>,
        mut shutdown: watch::Receiver<bool>,
    ) -> u64 {
        let mut processed = 0u64;
        while !*shutdown.borrow() {
            tokio::select! {
                message = requests.recv() => {
                    let Some(message) = message else {
                        info!("bet request stream ended");
                        break;
                    };
                    self.answer(message);
                    processed = processed.saturating_add(1);
                }
                _ = shutdown.changed() => break,
            }
        }

        requests.close();
        let mut drained = 0u64;
        while let Some(message) = requests.recv().await {
            self.answer(message);
            drained = drained.saturating_add(1);
        }
        if drained > 0 {
            info!(requests = drained, "processed requests queued before shutdown");
        }

        let processed = processed.saturating_add(drained);
        info!(requests = processed, "bet intake stopped");
        processed
    }

    fn answer(&self, (line, reply): IntakeMessage) {
        let receipt = self.process(&line);
        if let Some(reply) = reply {
            let _ = reply.send(receipt);
        }
    }

    /// Spawns [`run`](Self::run) on a new task.
    #[must_use]
    pub fn spawn(
        self,
        requests: mpsc::Receiver<IntakeMessage>,
        shutdown: watch::Receiver<bool>,
    ) -> tokio::task::JoinHandle<u64> {
        tokio::spawn(self.run(requests, shutdown))
    }
}
