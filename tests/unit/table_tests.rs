use roulette_rs::{
    BetIntake, GameConfig, IntakeReceipt, MemorySink, Player, PlayerLedger, RouletteTable,
    RoundCounter, TableError,
};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> PlayerLedger {
        [Player::new("Barbara"), Player::new("Tiki_Monkey")]
            .into_iter()
            .collect()
    }

    fn config(interval_secs: u64) -> GameConfig {
        GameConfig {
            round_interval_secs: interval_secs,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_empty_ledger_cannot_start() {
        let result = RouletteTable::new(
            GameConfig::default(),
            PlayerLedger::new(),
            Arc::new(MemorySink::new()),
        );
        assert!(matches!(result, Err(TableError::NoPlayers)));
    }

    #[test]
    fn test_invalid_config_cannot_start() {
        let result = RouletteTable::new(config(0), ledger(), Arc::new(MemorySink::new()));
        assert!(matches!(result, Err(TableError::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_returns_receipts() {
        let table =
            RouletteTable::new(config(30), ledger(), Arc::new(MemorySink::new())).unwrap();
        let handle = table.spawn();

        let receipt = handle.submit("Barbara 6 2.00").await.unwrap();
        assert_eq!(receipt.round_id(), Some(0));

        let duplicate = handle.submit("Barbara EVEN 1").await.unwrap();
        assert!(matches!(duplicate, IntakeReceipt::Rejected { .. }));

        let malformed = handle.submit("Barbara").await.unwrap();
        assert!(malformed.is_rejected());

        let summary = handle.shutdown().await.unwrap();
        assert_eq!(summary.requests_processed, 3);
        assert_eq!(summary.rounds_closed, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bets_settle_when_round_closes() {
        let sink = Arc::new(MemorySink::new());
        let table = RouletteTable::new(config(30), ledger(), sink.clone())
            .unwrap()
            .with_seed(7);
        let handle = table.spawn();

        assert!(handle.submit("Barbara ODD 1").await.unwrap().is_accepted());
        assert!(handle.submit("Tiki_Monkey EVEN 1").await.unwrap().is_accepted());

        handle.wait_round_closed(0).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        let barbara = handle.ledger().get("Barbara").unwrap();
        let tiki = handle.ledger().get("Tiki_Monkey").unwrap();
        let barbara_result = barbara.result_for(0).unwrap();
        let tiki_result = tiki.result_for(0).unwrap();
        assert_eq!(barbara_result.winning_number, tiki_result.winning_number);
        assert_ne!(barbara_result.outcome, tiki_result.outcome);
        assert_eq!(barbara.total_win() + tiki.total_win(), dec!(2));

        let next = handle.submit("Barbara ODD 1").await.unwrap();
        assert_eq!(next.round_id(), Some(1));

        let summary = handle.shutdown().await.unwrap();
        assert_eq!(summary.rounds_closed, 1);
        assert!(sink.lines().iter().any(|l| l.starts_with("Number: ")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_starting_round_offsets_ids() {
        let table = RouletteTable::new(config(30), ledger(), Arc::new(MemorySink::new()))
            .unwrap()
            .starting_round(10);
        let handle = table.spawn();
        assert_eq!(handle.current_round(), 10);
        let receipt = handle.submit("Barbara 6 2").await.unwrap();
        assert_eq!(receipt.round_id(), Some(10));
        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_processes_queued_requests() {
        let table =
            RouletteTable::new(config(30), ledger(), Arc::new(MemorySink::new())).unwrap();
        let handle = table.spawn();
        let ledger = Arc::clone(handle.ledger());

        handle.push("Barbara 6 2.00").await.unwrap();
        handle.push("Tiki_Monkey EVEN 3.50").await.unwrap();

        let summary = handle.shutdown().await.unwrap();
        assert_eq!(summary.requests_processed, 2);
        assert_eq!(summary.rounds_closed, 0);

        let barbara = ledger.get("Barbara").unwrap();
        let tiki = ledger.get("Tiki_Monkey").unwrap();
        assert_eq!(barbara.bet_count(), 1);
        assert_eq!(tiki.bet_count(), 1);
        assert_eq!(barbara.total_bet(), dec!(2.00));
        assert_eq!(tiki.total_bet(), dec!(3.50));
    }

    #[tokio::test]
    async fn test_intake_drains_queue_when_signalled() {
        let ledger = Arc::new(ledger());
        let intake = BetIntake::new(
            &GameConfig::default(),
            Arc::clone(&ledger),
            RoundCounter::new(),
            Arc::new(MemorySink::new()),
        );
        let (tx, rx) = mpsc::channel(8);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tx.send(("Barbara 6 2".to_string(), None)).await.unwrap();
        tx.send(("Tiki_Monkey ODD 1".to_string(), None)).await.unwrap();
        shutdown_tx.send(true).unwrap();

        let task = intake.spawn(rx, shutdown_rx);
        assert_eq!(task.await.unwrap(), 2);
        assert!(tx.send(("Barbara EVEN 1".to_string(), None)).await.is_err());
        assert_eq!(ledger.get("Barbara").unwrap().bet_count(), 1);
        assert_eq!(ledger.get("Tiki_Monkey").unwrap().bet_count(), 1);
    }

    #[tokio::test]
    async fn test_intake_stops_at_end_of_stream() {
        let ledger = Arc::new(ledger());
        let intake = BetIntake::new(
            &GameConfig::default(),
            Arc::clone(&ledger),
            RoundCounter::new(),
            Arc::new(MemorySink::new()),
        );
        let (tx, rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = intake.spawn(rx, shutdown_rx);

        tx.send(("Barbara 6 2".to_string(), None)).await.unwrap();
        tx.send(("garbage".to_string(), None)).await.unwrap();
        drop(tx);

        assert_eq!(task.await.unwrap(), 2);
        assert_eq!(ledger.get("Barbara").unwrap().bet_count(), 1);
    }
}
