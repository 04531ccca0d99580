/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Tests for bet intake racing the round clock.

#[cfg(test)]
mod tests {
    use crate::game::{
        BetIntake, GameConfig, MemorySink, Player, PlayerLedger, RoundClock, RoundCounter,
    };
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use std::thread;

    fn players(count: usize) -> Arc<PlayerLedger> {
        Arc::new(
            (0..count)
                .map(|i| Player::new(format!("player{i}")))
                .collect(),
        )
    }

    #[test]
    fn test_concurrent_duplicate_bets_accept_exactly_one() {
        let ledger = players(1);
        let round = RoundCounter::new();
        let intake = Arc::new(BetIntake::new(
            &GameConfig::default(),
            Arc::clone(&ledger),
            round.clone(),
            Arc::new(MemorySink::new()),
        ));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let intake = Arc::clone(&intake);
                thread::spawn(move || intake.process("player0 ODD 1").is_accepted())
            })
            .collect();
        let accepted = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|accepted| *accepted)
            .count();

        assert_eq!(accepted, 1);
        let player = ledger.get("player0").unwrap();
        assert_eq!(player.total_bet(), Decimal::ONE);
        assert_eq!(player.bet_count(), 1);
    }

    #[test]
    fn test_bets_racing_round_boundaries_land_exactly_once() {
        const PLAYERS: usize = 8;
        const ATTEMPTS: usize = 200;

        let ledger = players(PLAYERS);
        let round = RoundCounter::new();
        let sink = Arc::new(MemorySink::new());
        let intake = Arc::new(BetIntake::new(
            &GameConfig::default(),
            Arc::clone(&ledger),
            round.clone(),
            sink.clone(),
        ));

        let mut clock = RoundClock::new(&GameConfig::default(), round.clone(), sink);
        clock.register_ledger(&ledger, GameConfig::default().payouts());

        let bettors: Vec<_> = (0..PLAYERS)
            .map(|i| {
                let intake = Arc::clone(&intake);
                thread::spawn(move || {
                    let mut accepted = 0usize;
                    for _ in 0..ATTEMPTS {
                        if intake.process(&format!("player{i} EVEN 1")).is_accepted() {
                            accepted += 1;
                        }
                    }
                    accepted
                })
            })
            .collect();

        let ticker = thread::spawn(move || {
            for _ in 0..50 {
                clock.tick();
                thread::yield_now();
            }
        });

        let accepted: Vec<usize> = bettors
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect();
        ticker.join().ok();

        for (i, accepted) in accepted.iter().enumerate() {
            let player = ledger.get(&format!("player{i}")).unwrap();
            assert_eq!(player.bet_count(), *accepted);
            assert_eq!(player.total_bet(), Decimal::from(*accepted));
            assert!(*accepted <= 51, "at most one bet per round");
            for round_id in 0..round.current() {
                if let Some(bet) = player.bet_for(round_id) {
                    assert_eq!(bet.round_id, round_id);
                }
            }
        }
    }

    #[test]
    fn test_round_ids_never_repeat_across_threads() {
        let round = RoundCounter::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let round = round.clone();
                thread::spawn(move || (0..1000).map(|_| round.advance()).collect::<Vec<_>>())
            })
            .collect();

        let mut closed: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_default())
            .collect();
        closed.sort_unstable();
        closed.dedup();
        assert_eq!(closed.len(), 4000);
        assert_eq!(round.current(), 4000);
    }
}
