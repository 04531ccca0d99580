use roulette_rs::{
    BetChoice, BetIntake, GameConfig, MemorySink, Outcome, PlayerLedger, RoundClock,
    RoundCounter, load_ledger,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Cursor;
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    struct Table {
        ledger: Arc<PlayerLedger>,
        round: RoundCounter,
        intake: BetIntake,
        clock: RoundClock,
        sink: Arc<MemorySink>,
    }

    fn table(roster: &str, first_round: u64) -> Table {
        let config = GameConfig::default();
        let ledger = Arc::new(load_ledger(Cursor::new(roster), &config).unwrap());
        let round = RoundCounter::starting_at(first_round);
        let sink = Arc::new(MemorySink::new());
        let intake = BetIntake::new(&config, Arc::clone(&ledger), round.clone(), sink.clone());
        let mut clock = RoundClock::new(&config, round.clone(), sink.clone());
        clock.register_ledger(&ledger, config.payouts());
        Table {
            ledger,
            round,
            intake,
            clock,
            sink,
        }
    }

    #[test]
    fn test_straight_win_in_round_ten() {
        let mut t = table("Barbara,0,0\n", 10);
        assert!(t.intake.process("Barbara 6 2.00").is_accepted());

        let event = t.clock.tick_with(6);
        assert_eq!(event.round_id, 10);

        let barbara = t.ledger.get("Barbara").unwrap();
        let result = barbara.result_for(10).unwrap();
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.payout, dec!(72.00));
        assert_eq!(barbara.total_win(), dec!(72.00));
        assert_eq!(barbara.total_bet(), dec!(2.00));
    }

    #[test]
    fn test_straight_loss_in_round_ten() {
        let mut t = table("Barbara,0,0\n", 10);
        assert!(t.intake.process("Barbara 6 2.00").is_accepted());
        t.clock.tick_with(7);

        let barbara = t.ledger.get("Barbara").unwrap();
        let result = barbara.result_for(10).unwrap();
        assert_eq!(result.outcome, Outcome::Lose);
        assert_eq!(result.payout, Decimal::ZERO);
        assert_eq!(barbara.total_win(), Decimal::ZERO);
        assert_eq!(barbara.total_bet(), dec!(2.00));
    }

    #[test]
    fn test_odd_win() {
        let mut t = table("Barbara,0,0\n", 0);
        assert!(t.intake.process("Barbara odd 1.60").is_accepted());
        t.clock.tick_with(11);

        let barbara = t.ledger.get("Barbara").unwrap();
        assert_eq!(barbara.result_for(0).unwrap().payout, dec!(3.20));
        assert_eq!(barbara.total_win(), dec!(3.20));
    }

    #[test]
    fn test_second_bet_in_same_round_rejected() {
        let mut t = table("Barbara,0,0\n", 10);
        assert!(t.intake.process("Barbara 6 2.00").is_accepted());
        assert!(t.intake.process("Barbara 7 2.00").is_rejected());

        let barbara = t.ledger.get("Barbara").unwrap();
        assert_eq!(barbara.bet_for(10).unwrap().choice, BetChoice::Straight(6));

        t.clock.tick_with(6);
        assert_eq!(barbara.total_win(), dec!(72.00));
        assert_eq!(barbara.total_bet(), dec!(2.00));
    }

    #[test]
    fn test_totals_carry_over_from_roster() {
        let mut t = table("Tiki_Monkey,1.0,1.0\nBarbara,2.0,1.0\n", 0);
        assert!(t.intake.process("Tiki_Monkey EVEN 5").is_accepted());
        t.clock.tick_with(4);

        let tiki = t.ledger.get("Tiki_Monkey").unwrap();
        assert_eq!(tiki.total_bet(), dec!(6.0));
        assert_eq!(tiki.total_win(), dec!(11.0));

        let barbara = t.ledger.get("Barbara").unwrap();
        assert_eq!(barbara.total_bet(), dec!(1.0));
        assert_eq!(barbara.total_win(), dec!(2.0));
    }

    #[test]
    fn test_round_table_lists_only_players_with_bets() {
        let mut t = table("Tiki_Monkey\nBarbara\nAndreas\n", 0);
        t.intake.process("Barbara 6 2.00");
        t.intake.process("Tiki_Monkey ODD 3.50");
        let before = t.sink.lines().len();

        t.clock.tick_with(6);

        let lines = t.sink.lines();
        let rows = &lines[before + 3..];
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Barbara"));
        assert!(rows[1].starts_with("Tiki_Monkey"));
        assert_eq!(t.round.current(), 1);
    }
}
