/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Tests for result formatting.

#[cfg(test)]
mod tests {
    use crate::game::presentation::{format_header, format_row};
    use crate::game::{
        BetChoice, BetResult, MemorySink, Outcome, ResultSink, RoundClosed,
    };
    use rust_decimal_macros::dec;

    fn result() -> BetResult {
        BetResult {
            player: "Barbara".to_string(),
            round_id: 10,
            winning_number: 6,
            choice: BetChoice::Straight(6),
            stake: dec!(2.00),
            outcome: Outcome::Win,
            payout: dec!(72.00),
        }
    }

    #[test]
    fn test_header_lines() {
        let header = format_header(&RoundClosed::new(10, 6, 0));
        assert_eq!(header[0], "Number: 6");
        assert_eq!(
            header[1],
            "Player       Bet   Outcome   Winnings   TotalBet   TotalWin"
        );
        assert_eq!(header[2], "----------");
    }

    #[test]
    fn test_row_columns() {
        let row = format_row(&result(), dec!(2.00), dec!(72.00));
        assert_eq!(
            row,
            "Barbara        6       WIN      72.00       2.00      72.00"
        );
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.notice("OK! Bet accepted.");
        sink.round_header(&RoundClosed::new(0, 6, 0));
        sink.result_row(&result(), dec!(2.00), dec!(72.00));

        let lines = sink.lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "OK! Bet accepted.");
        assert_eq!(lines[1], "Number: 6");
        assert!(lines[4].starts_with("Barbara"));
    }

    #[test]
    fn test_result_serializes_to_json() {
        let value = serde_json::to_value(result()).unwrap();
        assert_eq!(value["player"], "Barbara");
        assert_eq!(value["outcome"], "WIN");
        assert_eq!(value["choice"]["Straight"], 6);
    }
}
