/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Round events.
//!
//! This module defines the event the round clock publishes to its
//! listeners once a round has closed.

use serde::{Deserialize, Serialize};

/// Event emitted after a round boundary.
///
/// By the time listeners see this event the round counter has already moved
/// on, so `round_id` is the closed round and no longer accepts bets.
///
/// # Examples
///
/// ```
/// use roulette_rs::RoundClosed;
///
/// let event = RoundClosed::new(10, 6, 1_234_567_890);
/// assert_eq!(event.round_id, 10);
/// assert_eq!(event.winning_number, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClosed {
    /// The round that just closed.
    pub round_id: u64,

    /// The number drawn for that round.
    pub winning_number: u8,

    /// Nanosecond timestamp of the draw.
    pub timestamp_ns: u64,
}

impl RoundClosed {
    /// Creates a new round event.
    #[must_use]
    pub fn new(round_id: u64, winning_number: u8, timestamp_ns: u64) -> Self {
        Self {
            round_id,
            winning_number,
            timestamp_ns,
        }
    }
}

/// Returns the current time in nanoseconds since the Unix epoch.
#[inline]
pub(crate) fn nanos_since_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
