/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! The current round identifier, shared between the clock and intake.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic round counter with a single writer and many readers.
///
/// Only the [`RoundClock`](super::RoundClock) calls [`advance`](Self::advance);
/// intake reads [`current`](Self::current) to stamp new bets. Clones share
/// the same counter.
///
/// # Examples
///
/// ```
/// use roulette_rs::RoundCounter;
///
/// let round = RoundCounter::new();
/// let reader = round.clone();
/// assert_eq!(round.advance(), 0);
/// assert_eq!(reader.current(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundCounter {
    current: Arc<AtomicU64>,
}

impl RoundCounter {
    /// Creates a counter starting at round 0.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a counter starting at `round_id`.
    #[must_use]
    pub fn starting_at(round_id: u64) -> Self {
        Self {
            current: Arc::new(AtomicU64::new(round_id)),
        }
    }

    /// The round currently accepting bets.
    #[inline]
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }

    /// Closes the current round and opens the next one.
    ///
    /// Read and increment are a single atomic step; the returned value is
    /// the round that was just closed and is never handed out again.
    #[inline]
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::AcqRel)
    }
}
