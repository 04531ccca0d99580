/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Intake receipts.
//!
//! This module defines the receipt returned for every bet request handed
//! to intake.

use super::choice::BetChoice;
use super::error::BetRejection;
use rust_decimal::Decimal;
use std::fmt;

/// Outcome of submitting one bet request.
///
/// # Examples
///
/// ```
/// use roulette_rs::{BetChoice, IntakeReceipt};
/// use rust_decimal::Decimal;
///
/// let receipt = IntakeReceipt::Accepted {
///     player: "Barbara".to_string(),
///     round_id: 3,
///     choice: BetChoice::Odd,
///     stake: Decimal::new(160, 2),
/// };
/// assert!(receipt.is_accepted());
/// assert_eq!(receipt.to_string(), "OK! Bet accepted.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeReceipt {
    /// The bet was recorded.
    Accepted {
        /// Player the bet belongs to.
        player: String,
        /// Round the bet was recorded under.
        round_id: u64,
        /// What the bet covers.
        choice: BetChoice,
        /// Amount wagered.
        stake: Decimal,
    },

    /// The request was refused; nothing was recorded.
    Rejected {
        /// Why the request was refused.
        reason: BetRejection,
    },
}

impl IntakeReceipt {
    /// Returns `true` if the bet was recorded.
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns `true` if the request was refused.
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The round the bet was recorded under, if accepted.
    #[must_use]
    pub fn round_id(&self) -> Option<u64> {
        match self {
            Self::Accepted { round_id, .. } => Some(*round_id),
            Self::Rejected { .. } => None,
        }
    }
}

impl From<BetRejection> for IntakeReceipt {
    fn from(reason: BetRejection) -> Self {
        Self::Rejected { reason }
    }
}

impl fmt::Display for IntakeReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { .. } => f.write_str("OK! Bet accepted."),
            Self::Rejected { reason } => write!(f, "Bet rejected. {reason}."),
        }
    }
}
