/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! What a bet is placed on.

use super::error::BetRejection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The position a bet covers on the table.
///
/// # Examples
///
/// ```
/// use roulette_rs::BetChoice;
///
/// assert_eq!(BetChoice::parse("odd", 1, 36), Ok(BetChoice::Odd));
/// assert_eq!(BetChoice::parse("17", 1, 36), Ok(BetChoice::Straight(17)));
/// assert!(BetChoice::parse("37", 1, 36).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetChoice {
    /// A single number.
    Straight(u8),

    /// Any odd number.
    Odd,

    /// Any even number.
    Even,
}

impl BetChoice {
    /// Parses a choice token against the table range `[lower, upper]`.
    ///
    /// `ODD` and `EVEN` are matched case-insensitively. Numbers must be
    /// written in canonical form (`"6"`, not `"06"` or `"+6"`).
    ///
    /// # Errors
    ///
    /// Returns [`BetRejection::InvalidChoice`] for anything else.
    pub fn parse(token: &str, lower: u8, upper: u8) -> Result<Self, BetRejection> {
        let normalized = token.to_ascii_uppercase();
        match normalized.as_str() {
            "ODD" => return Ok(Self::Odd),
            "EVEN" => return Ok(Self::Even),
            _ => {}
        }

        token
            .parse::<u8>()
            .ok()
            .filter(|number| number.to_string() == token && (lower..=upper).contains(number))
            .map(Self::Straight)
            .ok_or_else(|| BetRejection::InvalidChoice {
                choice: token.to_string(),
                lower,
                upper,
            })
    }

    /// Returns `true` for ODD and EVEN.
    #[inline]
    #[must_use]
    pub fn is_parity(&self) -> bool {
        matches!(self, Self::Odd | Self::Even)
    }

    /// Returns `true` if `number` is covered by this choice.
    #[inline]
    #[must_use]
    pub fn covers(&self, number: u8) -> bool {
        match self {
            Self::Straight(n) => *n == number,
            Self::Odd => number % 2 == 1,
            Self::Even => number % 2 == 0,
        }
    }
}

impl fmt::Display for BetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight(n) => write!(f, "{n}"),
            Self::Odd => f.write_str("ODD"),
            Self::Even => f.write_str("EVEN"),
        }
    }
}
