//! A single denominated amount.
//!
//! The text form is `<amount><denom>` with no separator, e.g. `10atom`.
//! Parsing additionally accepts whitespace around the token and between the
//! amount and the denomination (`" 10 atom "`).

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoinError, Result};

/// Grammar for a single coin: ASCII digit run, optional whitespace, ASCII letter run.
static COIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([[:digit:]]+)[[:space:]]*([[:alpha:]]+)$").unwrap_or_else(|_| unreachable!())
});

/// An amount of a single denomination.
///
/// Amounts are signed: text input only produces non-negative values, but
/// arithmetic such as [`Coins::negative`](crate::Coins::negative) yields
/// negative ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination, e.g. `atom`. Case is preserved.
    pub denom: String,
    /// Signed amount in base units.
    pub amount: i64,
}

impl Coin {
    /// Create a coin.
    #[must_use]
    pub fn new(denom: impl Into<String>, amount: i64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Parse a coin from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::InvalidFormat`] if the trimmed input is not
    /// `<digits><optional whitespace><letters>`, or if the digits overflow `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use molt_coins::Coin;
    ///
    /// let coin = Coin::parse("10atom")?;
    /// assert_eq!(coin, Coin::new("atom", 10));
    /// assert!(Coin::parse("atom10").is_err());
    /// # Ok::<(), molt_coins::CoinError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let Some(captures) = COIN_REGEX.captures(input.trim()) else {
            debug!(input, "rejected coin definition");
            return Err(CoinError::invalid_format(input));
        };

        let (_, [digits, denom]) = captures.extract();
        let amount = digits.parse::<i64>().map_err(|err| {
            debug!(input, error = %err, "coin amount out of range");
            CoinError::InvalidFormat {
                input: input.to_string(),
                source: Some(err),
            }
        })?;

        Ok(Self::new(denom, amount))
    }

    /// Check if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Checked negation.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Overflow`] when the amount is `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self> {
        self.amount
            .checked_neg()
            .map(|amount| Self::new(self.denom.clone(), amount))
            .ok_or_else(|| CoinError::overflow(&self.denom))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Neg for Coin {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            denom: self.denom,
            amount: self.amount.wrapping_neg(),
        }
    }
}

impl Neg for &Coin {
    type Output = Coin;

    fn neg(self) -> Coin {
        Coin::new(self.denom.clone(), self.amount.wrapping_neg())
    }
}
