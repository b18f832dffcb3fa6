//! Error types for coin parsing and arithmetic.

use std::num::ParseIntError;

use thiserror::Error;

use crate::coins::Coins;

/// Result type alias for coin operations.
pub type Result<T> = std::result::Result<T, CoinError>;

/// Errors that can occur while parsing or combining coins.
#[derive(Debug, Error)]
pub enum CoinError {
    /// Text did not match the `<digits><letters>` coin grammar, or the
    /// digit run does not fit in an `i64`.
    #[error("{input} is invalid coin definition")]
    InvalidFormat {
        /// The rejected input, as given by the caller.
        input: String,
        /// Numeric parse failure, when the grammar matched but the amount did not fit.
        source: Option<ParseIntError>,
    },

    /// A coin set is unsorted, has duplicate denominations, or holds a zero amount.
    #[error("invalid coin set: [{coins}]")]
    InvalidCoinSet {
        /// The offending sequence, after sorting.
        coins: Coins,
    },

    /// Summing or negating an amount overflowed `i64`.
    #[error("amount overflow in denomination {denom}")]
    Overflow {
        /// Denomination whose amount overflowed.
        denom: String,
    },

    /// Configuration could not be decoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CoinError {
    /// Create an invalid format error.
    #[must_use]
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            source: None,
        }
    }

    /// Create an overflow error.
    #[must_use]
    pub fn overflow(denom: impl Into<String>) -> Self {
        Self::Overflow {
            denom: denom.into(),
        }
    }

    /// Check if this error was raised by a parser.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::InvalidCoinSet { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;
    use std::error::Error as _;

    #[test]
    fn test_invalid_format_display() {
        let err = CoinError::invalid_format("atom10");
        assert_eq!(err.to_string(), "atom10 is invalid coin definition");
        assert!(err.is_parse_error());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_invalid_format_keeps_numeric_source() {
        let source = "99999999999999999999"
            .parse::<i64>()
            .expect_err("should overflow i64");
        let err = CoinError::InvalidFormat {
            input: "99999999999999999999atom".to_string(),
            source: Some(source),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_coin_set_display() {
        let coins = Coins::from_unchecked(vec![Coin::new("atom", 5), Coin::new("btc", 0)]);
        let err = CoinError::InvalidCoinSet { coins };
        assert_eq!(err.to_string(), "invalid coin set: [5atom,0btc]");
    }

    #[test]
    fn test_overflow_display() {
        let err = CoinError::overflow("atom");
        assert!(err.to_string().contains("atom"));
        assert!(!err.is_parse_error());
    }
}
