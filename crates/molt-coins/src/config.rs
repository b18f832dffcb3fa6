//! Arithmetic configuration.
//!
//! Hosts that embed coin arithmetic can choose how overflowing sums are
//! handled. The default wraps, matching plain fixed-width addition; `reject`
//! turns every overflow into [`CoinError::Overflow`](crate::CoinError::Overflow).
//!
//! ```
//! use molt_coins::{CoinsConfig, OverflowPolicy};
//!
//! let config = CoinsConfig::from_json(r#"{"overflow": "reject"}"#)?;
//! assert_eq!(config.overflow, OverflowPolicy::Reject);
//! # Ok::<(), molt_coins::CoinError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do when summing two amounts overflows `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's-complement wrap-around.
    #[default]
    Wrap,
    /// Fail with an overflow error.
    Reject,
}

/// Configuration for coin arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinsConfig {
    /// Overflow handling for `plus_with` / `minus_with`.
    pub overflow: OverflowPolicy,
}

impl CoinsConfig {
    /// Configuration that rejects overflowing sums.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Reject,
        }
    }

    /// Decode a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Config`](crate::CoinError::Config) if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
