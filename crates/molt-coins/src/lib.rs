//! # molt-coins
//!
//! Multi-denomination coin amounts for the MOLT marketplace.
//!
//! This crate provides:
//! - [`Coin`]: a single `(denom, amount)` pair with text parsing and formatting
//! - [`Coins`]: a sorted, duplicate-free, zero-free set of coins
//! - Merge-based addition and subtraction, negation, and comparisons
//! - Optional overflow rejection via [`CoinsConfig`]
//!
//! ## Text Format
//!
//! - **Coin**: `<amount><denom>`, e.g. `10atom`
//! - **Coins**: comma-separated coins, e.g. `5atom,10btc`, always printed in
//!   denomination order
//!
//! ## Example
//!
//! ```rust
//! use molt_coins::{Coin, Coins};
//!
//! let wallet = Coins::parse("10atom,3btc")?;
//! let price = Coins::parse("4atom")?;
//!
//! assert!(wallet.is_gte(&price));
//! let change = wallet.minus(&price);
//! assert_eq!(change.to_string(), "6atom,3btc");
//!
//! // Amounts that net to zero disappear
//! let spent = change.minus(&Coins::parse("6atom")?);
//! assert_eq!(spent.as_slice(), &[Coin::new("btc", 3)]);
//! # Ok::<(), molt_coins::CoinError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod coin;
pub mod coins;
pub mod config;
pub mod error;


pub use coin::Coin;
pub use coins::Coins;
pub use config::{CoinsConfig, OverflowPolicy};
pub use error::{CoinError, Result};

/// Separator between coins in the list text format.
pub const COIN_SEPARATOR: char = ',';
