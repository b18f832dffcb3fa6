//! Multi-denomination coin sets.
//!
//! A [`Coins`] value is canonical when its denominations are strictly
//! increasing and no amount is zero. Parsing and [`Coins::new`] enforce that;
//! arithmetic assumes it.
//!
//! # Arithmetic
//!
//! [`Coins::plus`] is a single merge pass over two denomination-sorted
//! sequences. Denominations present in both are summed and dropped when the
//! sum is zero. Everything else is copied through unchanged, including a
//! zero-amount coin that has no counterpart in the other operand, so a
//! non-canonical operand can yield a non-canonical result.
//!
//! Sums wrap on overflow. Use [`Coins::checked_plus`] or
//! [`Coins::plus_with`] with [`OverflowPolicy::Reject`] to detect it.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coin::Coin;
use crate::config::{CoinsConfig, OverflowPolicy};
use crate::error::{CoinError, Result};
use crate::COIN_SEPARATOR;

/// An ordered set of coins of distinct denominations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// The empty coin set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a canonical coin set: sorts by denomination, then validates.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::InvalidCoinSet`] if two coins share a denomination
    /// or any amount is zero.
    pub fn new(coins: Vec<Coin>) -> Result<Self> {
        let mut coins = Self(coins);
        coins.sort();
        if !coins.is_valid() {
            debug!(coins = %coins, "rejected invalid coin set");
            return Err(CoinError::InvalidCoinSet { coins });
        }
        Ok(coins)
    }

    /// Wrap a sequence as-is, without sorting or validation.
    #[must_use]
    pub const fn from_unchecked(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    /// Parse a comma-separated list such as `10atom,5btc`.
    ///
    /// The empty string is the empty set. Each segment is parsed with
    /// [`Coin::parse`], which trims it, so `10atom, 5btc` is accepted. The
    /// result is sorted, so input order does not matter.
    ///
    /// # Errors
    ///
    /// Returns the first segment's [`CoinError::InvalidFormat`], or
    /// [`CoinError::InvalidCoinSet`] for duplicate denominations and zero
    /// amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use molt_coins::{Coin, Coins};
    ///
    /// let coins = Coins::parse("10btc,5atom")?;
    /// assert_eq!(coins.as_slice(), &[Coin::new("atom", 5), Coin::new("btc", 10)]);
    /// assert_eq!(coins.to_string(), "5atom,10btc");
    /// # Ok::<(), molt_coins::CoinError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::empty());
        }

        let coins = input
            .split(COIN_SEPARATOR)
            .map(Coin::parse)
            .collect::<Result<Vec<_>>>()?;

        Self::new(coins)
    }

    /// Check the canonical-form invariants.
    ///
    /// True for the empty set. Otherwise every amount must be nonzero and
    /// every denomination strictly greater than the one before it.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|coin| !coin.is_zero())
            && self.0.windows(2).all(|pair| pair[0].denom < pair[1].denom)
    }

    /// Sort in place by denomination.
    ///
    /// Neither deduplicates nor removes zero amounts. Equal denominations keep
    /// their relative order.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.denom.cmp(&b.denom));
    }

    /// By-value form of [`Coins::sort`].
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// Number of coins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no coins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the coins in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    /// The coins as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Coin] {
        &self.0
    }

    /// Unwrap into the backing vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<Coin> {
        self.0
    }

    /// Amount held in `denom`, or zero if absent.
    #[must_use]
    pub fn amount_of(&self, denom: &str) -> i64 {
        self.0
            .binary_search_by(|coin| coin.denom.as_str().cmp(denom))
            .map_or(0, |idx| self.0[idx].amount)
    }

    /// Add two coin sets.
    ///
    /// Both operands must already be sorted with no duplicate denominations;
    /// this is not checked. Sums wrap on overflow.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        match merge(
            &self.0,
            &other.0,
            |a, b| Ok::<_, Infallible>(a.amount.wrapping_add(b.amount)),
            |b| Ok(b.clone()),
        ) {
            Ok(sum) => sum,
            Err(never) => match never {},
        }
    }

    /// Add two coin sets, failing on the first overflowing sum.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Overflow`] naming the denomination that overflowed.
    pub fn checked_plus(&self, other: &Self) -> Result<Self> {
        merge(
            &self.0,
            &other.0,
            |a, b| {
                a.amount.checked_add(b.amount).ok_or_else(|| {
                    debug!(denom = %a.denom, lhs = a.amount, rhs = b.amount, "coin sum overflowed");
                    CoinError::overflow(&a.denom)
                })
            },
            |b| Ok(b.clone()),
        )
    }

    /// Add two coin sets, handling overflow per `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Overflow`] only under [`OverflowPolicy::Reject`].
    pub fn plus_with(&self, other: &Self, config: &CoinsConfig) -> Result<Self> {
        match config.overflow {
            OverflowPolicy::Wrap => Ok(self.plus(other)),
            OverflowPolicy::Reject => self.checked_plus(other),
        }
    }

    /// Flip the sign of every amount. Order is preserved; `i64::MIN` wraps.
    #[must_use]
    pub fn negative(&self) -> Self {
        self.0.iter().map(|coin| -coin).collect()
    }

    /// Negate every amount, failing if one is `i64::MIN`.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Overflow`] naming the offending denomination.
    pub fn checked_negative(&self) -> Result<Self> {
        self.0.iter().map(Coin::checked_neg).collect()
    }

    /// Subtract `other`: `self.plus(&other.negative())`.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        self.plus(&other.negative())
    }

    /// Subtract `other`, failing only when a difference does not fit in `i64`.
    ///
    /// Shared denominations are subtracted directly, so `-1 - i64::MIN` is
    /// `i64::MAX`. Coins only in `other` are negated.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Overflow`] naming the denomination that overflowed.
    pub fn checked_minus(&self, other: &Self) -> Result<Self> {
        merge(
            &self.0,
            &other.0,
            |a, b| {
                a.amount.checked_sub(b.amount).ok_or_else(|| {
                    debug!(denom = %a.denom, lhs = a.amount, rhs = b.amount, "coin difference overflowed");
                    CoinError::overflow(&a.denom)
                })
            },
            Coin::checked_neg,
        )
    }

    /// Subtract `other`, handling overflow per `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::Overflow`] only under [`OverflowPolicy::Reject`].
    pub fn minus_with(&self, other: &Self, config: &CoinsConfig) -> Result<Self> {
        match config.overflow {
            OverflowPolicy::Wrap => Ok(self.minus(other)),
            OverflowPolicy::Reject => self.checked_minus(other),
        }
    }

    /// Check that `self` holds at least as much as `other` in every denomination.
    #[must_use]
    pub fn is_gte(&self, other: &Self) -> bool {
        let diff = self.minus(other);
        diff.is_empty() || diff.is_nonnegative()
    }

    /// Check if the set is empty.
    ///
    /// A set holding only zero-amount coins is not zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Element-wise equality, without normalising either side.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Check that the set is nonempty and every amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(Coin::is_positive)
    }

    /// Check that no amount is negative. True for the empty set.
    #[must_use]
    pub fn is_nonnegative(&self) -> bool {
        !self.0.iter().any(Coin::is_negative)
    }
}

/// Union-merge two denomination-sorted sequences, combining shared
/// denominations with `combine` and mapping coins found only in `rhs` with
/// `rhs_only`. Zero results of `combine` are dropped.
fn merge<E>(
    lhs: &[Coin],
    rhs: &[Coin],
    mut combine: impl FnMut(&Coin, &Coin) -> std::result::Result<i64, E>,
    mut rhs_only: impl FnMut(&Coin) -> std::result::Result<Coin, E>,
) -> std::result::Result<Coins, E> {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);

    loop {
        match (lhs.get(i), rhs.get(j)) {
            (None, None) => break,
            (Some(_), None) => {
                out.extend_from_slice(&lhs[i..]);
                break;
            }
            (None, Some(_)) => {
                for coin in &rhs[j..] {
                    out.push(rhs_only(coin)?);
                }
                break;
            }
            (Some(a), Some(b)) => match a.denom.cmp(&b.denom) {
                Ordering::Less => {
                    out.push(a.clone());
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(rhs_only(b)?);
                    j += 1;
                }
                Ordering::Equal => {
                    let amount = combine(a, b)?;
                    if amount == 0 {
                        trace!(denom = %a.denom, "denomination cancelled out");
                    } else {
                        out.push(Coin::new(a.denom.clone(), amount));
                    }
                    i += 1;
                    j += 1;
                }
            },
        }
    }

    Ok(Coins(out))
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, coin) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, "{COIN_SEPARATOR}")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = CoinError;

    fn try_from(coins: Vec<Coin>) -> Result<Self> {
        Self::new(coins)
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins.0
    }
}

impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Coins {
    type Item = Coin;
    type IntoIter = std::vec::IntoIter<Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for &Coins {
    type Output = Coins;

    fn add(self, other: Self) -> Coins {
        self.plus(other)
    }
}

impl Add for Coins {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(&other)
    }
}

impl Sub for &Coins {
    type Output = Coins;

    fn sub(self, other: Self) -> Coins {
        self.minus(other)
    }
}

impl Sub for Coins {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.minus(&other)
    }
}

impl Neg for &Coins {
    type Output = Coins;

    fn neg(self) -> Coins {
        self.negative()
    }
}

impl Neg for Coins {
    type Output = Self;

    fn neg(self) -> Self {
        self.negative()
    }
}
