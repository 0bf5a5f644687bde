//! # Price Value Object
//!
//! A non-negative monetary amount backed by [`Decimal`].
//!
//! Prices are immutable: every rule returns a new [`Price`] instead of
//! modifying its input. The non-negative invariant is enforced once, at
//! construction, so rules never have to re-check it.
//!
//! # Example
//! ```
//! use travel_discounts::pricing::price::Price;
//! use rust_decimal::Decimal;
//!
//! let price: Price = "300".parse().unwrap();
//! assert_eq!(price.amount(), Decimal::from(300));
//! assert!("-1".parse::<Price>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DiscountError;

/// Number of decimal places kept after a discount is applied.
pub const MONEY_SCALE: u32 = 2;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a price, rejecting negative amounts.
    ///
    /// # Errors
    /// Returns [`DiscountError::NegativePrice`] if `amount < 0`.
    pub fn new(amount: Decimal) -> Result<Self, DiscountError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DiscountError::NegativePrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    // Callers guarantee `amount >= 0`.
    pub(crate) fn from_non_negative(amount: Decimal) -> Self {
        debug_assert!(!amount.is_sign_negative() || amount.is_zero());
        Self(amount)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DiscountError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl FromStr for Price {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| anyhow::anyhow!("invalid price `{s}`: {e}"))?;
        Ok(Price::new(amount)?)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
