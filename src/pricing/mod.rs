//! # Pricing Primitives
//!
//! - [`Price`]: non-negative monetary amount
//! - [`DiscountRate`]: fractional rate in `0..=1`
//! - [`apply_percentage_discount`]: the one place a rate is applied to a price

pub mod price;
pub mod rate;

use rust_decimal::{Decimal, RoundingStrategy};

pub use price::{MONEY_SCALE, Price};
pub use rate::DiscountRate;

/// Applies `rate` to `price` and returns the reduced price.
///
/// Every rule goes through this function so rounding is identical
/// everywhere. The result is truncated toward zero at [`MONEY_SCALE`]
/// decimal places, which keeps it within `0..=price`.
///
/// # Example
/// ```
/// use travel_discounts::pricing::{apply_percentage_discount, DiscountRate, Price};
///
/// let price: Price = "123.45".parse().unwrap();
/// let rate = DiscountRate::percent(20).unwrap();
/// assert_eq!(apply_percentage_discount(price, rate).to_string(), "98.76");
/// ```
pub fn apply_percentage_discount(price: Price, rate: DiscountRate) -> Price {
    let remaining = Decimal::ONE - rate.fraction();
    let discounted = (price.amount() * remaining)
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero);
    Price::from_non_negative(discounted)
}
