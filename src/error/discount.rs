use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised at the boundary of the discount rules.
///
/// Non-matching input never produces an error: a wrong coupon, a distant
/// travel date or a user without enough history all leave the price as is.
/// Only ill-formed input is rejected here.
///
/// # Variants
/// - [`DiscountError::NegativePrice`]: a price below zero was supplied
/// - [`DiscountError::InvalidRate`]: a discount rate outside `0..=1`
/// - [`DiscountError::MissingUserId`]: an empty purchaser identity
/// - [`DiscountError::Source`]: a collaborator (clock, travel history) failed;
///   the original error is carried unchanged
///
/// # Example
/// ```
/// use travel_discounts::error::discount::DiscountError;
///
/// let err = DiscountError::MissingUserId;
/// assert_eq!(err.to_string(), "user id must not be empty");
/// ```
#[derive(Debug, Error)]
pub enum DiscountError {
    #[error("price must not be negative: {0}")]
    NegativePrice(Decimal),

    #[error("discount rate must be between 0 and 1: {0}")]
    InvalidRate(Decimal),

    #[error("user id must not be empty")]
    MissingUserId,

    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl DiscountError {
    /// Returns `true` for the invalid-argument family of errors.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, DiscountError::Source(_))
    }
}
