use std::fmt;

use rust_decimal::Decimal;

use crate::error::DiscountError;

/// A fractional discount rate in the range `0..=1` (`0.2` = 20% off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Creates a rate from a fraction.
    ///
    /// # Errors
    /// Returns [`DiscountError::InvalidRate`] if the fraction is outside `0..=1`.
    pub fn new(fraction: Decimal) -> Result<Self, DiscountError> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(DiscountError::InvalidRate(fraction));
        }
        Ok(Self(fraction))
    }

    /// Creates a rate from a whole percentage, e.g. `percent(20)` for 20%.
    ///
    /// # Errors
    /// Returns [`DiscountError::InvalidRate`] for percentages above 100.
    pub fn percent(percent: u32) -> Result<Self, DiscountError> {
        Self::new(Decimal::new(i64::from(percent), 2))
    }

    // Used for compiled-in defaults, which are always <= 100.
    pub(crate) fn percent_clamped(percent: u32) -> Self {
        Self(Decimal::new(i64::from(percent.min(100)), 2))
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_builds_fraction() {
        assert_eq!(DiscountRate::percent(20).unwrap().fraction(), dec!(0.2));
        assert_eq!(DiscountRate::percent(0).unwrap().fraction(), dec!(0));
        assert_eq!(DiscountRate::percent(100).unwrap().fraction(), dec!(1));
    }

    #[test]
    fn out_of_range_rates_are_rejected() {
        assert!(DiscountRate::percent(101).is_err());
        assert!(DiscountRate::new(dec!(-0.1)).is_err());
        assert!(DiscountRate::new(dec!(1.0001)).is_err());
    }

    #[test]
    fn display_as_percentage() {
        assert_eq!(DiscountRate::percent(20).unwrap().to_string(), "20%");
        assert_eq!(DiscountRate::new(dec!(0.125)).unwrap().to_string(), "12.5%");
    }
}
