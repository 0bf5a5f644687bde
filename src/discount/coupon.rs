use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::policy::CouponPolicy;
use crate::pricing::{Price, apply_percentage_discount};

/// Discounts a price when a valid, unexpired coupon code is presented.
///
/// The reference instant is passed in by the caller; the rule never reads
/// the clock itself.
#[derive(Clone, Debug, Default)]
pub struct CouponRule {
    policy: CouponPolicy,
}

impl CouponRule {
    pub fn new(policy: CouponPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CouponPolicy {
        &self.policy
    }

    /// Returns `true` if `code` is accepted at `now`.
    ///
    /// The expiry date is inclusive: the whole of that UTC day qualifies.
    pub fn accepts(&self, code: &str, now: DateTime<Utc>) -> bool {
        code == self.policy.code && now.date_naive() <= self.policy.expires_on
    }

    /// Applies the coupon discount, or returns `price` unchanged.
    pub fn apply(&self, price: Price, code: &str, now: DateTime<Utc>) -> Price {
        if !self.accepts(code, now) {
            debug!(code, %now, "coupon not applicable");
            return price;
        }

        let discounted = apply_percentage_discount(price, self.policy.rate);
        debug!(code, %price, %discounted, rate = %self.policy.rate, "coupon applied");
        discounted
    }
}

/// Applies the default coupon policy.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use travel_discounts::discount::coupon;
/// use travel_discounts::pricing::Price;
///
/// let now = Utc.with_ymd_and_hms(2021, 5, 3, 12, 11, 10).unwrap();
/// let got = coupon::apply(Price::from(100), "CHEAPER_TRAVEL_2021", now);
/// assert_eq!(got, Price::from(80));
/// ```
pub fn apply(price: Price, code: &str, now: DateTime<Utc>) -> Price {
    CouponRule::default().apply(price, code, now)
}
