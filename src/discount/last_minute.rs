use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::config::policy::LastMinutePolicy;
use crate::pricing::{Price, apply_percentage_discount};

/// Discounts travel booked shortly before departure.
///
/// A travel qualifies when `0 <= travel_date - now <= window`. Travel that
/// already started is not last-minute.
#[derive(Clone, Debug, Default)]
pub struct LastMinuteRule {
    policy: LastMinutePolicy,
}

impl LastMinuteRule {
    pub fn new(policy: LastMinutePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LastMinutePolicy {
        &self.policy
    }

    pub fn is_last_minute(&self, travel_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let gap = travel_date - now;
        gap >= TimeDelta::zero() && gap <= self.policy.window
    }

    /// Applies the last-minute discount, or returns `price` unchanged.
    pub fn apply(&self, price: Price, travel_date: DateTime<Utc>, now: DateTime<Utc>) -> Price {
        if !self.is_last_minute(travel_date, now) {
            debug!(%travel_date, %now, "travel date outside last-minute window");
            return price;
        }

        let discounted = apply_percentage_discount(price, self.policy.rate);
        debug!(%travel_date, %price, %discounted, "last-minute discount applied");
        discounted
    }
}

/// Applies the default last-minute policy.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use travel_discounts::discount::last_minute;
/// use travel_discounts::pricing::Price;
///
/// let travel = Utc.with_ymd_and_hms(2021, 6, 1, 10, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2021, 5, 20, 12, 11, 10).unwrap();
/// assert_eq!(last_minute::apply(Price::from(200), travel, now), Price::from(160));
/// ```
pub fn apply(price: Price, travel_date: DateTime<Utc>, now: DateTime<Utc>) -> Price {
    LastMinuteRule::default().apply(price, travel_date, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::DiscountRate;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn should_discount_by_last_minute() {
        let got = apply(Price::from(200), at(2021, 6, 1, 10, 0, 0), at(2021, 5, 20, 12, 11, 10));
        assert_eq!(got, Price::from(160));
    }

    #[test]
    fn should_not_discount_by_last_minute() {
        let got = apply(Price::from(123), at(2022, 12, 1, 10, 0, 0), at(2021, 3, 4, 12, 11, 10));
        assert_eq!(got, Price::from(123));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let rule = LastMinuteRule::default();
        let now = at(2021, 5, 1, 0, 0, 0);

        assert!(rule.is_last_minute(at(2021, 5, 15, 0, 0, 0), now));
        assert!(!rule.is_last_minute(at(2021, 5, 15, 0, 0, 1), now));
    }

    #[test]
    fn departure_right_now_qualifies() {
        let now = at(2021, 5, 1, 8, 0, 0);
        assert!(LastMinuteRule::default().is_last_minute(now, now));
    }

    #[test]
    fn past_travel_is_not_discounted() {
        let got = apply(Price::from(200), at(2021, 5, 19, 10, 0, 0), at(2021, 5, 20, 12, 11, 10));
        assert_eq!(got, Price::from(200));
    }

    #[test]
    fn custom_window_is_honoured() {
        let rule = LastMinuteRule::new(LastMinutePolicy {
            window: TimeDelta::days(3),
            rate: DiscountRate::percent(10).unwrap(),
        });
        let now = at(2021, 5, 20, 0, 0, 0);

        assert_eq!(rule.apply(Price::from(50), at(2021, 5, 22, 0, 0, 0), now), Price::from(45));
        assert_eq!(rule.apply(Price::from(50), at(2021, 5, 25, 0, 0, 0), now), Price::from(50));
    }
}
