//! # Loyalty Discount
//!
//! Rewards purchasers who travelled often during the preceding calendar
//! year(s).
//!
//! - [`LoyaltyRule`]: the collaborator-free rule; counts a purchaser's
//!   travels inside the lookback window and applies the discount.
//! - [`LoyaltyDiscounter`]: wires a [`Clock`] and a [`TravelHistory`] into the
//!   rule. Each call to [`LoyaltyDiscounter::discount`] reads each
//!   collaborator exactly once; nothing is cached between calls.
//!
//! # Lookback window
//! The window covers the `lookback_years` full UTC calendar years before the
//! year of the reference instant, i.e. `[Jan 1 (year - n), Jan 1 year)`.
//! Travels in the current year do not count yet.

use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::config::policy::LoyaltyPolicy;
use crate::error::DiscountError;
use crate::pricing::{Price, apply_percentage_discount};
use crate::time::Clock;
use crate::travel::{TravelHistory, TravelRecord};

/// Half-open span of instants `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookbackWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl LookbackWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn start_of_year(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

#[derive(Clone, Debug, Default)]
pub struct LoyaltyRule {
    policy: LoyaltyPolicy,
}

impl LoyaltyRule {
    pub fn new(policy: LoyaltyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LoyaltyPolicy {
        &self.policy
    }

    /// Computes the lookback window ending at the start of `now`'s year.
    pub fn window(&self, now: DateTime<Utc>) -> LookbackWindow {
        let end = start_of_year(now.year()).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let start = i32::try_from(self.policy.lookback_years)
            .ok()
            .and_then(|n| now.year().checked_sub(n))
            .and_then(start_of_year)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        LookbackWindow { start, end }
    }

    /// Number of `user_id`'s travels inside the lookback window.
    pub fn qualifying_count(&self, travels: &[TravelRecord], user_id: &str, now: DateTime<Utc>) -> usize {
        let window = self.window(now);
        travels
            .iter()
            .filter(|t| t.is_bought_by(user_id))
            .filter(|t| window.contains(t.from))
            .count()
    }

    /// Applies the loyalty discount using an already-fetched travel list.
    ///
    /// # Errors
    /// Returns [`DiscountError::MissingUserId`] for a blank `user_id`.
    pub fn apply(
        &self,
        price: Price,
        user_id: &str,
        travels: &[TravelRecord],
        now: DateTime<Utc>,
    ) -> Result<Price, DiscountError> {
        ensure_user_id(user_id)?;

        let count = self.qualifying_count(travels, user_id, now);
        if count < self.policy.min_travels {
            debug!(user_id, count, required = self.policy.min_travels, "not enough travels for loyalty discount");
            return Ok(price);
        }

        let discounted = apply_percentage_discount(price, self.policy.rate);
        debug!(user_id, count, %price, %discounted, "loyalty discount applied");
        Ok(discounted)
    }
}

fn ensure_user_id(user_id: &str) -> Result<(), DiscountError> {
    if user_id.trim().is_empty() {
        return Err(DiscountError::MissingUserId);
    }
    Ok(())
}

/// Loyalty rule backed by injected time and travel history sources.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use chrono::{TimeZone, Utc};
/// use travel_discounts::discount::loyalty::LoyaltyDiscounter;
/// use travel_discounts::pricing::Price;
/// use travel_discounts::time::FixedClock;
/// use travel_discounts::travel::{InMemoryTravelHistory, TravelRecord};
///
/// let now = Utc.with_ymd_and_hms(2022, 2, 11, 12, 11, 10).unwrap();
/// let travels = InMemoryTravelHistory::with_records(vec![
///     TravelRecord::new(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(), "333"),
///     TravelRecord::new(Utc.with_ymd_and_hms(2021, 6, 13, 12, 11, 10).unwrap(), "333"),
///     TravelRecord::new(Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap(), "333"),
/// ]);
///
/// let discounter = LoyaltyDiscounter::new(Arc::new(FixedClock::new(now)), Arc::new(travels));
/// assert_eq!(discounter.discount(Price::from(300), "333").unwrap(), Price::from(240));
/// ```
#[derive(Clone)]
pub struct LoyaltyDiscounter {
    clock: Arc<dyn Clock>,
    travels: Arc<dyn TravelHistory>,
    rule: LoyaltyRule,
}

impl LoyaltyDiscounter {
    /// Creates a discounter with the default [`LoyaltyPolicy`].
    pub fn new(clock: Arc<dyn Clock>, travels: Arc<dyn TravelHistory>) -> Self {
        Self::with_rule(clock, travels, LoyaltyRule::default())
    }

    pub fn with_rule(clock: Arc<dyn Clock>, travels: Arc<dyn TravelHistory>, rule: LoyaltyRule) -> Self {
        Self { clock, travels, rule }
    }

    pub fn rule(&self) -> &LoyaltyRule {
        &self.rule
    }

    /// Discounts `price` if `user_id` qualifies as a loyal traveller.
    ///
    /// # Errors
    /// - [`DiscountError::MissingUserId`] for a blank `user_id`; no
    ///   collaborator is queried in that case.
    /// - [`DiscountError::Source`] if the travel history fails.
    pub fn discount(&self, price: Price, user_id: &str) -> Result<Price, DiscountError> {
        ensure_user_id(user_id)?;

        let now = self.clock.utc_now();
        let travels = self.travels.list()?;

        self.rule.apply(price, user_id, &travels, now)
    }
}
