//! # Discount Policy Configuration
//!
//! Named constants for every rate, window and threshold used by the rules,
//! plus a loader that lets an embedding application override them from
//! environment variables.
//!
//! Automatically loads `.env` files for non-production environments, the
//! same way the rest of the configuration does: `DOTENV_FILE` first, then
//! `.env.{APP_ENV}`, then `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `DISCOUNT_COUPON_PERCENT` | Coupon discount, `0..=100` | `20` |
//! | `DISCOUNT_LAST_MINUTE_DAYS` | Last-minute window in days, `0..=365` | `14` |
//! | `DISCOUNT_LAST_MINUTE_PERCENT` | Last-minute discount, `0..=100` | `20` |
//! | `DISCOUNT_LOYALTY_MIN_TRAVELS` | Travels needed to qualify, `>= 1` | `3` |
//! | `DISCOUNT_LOYALTY_LOOKBACK_YEARS` | Calendar years counted, `1..=100` | `1` |
//! | `DISCOUNT_LOYALTY_PERCENT` | Loyalty discount, `0..=100` | `20` |
//!
//! Missing, malformed or out-of-range values fall back to the defaults.
//!
//! # Example
//! ```rust,no_run
//! use travel_discounts::config::policy::DiscountPolicy;
//!
//! let policy = DiscountPolicy::from_env();
//! println!("last-minute window: {} days", policy.last_minute.window.num_days());
//! ```

use std::env;

use chrono::{NaiveDate, TimeDelta};

use crate::config::env::read_u32_in_from;
use crate::pricing::DiscountRate;

/// The only registered coupon code.
pub const COUPON_CODE: &str = "CHEAPER_TRAVEL_2021";
/// Last day (UTC, inclusive) on which [`COUPON_CODE`] is accepted.
pub const COUPON_EXPIRES_ON: NaiveDate = match NaiveDate::from_ymd_opt(2021, 12, 31) {
    Some(date) => date,
    None => panic!("invalid coupon expiry date"),
};
pub const COUPON_DISCOUNT_PERCENT: u32 = 20;

/// Maximum gap between "now" and the travel date for a last-minute discount.
pub const LAST_MINUTE_WINDOW_DAYS: u32 = 14;
pub const LAST_MINUTE_DISCOUNT_PERCENT: u32 = 20;

/// Travels needed inside the lookback window to earn the loyalty discount.
pub const LOYALTY_MIN_TRAVELS: u32 = 3;
/// Number of full calendar years, before the current one, that are counted.
pub const LOYALTY_LOOKBACK_YEARS: u32 = 1;
pub const LOYALTY_DISCOUNT_PERCENT: u32 = 20;

/// Coupon rule settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CouponPolicy {
    pub code: String,
    pub expires_on: NaiveDate,
    pub rate: DiscountRate,
}

impl Default for CouponPolicy {
    fn default() -> Self {
        Self {
            code: COUPON_CODE.to_string(),
            expires_on: COUPON_EXPIRES_ON,
            rate: DiscountRate::percent_clamped(COUPON_DISCOUNT_PERCENT),
        }
    }
}

/// Last-minute rule settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastMinutePolicy {
    /// Inclusive upper bound on `travel_date - now`.
    pub window: TimeDelta,
    pub rate: DiscountRate,
}

impl Default for LastMinutePolicy {
    fn default() -> Self {
        Self {
            window: TimeDelta::days(i64::from(LAST_MINUTE_WINDOW_DAYS)),
            rate: DiscountRate::percent_clamped(LAST_MINUTE_DISCOUNT_PERCENT),
        }
    }
}

/// Loyalty rule settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoyaltyPolicy {
    pub min_travels: usize,
    pub lookback_years: u32,
    pub rate: DiscountRate,
}

impl Default for LoyaltyPolicy {
    fn default() -> Self {
        Self {
            min_travels: LOYALTY_MIN_TRAVELS as usize,
            lookback_years: LOYALTY_LOOKBACK_YEARS,
            rate: DiscountRate::percent_clamped(LOYALTY_DISCOUNT_PERCENT),
        }
    }
}

/// Top-level policy covering all three rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscountPolicy {
    pub coupon: CouponPolicy,
    pub last_minute: LastMinutePolicy,
    pub loyalty: LoyaltyPolicy,
}

impl DiscountPolicy {
    /// Loads the policy from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported variables and falls back to the constants.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        Self::from_provider(|k| env::var(k).ok())
    }

    /// Builds the policy from an arbitrary key/value provider.
    ///
    /// # Example
    /// ```rust
    /// use travel_discounts::config::policy::DiscountPolicy;
    ///
    /// let policy = DiscountPolicy::from_provider(|k| {
    ///     (k == "DISCOUNT_LOYALTY_MIN_TRAVELS").then(|| "5".to_string())
    /// });
    /// assert_eq!(policy.loyalty.min_travels, 5);
    /// ```
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let percent = |name: &str, default: u32| {
            DiscountRate::percent_clamped(read_u32_in_from(&provider, name, 0..=100, default))
        };

        let last_minute_days =
            read_u32_in_from(&provider, "DISCOUNT_LAST_MINUTE_DAYS", 0..=365, LAST_MINUTE_WINDOW_DAYS);

        let policy = Self {
            coupon: CouponPolicy {
                rate: percent("DISCOUNT_COUPON_PERCENT", COUPON_DISCOUNT_PERCENT),
                ..CouponPolicy::default()
            },
            last_minute: LastMinutePolicy {
                window: TimeDelta::days(i64::from(last_minute_days)),
                rate: percent("DISCOUNT_LAST_MINUTE_PERCENT", LAST_MINUTE_DISCOUNT_PERCENT),
            },
            loyalty: LoyaltyPolicy {
                min_travels: read_u32_in_from(
                    &provider,
                    "DISCOUNT_LOYALTY_MIN_TRAVELS",
                    1..=u32::MAX,
                    LOYALTY_MIN_TRAVELS,
                ) as usize,
                lookback_years: read_u32_in_from(
                    &provider,
                    "DISCOUNT_LOYALTY_LOOKBACK_YEARS",
                    1..=100,
                    LOYALTY_LOOKBACK_YEARS,
                ),
                rate: percent("DISCOUNT_LOYALTY_PERCENT", LOYALTY_DISCOUNT_PERCENT),
            },
        };

        tracing::debug!(?policy, "discount policy loaded");
        policy
    }
}
