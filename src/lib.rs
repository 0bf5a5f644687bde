//! # travel_discounts
//!
//! Pricing rules for travel purchases.
//!
//! This crate evaluates independent discount rules against a base price:
//! - Coupon codes with an expiry date (`discount::coupon`)
//! - Last-minute bookings (`discount::last_minute`)
//! - Loyalty based on a purchaser's travel history (`discount::loyalty`)
//!
//! Time and travel history are external collaborators behind the
//! [`time::Clock`] and [`travel::TravelHistory`] ports.
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use travel_discounts::chrono::{TimeZone, Utc};
//! use travel_discounts::discount::{coupon, last_minute};
//! use travel_discounts::pricing::Price;
//!
//! let now = Utc.with_ymd_and_hms(2021, 5, 20, 12, 11, 10).unwrap();
//! let travel = Utc.with_ymd_and_hms(2021, 6, 1, 10, 0, 0).unwrap();
//!
//! assert_eq!(coupon::apply(Price::from(100), "CHEAPER_TRAVEL_2021", now), Price::from(80));
//! assert_eq!(last_minute::apply(Price::from(200), travel, now), Price::from(160));
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use rust_decimal;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod discount;
pub mod error;
pub mod pricing;
pub mod time;
pub mod travel;
