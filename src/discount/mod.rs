//! # Discount Rules
//!
//! Each rule maps a price and some context to a price that is never higher.
//! Rules are independent; none of them composes or stacks with another.
//!
//! - [`coupon`]: code + reference instant
//! - [`last_minute`]: travel date + reference instant
//! - [`loyalty`]: purchaser identity, with injected clock and travel history

pub mod coupon;
pub mod last_minute;
pub mod loyalty;

pub use coupon::CouponRule;
pub use last_minute::LastMinuteRule;
pub use loyalty::{LookbackWindow, LoyaltyDiscounter, LoyaltyRule};
