pub mod env;
pub mod policy;

pub use policy::{CouponPolicy, DiscountPolicy, LastMinutePolicy, LoyaltyPolicy};
