pub mod discount;

pub use discount::DiscountError;
