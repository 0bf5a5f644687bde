//! # Environment Variable Utilities
//!
//! Provides helpers for reading numeric settings from environment variables
//! with fallback defaults.
//!
//! These functions are used by [`DiscountPolicy::from_env`](super::policy::DiscountPolicy::from_env).
//!
//! # Examples
//! ```rust,no_run
//! use travel_discounts::config::env::read_u32;
//!
//! let days = read_u32("DISCOUNT_LAST_MINUTE_DAYS", 14);
//! ```

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if it is missing or fails to parse.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
///
/// Surrounding whitespace and quotes are ignored.
///
/// # Example
/// ```rust
/// use travel_discounts::config::env::read_u32_from;
///
/// assert_eq!(read_u32_from(|_| Some("'21'".into()), "DAYS", 14), 21);
/// assert_eq!(read_u32_from(|_| None, "DAYS", 14), 14);
/// ```
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|v| {
            v.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .parse::<u32>()
                .ok()
        })
        .unwrap_or(default)
}

/// Like [`read_u32_from`], but rejects values outside `range`.
pub fn read_u32_in_from<F>(
    provider: F,
    name: &str,
    range: std::ops::RangeInclusive<u32>,
    default: u32,
) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(raw) => {
            let v = read_u32_from(|_| Some(raw.clone()), name, default);
            if range.contains(&v) {
                v
            } else {
                tracing::warn!(
                    setting = name,
                    value = %raw,
                    "setting out of range, using default {}",
                    default
                );
                default
            }
        }
        None => default,
    }
}
