use chrono::{DateTime, Utc};

/// A port that provides the **current instant** in UTC.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Discount rules do **not** read the system clock themselves
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - Instants are always UTC; callers never adjust for local time zones.
/// - This trait represents an **external capability**, like the travel history source.
///
/// # Typical Implementations
/// - `SystemClock`: reads the OS clock
/// - `FixedClock`: returns a constant instant (for testing)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn utc_now(&self) -> DateTime<Utc>;
}
