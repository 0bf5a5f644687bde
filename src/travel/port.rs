//! # Travel History Port
//!
//! Defines the read-only source of past travel records consumed by the
//! loyalty rule.
//!
//! - [`TravelHistory`]: returns every known record, for every purchaser.
//!
//! Filtering by purchaser happens inside the rule, not in the source, and the
//! order of the returned records carries no meaning.
use anyhow::Result;

use super::record::TravelRecord;

/// Read-only access to travel records (synchronous).
///
/// Implementations must be safe to share between threads; no write
/// operation exists on this port.
#[cfg_attr(test, mockall::automock)]
pub trait TravelHistory: Send + Sync {
    /// Returns all known travel records.
    ///
    /// Errors are returned to the caller unchanged by the loyalty rule.
    fn list(&self) -> Result<Vec<TravelRecord>>;
}
