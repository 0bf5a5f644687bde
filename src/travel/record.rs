use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A past travel purchase as reported by a [`TravelHistory`](super::port::TravelHistory).
///
/// The rules only read these records; they never mutate or persist them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// Start of the travel window (UTC).
    pub from: DateTime<Utc>,
    /// Identity of the purchaser.
    pub bought_by: String,
}

impl TravelRecord {
    pub fn new(from: DateTime<Utc>, bought_by: impl Into<String>) -> Self {
        Self {
            from,
            bought_by: bought_by.into(),
        }
    }

    /// Returns `true` if this record was bought by `user_id`.
    pub fn is_bought_by(&self, user_id: &str) -> bool {
        self.bought_by == user_id
    }
}
