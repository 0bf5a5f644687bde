use anyhow::{Context, Result};

use super::port::TravelHistory;
use super::record::TravelRecord;

/// In-memory implementation of [`TravelHistory`].
///
/// Holds a fixed snapshot of records. Handy for embedding the rules in tools
/// or tests without a real data store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTravelHistory {
    records: Vec<TravelRecord>,
}

impl InMemoryTravelHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history pre-populated with `records`.
    pub fn with_records(records: Vec<TravelRecord>) -> Self {
        Self { records }
    }

    /// Load a history from a JSON array of records.
    ///
    /// # Example
    /// ```
    /// use travel_discounts::travel::{InMemoryTravelHistory, TravelHistory};
    ///
    /// let json = r#"[{"from":"2021-01-01T00:00:00Z","bought_by":"333"}]"#;
    /// let history = InMemoryTravelHistory::from_json(json).unwrap();
    /// assert_eq!(history.list().unwrap().len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<TravelRecord> =
            serde_json::from_str(json).context("invalid travel history JSON")?;
        Ok(Self::with_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TravelHistory for InMemoryTravelHistory {
    fn list(&self) -> Result<Vec<TravelRecord>> {
        Ok(self.records.clone())
    }
}
