// fcra-core/src/ports/record_store.rs

// What the application needs from persistence, without knowing the engine.
// The DuckDB adapter is the production implementation.

use async_trait::async_trait;

use crate::domain::record::portfolio::storage_label;
use crate::domain::record::{FieldUpdate, NewRecord, Record, RecordField};
use crate::error::FcraError;

/// Exact-match scan of one portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioFilter {
    /// Stored portfolio value (`Consumers`, not `Consumer`).
    pub portfolio: String,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl PortfolioFilter {
    /// Normalizes a display label (`Consumer` becomes `Consumers`).
    pub fn new(portfolio_label: &str) -> Self {
        Self {
            portfolio: storage_label(portfolio_label).to_string(),
            status: None,
            category: None,
        }
    }

    /// An empty string means "no filter", as in the dashboard query string.
    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.portfolio == self.portfolio
            && self
                .status
                .as_ref()
                .is_none_or(|s| &record.remediation_status == s)
            && self
                .category
                .as_ref()
                .is_none_or(|c| &record.remediation_category == c)
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Replaces the whole collection in one transaction. Ids are assigned in
    /// input order. Returns the number of inserted rows.
    async fn replace_all(&self, rows: Vec<NewRecord>) -> Result<usize, FcraError>;

    /// Adds rows after the existing ones, in one transaction.
    async fn append(&self, rows: Vec<NewRecord>) -> Result<usize, FcraError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, FcraError>;

    /// Every record, ordered by id.
    async fn all_records(&self) -> Result<Vec<Record>, FcraError>;

    /// Records matching `filter`, ordered by id.
    async fn find_by_portfolio(&self, filter: &PortfolioFilter) -> Result<Vec<Record>, FcraError>;

    /// Writes one field (plus `action_date` when the update carries it).
    /// Returns the number of affected rows: 0 for an unknown id.
    async fn update_field(&self, id: i64, update: &FieldUpdate) -> Result<usize, FcraError>;

    /// Sorted distinct non-empty values of `field` inside one portfolio.
    async fn distinct_values(
        &self,
        field: RecordField,
        portfolio: &str,
    ) -> Result<Vec<String>, FcraError>;

    fn engine_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::model::fixtures::record;

    #[test]
    fn test_filter_normalizes_consumer_and_ignores_empty_values() {
        let filter = PortfolioFilter::new("Consumer")
            .with_status(Some(""))
            .with_category(Some("Technology"));
        assert_eq!(filter.portfolio, "Consumers");
        assert_eq!(filter.status, None);
        assert_eq!(filter.category.as_deref(), Some("Technology"));
    }

    #[test]
    fn test_filter_matches_exactly() {
        let filter = PortfolioFilter::new("TDAF").with_status(Some("Incomplete"));
        assert!(filter.matches(&record(1, "TDAF", "Incomplete", "")));
        assert!(!filter.matches(&record(2, "TDAF", "Resolved", "")));
        assert!(!filter.matches(&record(3, "tdaf", "Incomplete", "")));
    }
}
