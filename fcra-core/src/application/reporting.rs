// fcra-core/src/application/reporting.rs

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::domain::record::{Record, RecordField};
use crate::domain::record::portfolio::storage_label;
use crate::domain::reporting::{
    self, FilterOptions, PortfolioStats, SummaryRow, SummaryStats, TrendMetric, TrendSeries,
};
use crate::error::FcraError;
use crate::ports::{PortfolioFilter, RecordStore};

/// Read side of the dashboard.
///
/// Every call takes a fresh snapshot from the store and recomputes; nothing
/// is cached between calls.
#[derive(Clone)]
pub struct ReportingService {
    store: Arc<dyn RecordStore>,
}

impl ReportingService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    async fn snapshot(&self) -> Result<Vec<Record>, FcraError> {
        let start = Instant::now();
        let records = self.store.all_records().await?;
        debug!(
            engine = self.store.engine_name(),
            rows = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded record snapshot"
        );
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn summary_stats(&self) -> Result<SummaryStats, FcraError> {
        Ok(reporting::summary_stats(&self.snapshot().await?))
    }

    #[instrument(skip(self))]
    pub async fn summary_table(&self) -> Result<Vec<SummaryRow>, FcraError> {
        Ok(reporting::summary_table(&self.snapshot().await?))
    }

    /// Latest process date as `YYYY-MM-DD`, or an empty string.
    #[instrument(skip(self))]
    pub async fn as_of_date(&self) -> Result<String, FcraError> {
        Ok(reporting::as_of_date(&self.snapshot().await?))
    }

    #[instrument(skip(self))]
    pub async fn trend(&self, metric: TrendMetric) -> Result<TrendSeries, FcraError> {
        Ok(reporting::trend(&self.snapshot().await?, metric))
    }

    /// Accepts either portfolio label. Unknown labels yield zeroed stats.
    #[instrument(skip(self))]
    pub async fn portfolio_stats(&self, portfolio: &str) -> Result<PortfolioStats, FcraError> {
        let records = self
            .store
            .find_by_portfolio(&PortfolioFilter::new(portfolio))
            .await?;
        Ok(reporting::portfolio_stats(&records))
    }

    #[instrument(skip(self))]
    pub async fn portfolio_records(
        &self,
        portfolio: &str,
        status: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Record>, FcraError> {
        let filter = PortfolioFilter::new(portfolio)
            .with_status(status)
            .with_category(category);
        self.store.find_by_portfolio(&filter).await
    }

    #[instrument(skip(self))]
    pub async fn filter_options(&self, portfolio: &str) -> Result<FilterOptions, FcraError> {
        let stored = storage_label(portfolio);
        Ok(FilterOptions {
            remediation_statuses: self
                .store
                .distinct_values(RecordField::RemediationStatus, stored)
                .await?,
            remediation_categories: self
                .store
                .distinct_values(RecordField::RemediationCategory, stored)
                .await?,
        })
    }

    #[instrument(skip(self))]
    pub async fn open_task_count(&self, assignee: &str) -> Result<u64, FcraError> {
        Ok(reporting::open_task_count(&self.snapshot().await?, assignee))
    }
}
