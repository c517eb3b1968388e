// fcra-core/src/domain/reporting/portfolio.rs

use serde::Serialize;

use super::CategoryCounts;
use crate::domain::record::{Record, RemediationStatus};

/// Every record of a portfolio, by workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "Resolved")]
    pub resolved: u64,
    #[serde(rename = "Incomplete")]
    pub incomplete: u64,
    #[serde(rename = "Unsolved")]
    pub unsolved: u64,
    #[serde(rename = "Nonexceptions")]
    pub nonexceptions: u64,
}

impl StatusCounts {
    fn increment(&mut self, status: RemediationStatus) {
        match status {
            RemediationStatus::Resolved => self.resolved += 1,
            RemediationStatus::Incomplete => self.incomplete += 1,
            RemediationStatus::Unsolved => self.unsolved += 1,
            RemediationStatus::Nonexceptions => self.nonexceptions += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioStats {
    pub total_instances: u64,
    pub total_exceptions: u64,
    pub remediation_incomplete: u64,
    pub category_incomplete: CategoryCounts,
    pub status_counts: StatusCounts,
}

/// Statistics of a portfolio page. `records` must already be scoped to that
/// portfolio.
pub fn portfolio_stats(records: &[Record]) -> PortfolioStats {
    let mut stats = PortfolioStats::default();
    for record in records {
        stats.total_instances += 1;
        if record.is_exception() {
            stats.total_exceptions += 1;
        }
        if record.is_incomplete() {
            stats.remediation_incomplete += 1;
            if let Some(category) = record.category() {
                stats.category_incomplete.increment(category);
            }
        }
        if let Some(status) = record.status() {
            stats.status_counts.increment(status);
        }
    }
    stats
}
