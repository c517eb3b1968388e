// fcra-core/src/domain/reporting/mod.rs

//! Aggregation engine.
//!
//! Every function here is a pure read over a record snapshot. Nothing is
//! cached: callers pass the current store contents on each call.

pub mod freshness;
pub mod portfolio;
pub mod summary;
pub mod trend;
pub mod workload;

pub use freshness::{as_of_date, latest_date};
pub use portfolio::{PortfolioStats, StatusCounts, portfolio_stats};
pub use summary::{SummaryRow, SummaryStats, summary_stats, summary_table};
pub use trend::{TrendMetric, TrendSeries, trend};
pub use workload::open_task_count;

use serde::Serialize;

use crate::domain::record::{Portfolio, RemediationCategory};

/// One value per named portfolio, serialized under the display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ByPortfolio<T> {
    #[serde(rename = "Credit Cards")]
    pub credit_cards: T,
    #[serde(rename = "TDAF")]
    pub tdaf: T,
    #[serde(rename = "Consumer")]
    pub consumer: T,
}

impl<T> ByPortfolio<T> {
    pub fn from_fn(mut f: impl FnMut(Portfolio) -> T) -> Self {
        Self {
            credit_cards: f(Portfolio::CreditCards),
            tdaf: f(Portfolio::Tdaf),
            consumer: f(Portfolio::Consumers),
        }
    }

    pub fn get(&self, portfolio: Portfolio) -> &T {
        match portfolio {
            Portfolio::CreditCards => &self.credit_cards,
            Portfolio::Tdaf => &self.tdaf,
            Portfolio::Consumers => &self.consumer,
        }
    }

    pub fn get_mut(&mut self, portfolio: Portfolio) -> &mut T {
        match portfolio {
            Portfolio::CreditCards => &mut self.credit_cards,
            Portfolio::Tdaf => &mut self.tdaf,
            Portfolio::Consumers => &mut self.consumer,
        }
    }
}

impl ByPortfolio<u64> {
    pub fn sum(&self) -> u64 {
        self.credit_cards + self.tdaf + self.consumer
    }
}

/// Per-portfolio counts plus their sum over the three named portfolios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioTotals {
    pub total: u64,
    #[serde(flatten)]
    pub by_portfolio: ByPortfolio<u64>,
}

impl From<ByPortfolio<u64>> for PortfolioTotals {
    fn from(by_portfolio: ByPortfolio<u64>) -> Self {
        Self {
            total: by_portfolio.sum(),
            by_portfolio,
        }
    }
}

/// Incomplete records per remediation category. Empty categories are not
/// counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    #[serde(rename = "Internal")]
    pub internal: u64,
    #[serde(rename = "LOB engagement")]
    pub lob_engagement: u64,
    #[serde(rename = "Technology")]
    pub technology: u64,
}

impl CategoryCounts {
    pub fn increment(&mut self, category: RemediationCategory) {
        match category {
            RemediationCategory::Internal => self.internal += 1,
            RemediationCategory::LobEngagement => self.lob_engagement += 1,
            RemediationCategory::Technology => self.technology += 1,
        }
    }

    pub fn get(&self, category: RemediationCategory) -> u64 {
        match category {
            RemediationCategory::Internal => self.internal,
            RemediationCategory::LobEngagement => self.lob_engagement,
            RemediationCategory::Technology => self.technology,
        }
    }
}

/// Distinct non-empty values offered as filters on a portfolio page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub remediation_statuses: Vec<String>,
    pub remediation_categories: Vec<String>,
}
