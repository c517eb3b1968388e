// fcra-core/src/domain/reporting/trend.rs

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::ByPortfolio;
use crate::domain::dates::month_bucket;
use crate::domain::error::DomainError;
use crate::domain::record::{Record, RemediationCategory};

/// Which records a trend counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendMetric {
    #[default]
    Instances,
    Exceptions,
    Remediation,
    Lob,
}

impl TrendMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instances => "instances",
            Self::Exceptions => "exceptions",
            Self::Remediation => "remediation",
            Self::Lob => "lob",
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Instances => true,
            Self::Exceptions => record.is_exception(),
            Self::Remediation => record.is_incomplete(),
            Self::Lob => record.is_incomplete_in(RemediationCategory::LobEngagement),
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrendMetric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instances" => Ok(Self::Instances),
            "exceptions" => Ok(Self::Exceptions),
            "remediation" => Ok(Self::Remediation),
            "lob" => Ok(Self::Lob),
            other => Err(DomainError::UnknownMetric(other.to_string())),
        }
    }
}

/// Monthly series per portfolio, each aligned with `labels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub series: ByPortfolio<Vec<u64>>,
}

/// Buckets records by the month of `date_of_info`.
///
/// Labels are the sorted months actually present among records whose date
/// parses, whatever their portfolio or metric outcome. Missing months are
/// not zero-filled. Unparseable dates are skipped.
pub fn trend(records: &[Record], metric: TrendMetric) -> TrendSeries {
    let bucketed: Vec<(String, &Record)> = records
        .iter()
        .filter_map(|record| month_bucket(&record.date_of_info).map(|month| (month, record)))
        .collect();

    let labels: Vec<String> = bucketed
        .iter()
        .map(|(month, _)| month.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index: BTreeMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, month)| (month.as_str(), i))
        .collect();

    let mut series = ByPortfolio::from_fn(|_| vec![0u64; labels.len()]);
    for (month, record) in &bucketed {
        let Some(portfolio) = record.portfolio() else {
            continue;
        };
        if !metric.matches(record) {
            continue;
        }
        if let Some(&i) = index.get(month.as_str()) {
            series.get_mut(portfolio)[i] += 1;
        }
    }

    TrendSeries { labels, series }
}
