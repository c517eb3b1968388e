// fcra-core/src/domain/reporting/summary.rs

use serde::Serialize;

use super::{ByPortfolio, CategoryCounts, PortfolioTotals};
use crate::domain::record::{Portfolio, Record, RemediationCategory};

/// Label of the first summary table row.
pub const OVERALL: &str = "Overall";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LobTotal {
    pub total: u64,
}

/// Headline cards of the summary page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub instances: PortfolioTotals,
    pub exceptions: PortfolioTotals,
    pub remediation_incomplete: PortfolioTotals,
    pub lob_incomplete: LobTotal,
    pub lob_incomplete_by_portfolio: ByPortfolio<u64>,
    pub category_incomplete: CategoryCounts,
}

/// Computes the summary cards.
///
/// Portfolio totals only add up the three named portfolios. The category
/// breakdown and `lob_incomplete.total` look at every record, whatever its
/// portfolio; the latter also counts non-empty categories outside the
/// known three.
pub fn summary_stats(records: &[Record]) -> SummaryStats {
    let mut instances = ByPortfolio::<u64>::default();
    let mut exceptions = ByPortfolio::<u64>::default();
    let mut incomplete = ByPortfolio::<u64>::default();
    let mut lob_by_portfolio = ByPortfolio::<u64>::default();
    let mut category_incomplete = CategoryCounts::default();
    let mut categorized_incomplete = 0;

    for record in records {
        if record.is_incomplete() && !record.remediation_category.is_empty() {
            categorized_incomplete += 1;
            if let Some(category) = record.category() {
                category_incomplete.increment(category);
            }
        }

        let Some(portfolio) = record.portfolio() else {
            continue;
        };
        *instances.get_mut(portfolio) += 1;
        if record.is_exception() {
            *exceptions.get_mut(portfolio) += 1;
        }
        if record.is_incomplete() {
            *incomplete.get_mut(portfolio) += 1;
        }
        if record.is_incomplete_in(RemediationCategory::LobEngagement) {
            *lob_by_portfolio.get_mut(portfolio) += 1;
        }
    }

    SummaryStats {
        instances: instances.into(),
        exceptions: exceptions.into(),
        remediation_incomplete: incomplete.into(),
        lob_incomplete: LobTotal {
            total: categorized_incomplete,
        },
        lob_incomplete_by_portfolio: lob_by_portfolio,
        category_incomplete,
    }
}

/// One line of the summary table (and of the summary export).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub portfolio: String,
    pub instances: u64,
    pub exceptions: u64,
    pub remediation_incomplete: u64,
    pub lob_incomplete: u64,
    pub internal_incomplete: u64,
    pub technology_incomplete: u64,
    pub ninety_days_incomplete: u64,
}

impl SummaryRow {
    fn tally<'a>(label: &str, records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut row = SummaryRow {
            portfolio: label.to_string(),
            ..Default::default()
        };
        for record in records {
            row.instances += 1;
            if record.is_exception() {
                row.exceptions += 1;
            }
            if !record.is_incomplete() {
                continue;
            }
            row.remediation_incomplete += 1;
            match record.category() {
                Some(RemediationCategory::LobEngagement) => row.lob_incomplete += 1,
                Some(RemediationCategory::Internal) => row.internal_incomplete += 1,
                Some(RemediationCategory::Technology) => row.technology_incomplete += 1,
                None => {}
            }
            if record.is_aged_incomplete() {
                row.ninety_days_incomplete += 1;
            }
        }
        row
    }
}

/// `Overall` over every record, then one row per named portfolio in
/// canonical order.
///
/// Records outside the three portfolios are counted in `Overall` only, so
/// `Overall` can exceed the sum of the portfolio rows. Portfolio rows are
/// emitted even when empty.
pub fn summary_table(records: &[Record]) -> Vec<SummaryRow> {
    let mut rows = Vec::with_capacity(Portfolio::ALL.len() + 1);
    rows.push(SummaryRow::tally(OVERALL, records));
    for portfolio in Portfolio::ALL {
        rows.push(SummaryRow::tally(
            portfolio.display_name(),
            records.iter().filter(|r| r.portfolio() == Some(portfolio)),
        ));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::model::fixtures::record;

    fn sample() -> Vec<Record> {
        let mut aged = record(3, "Credit Cards", "Incomplete", "Internal");
        aged.aging = 120;
        vec![
            record(1, "Credit Cards", "Nonexceptions", ""),
            record(2, "Credit Cards", "Incomplete", "LOB engagement"),
            aged,
            record(4, "TDAF", "Resolved", "Internal"),
            record(5, "TDAF", "Incomplete", "LOB engagement"),
            record(6, "Consumers", "Unsolved", "Technology"),
            record(7, "Consumers", "Incomplete", "Technology"),
            record(8, "Consumers", "Incomplete", ""),
            record(9, "Mortgages", "Incomplete", "LOB engagement"),
            record(10, "", "Nonexceptions", ""),
        ]
    }

    #[test]
    fn test_summary_stats_counts_per_portfolio() {
        let stats = summary_stats(&sample());

        assert_eq!(stats.instances.by_portfolio.credit_cards, 3);
        assert_eq!(stats.instances.by_portfolio.tdaf, 2);
        assert_eq!(stats.instances.by_portfolio.consumer, 3);
        // Mortgages and the blank portfolio are outside the totals.
        assert_eq!(stats.instances.total, 8);

        assert_eq!(stats.exceptions.total, 7);
        assert_eq!(stats.remediation_incomplete.total, 5);
        assert_eq!(stats.remediation_incomplete.by_portfolio.consumer, 2);

        assert_eq!(stats.lob_incomplete_by_portfolio.credit_cards, 1);
        assert_eq!(stats.lob_incomplete_by_portfolio.tdaf, 1);
        assert_eq!(stats.lob_incomplete_by_portfolio.consumer, 0);
    }

    #[test]
    fn test_category_breakdown_spans_all_portfolios() {
        let stats = summary_stats(&sample());

        // Mortgages' LOB engagement record is included here.
        assert_eq!(stats.category_incomplete.lob_engagement, 3);
        assert_eq!(stats.category_incomplete.internal, 1);
        assert_eq!(stats.category_incomplete.technology, 1);
        assert_eq!(stats.lob_incomplete.total, 5);
    }

    #[test]
    fn test_lob_total_counts_unlisted_categories() {
        let records = vec![
            record(1, "TDAF", "Incomplete", "Vendor"),
            record(2, "TDAF", "Incomplete", "Internal"),
            record(3, "TDAF", "Incomplete", ""),
        ];
        let stats = summary_stats(&records);
        assert_eq!(stats.category_incomplete.internal, 1);
        assert_eq!(stats.lob_incomplete.total, 2);
    }

    #[test]
    fn test_exceptions_equal_total_minus_nonexceptions() {
        let records = sample();
        let stats = summary_stats(&records);
        for portfolio in Portfolio::ALL {
            let scoped: Vec<_> = records
                .iter()
                .filter(|r| r.portfolio() == Some(portfolio))
                .collect();
            let nonexceptions = scoped
                .iter()
                .filter(|r| r.remediation_status == "Nonexceptions")
                .count() as u64;
            assert_eq!(
                *stats.exceptions.by_portfolio.get(portfolio),
                scoped.len() as u64 - nonexceptions
            );
        }
    }

    #[test]
    fn test_summary_table_overall_includes_unknown_portfolios() {
        let rows = summary_table(&sample());
        let labels: Vec<_> = rows.iter().map(|r| r.portfolio.as_str()).collect();
        assert_eq!(labels, vec!["Overall", "Credit Cards", "TDAF", "Consumer"]);

        let overall = &rows[0];
        assert_eq!(overall.instances, 10);
        let portfolio_sum: u64 = rows[1..].iter().map(|r| r.instances).sum();
        assert_eq!(portfolio_sum, 8);

        assert_eq!(overall.remediation_incomplete, 6);
        assert_eq!(overall.lob_incomplete, 3);
        assert_eq!(overall.internal_incomplete, 1);
        assert_eq!(overall.technology_incomplete, 1);
        assert_eq!(overall.ninety_days_incomplete, 1);
    }

    #[test]
    fn test_summary_table_rows_for_empty_store() {
        let rows = summary_table(&[]);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.instances == 0));
    }

    #[test]
    fn test_summary_table_portfolio_rows() {
        let rows = summary_table(&sample());
        let credit_cards = &rows[1];
        assert_eq!(credit_cards.instances, 3);
        assert_eq!(credit_cards.exceptions, 2);
        assert_eq!(credit_cards.ninety_days_incomplete, 1);

        let consumer = &rows[3];
        assert_eq!(consumer.remediation_incomplete, 2);
        assert_eq!(consumer.technology_incomplete, 1);
    }

    #[test]
    fn test_summary_table_snapshot() {
        insta::assert_yaml_snapshot!(summary_table(&sample()), @r###"
        - portfolio: Overall
          instances: 10
          exceptions: 8
          remediation_incomplete: 6
          lob_incomplete: 3
          internal_incomplete: 1
          technology_incomplete: 1
          ninety_days_incomplete: 1
        - portfolio: Credit Cards
          instances: 3
          exceptions: 2
          remediation_incomplete: 2
          lob_incomplete: 1
          internal_incomplete: 1
          technology_incomplete: 0
          ninety_days_incomplete: 1
        - portfolio: TDAF
          instances: 2
          exceptions: 2
          remediation_incomplete: 1
          lob_incomplete: 1
          internal_incomplete: 0
          technology_incomplete: 0
          ninety_days_incomplete: 0
        - portfolio: Consumer
          instances: 3
          exceptions: 3
          remediation_incomplete: 2
          lob_incomplete: 0
          internal_incomplete: 0
          technology_incomplete: 1
          ninety_days_incomplete: 0
        "###);
    }
}
