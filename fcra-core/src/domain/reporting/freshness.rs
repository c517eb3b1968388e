// fcra-core/src/domain/reporting/freshness.rs

use chrono::NaiveDate;

use crate::domain::dates::{format_iso, parse_date};
use crate::domain::record::Record;

/// Latest date among the values that parse. Empty and malformed values are
/// ignored.
pub fn latest_date<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<NaiveDate> {
    values
        .into_iter()
        .filter(|value| !value.is_empty())
        .filter_map(parse_date)
        .max()
}

/// Data freshness: the latest `process_date` as `YYYY-MM-DD`, or an empty
/// string when no record carries a parseable one.
pub fn as_of_date(records: &[Record]) -> String {
    latest_date(records.iter().map(|r| r.process_date.as_str()))
        .map(format_iso)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::model::fixtures::record;

    #[test]
    fn test_latest_date_skips_garbage() {
        let latest = latest_date(["2025/10/15", "2025/9/1", "bad", ""]);
        assert_eq!(latest, NaiveDate::from_ymd_opt(2025, 10, 15));
    }

    #[test]
    fn test_latest_date_ignores_five_digit_year_typo() {
        let latest = latest_date(["2025/10/15", "20251/10/15"]);
        assert_eq!(latest.map(format_iso).as_deref(), Some("2025-10-15"));
    }

    #[test]
    fn test_as_of_date_formats_iso() {
        let dates = ["2025/9/1", "2025/10/15", "2025/10/05", "2025/2/30", ""];
        let records: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, date)| {
                let mut rec = record(i as i64 + 1, "TDAF", "Incomplete", "");
                rec.process_date = date.to_string();
                rec
            })
            .collect();
        assert_eq!(as_of_date(&records), "2025-10-15");
    }

    #[test]
    fn test_as_of_date_is_empty_without_parseable_dates() {
        assert_eq!(as_of_date(&[]), "");

        let mut rec = record(1, "TDAF", "Incomplete", "");
        rec.process_date = "15/10/2025x".to_string();
        assert_eq!(as_of_date(&[rec]), "");
    }
}
