// fcra-core/src/domain/dates.rs

//! Date helpers for the `YYYY/M/D` strings carried by FCRA records.
//!
//! Source files write dates with unpadded month and day (`2025/5/31`). None
//! of these helpers fail: malformed input yields `None`.

use chrono::NaiveDate;

/// Splits `YYYY/M/D` into exactly three raw parts.
fn split_parts(s: &str) -> Option<[&str; 3]> {
    let mut parts = s.split('/');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some([year.trim(), month.trim(), day.trim()])
}

/// Parses `YYYY/M/D` into a calendar date.
///
/// Wrong part count, non-numeric parts, impossible dates (`2025/2/30`) and
/// years outside `1..=9999` return `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let [year, month, day] = split_parts(s)?;
    let year: i32 = year.parse().ok()?;
    if !(1..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Maps `YYYY/M/D` to its `YYYY-MM` trend bucket.
///
/// Only year and month must be numeric. Neither is checked against the
/// calendar (`2025/13/1` buckets to `2025-13`) and the day part is not read.
pub fn month_bucket(s: &str) -> Option<String> {
    let [year, month, _day] = split_parts(s)?;
    let year: i32 = year.parse().ok()?;
    let month: i32 = month.parse().ok()?;
    Some(format!("{:04}-{:02}", year, month))
}

/// `YYYY-MM-DD`, used for the as-of date.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY/MM/DD`, the stamp written into `action_date`.
pub fn format_action_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
