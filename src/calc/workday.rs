use crate::data::DateRange;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Returns true for Monday–Friday, false for Saturday/Sunday.
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts Monday–Friday dates in [start, end] inclusive.
/// A reversed range is empty and counts 0.
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> i32 {
    match DateRange::new(start, end) {
        Ok(range) => range.days().filter(|d| is_workday(*d)).count() as i32,
        Err(_) => 0,
    }
}

/// `total` minus every excluded date that falls on a weekday.
/// Excluded weekend dates were never counted, so they are ignored.
pub fn subtract_weekday_exclusions(total: i32, exclusions: &BTreeSet<NaiveDate>) -> i32 {
    total - exclusions.iter().filter(|d| is_workday(**d)).count() as i32
}

/// Counts dates in [start, end] that are both a weekday and excluded.
pub fn count_weekday_exclusions_in_range(
    start: NaiveDate,
    end: NaiveDate,
    exclusions: &BTreeSet<NaiveDate>,
) -> i32 {
    if end < start {
        return 0;
    }
    exclusions
        .range(start..=end)
        .filter(|d| is_workday(**d))
        .count() as i32
}
