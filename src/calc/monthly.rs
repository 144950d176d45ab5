use crate::calc::workday::{count_weekday_exclusions_in_range, count_weekdays};
use anyhow::{Result, anyhow};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// One calendar month of the plan year as an inclusive date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: u32,
    pub name: &'static str,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthBucket {
    /// Weekdays in the month.
    pub fn weekdays(&self) -> i32 {
        count_weekdays(self.start, self.end)
    }

    /// Weekdays in the month that are not in `exclusions`.
    pub fn available_days(&self, exclusions: &BTreeSet<NaiveDate>) -> i32 {
        self.weekdays() - count_weekday_exclusions_in_range(self.start, self.end, exclusions)
    }
}

/// Available working days in one month of the full-year table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthAvailability {
    pub month: u32,
    pub name: &'static str,
    pub available_days: i32,
}

/// Office-day allocation for one of the months still ahead.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthAllocation {
    pub month: u32,
    pub name: &'static str,
    pub available_days: i32,
    /// Office days to plan for this month, floored at zero.
    pub must_do: i32,
    /// Days left for home working. Negative when the month cannot fit the
    /// office target.
    pub work_from_home: i32,
}

/// The bucket for `month` of `year`. The last day is the first day of the
/// following month minus one, so December rolls into the next January.
pub fn month_bucket(year: i32, month: u32) -> Option<MonthBucket> {
    let name = month_name(month)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let end = next.checked_sub_days(Days::new(1))?;
    Some(MonthBucket {
        month,
        name,
        start,
        end,
    })
}

/// All twelve buckets of `year`, January first.
pub fn month_buckets(year: i32) -> Result<Vec<MonthBucket>> {
    (1..=12)
        .map(|m| {
            month_bucket(year, m).ok_or_else(|| anyhow!("month {m} of year {year} is out of range"))
        })
        .collect()
}

/// Availability for every month, past months included.
pub fn full_year_availability(
    buckets: &[MonthBucket],
    exclusions: &BTreeSet<NaiveDate>,
) -> Vec<MonthAvailability> {
    buckets
        .iter()
        .map(|b| MonthAvailability {
            month: b.month,
            name: b.name,
            available_days: b.available_days(exclusions),
        })
        .collect()
}

/// Allocation for `current_month` through December. `monthly_target` is the
/// per-month share of the gap and may be negative.
pub fn allocate_remaining(
    buckets: &[MonthBucket],
    exclusions: &BTreeSet<NaiveDate>,
    current_month: u32,
    monthly_target: i32,
) -> Vec<MonthAllocation> {
    buckets
        .iter()
        .filter(|b| b.month >= current_month)
        .map(|b| {
            let available_days = b.available_days(exclusions);
            MonthAllocation {
                month: b.month,
                name: b.name,
                available_days,
                must_do: monthly_target.max(0),
                work_from_home: available_days.saturating_sub(monthly_target),
            }
        })
        .collect()
}

/// English name of `month`, `None` outside 1-12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => return None,
    };
    Some(name)
}
