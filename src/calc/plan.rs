use crate::calc::monthly::{
    MonthAllocation, MonthAvailability, allocate_remaining, full_year_availability, month_buckets,
};
use crate::calc::target::{displayed_gap, gap, monthly_target, months_remaining, office_day_target};
use crate::calc::workday::{count_weekdays, subtract_weekday_exclusions};
use crate::data::{AppSettings, HolidayData, LeaveSet};
use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// Everything the planner reports for one evaluation. Derived fresh from the
/// inputs each time; nothing here is cached between evaluations.
#[derive(Debug, Clone, Serialize)]
pub struct YearPlan {
    pub year: i32,
    pub current_month: u32,
    pub target_percent: f64,
    pub days_present: u32,
    /// Monday to Friday days in the year.
    pub total_weekdays: i32,
    /// Weekdays that are not holidays (leave is not removed here).
    pub total_after_holidays: i32,
    /// Office days required for the target percentage.
    pub office_target: i32,
    /// Signed remaining office days.
    pub gap: i32,
    /// `gap` floored at zero.
    pub days_still_needed: i32,
    pub months_remaining: u32,
    /// Average office days per remaining month.
    pub monthly_target: i32,
    /// Working days left after holidays and leave, all twelve months.
    pub total_available: i32,
    pub monthly_availability: Vec<MonthAvailability>,
    /// Working days left after holidays and leave, current month onward.
    pub total_days_to_go: i32,
    pub remaining_months: Vec<MonthAllocation>,
    pub leave_dates: Vec<NaiveDate>,
}

/// Evaluates the full plan for `year`. `current_month` defaults to the
/// month of the local date.
pub fn calculate_year_plan(
    year: i32,
    settings: &AppSettings,
    holiday: &HolidayData,
    leave: &LeaveSet,
    current_month: Option<u32>,
) -> Result<YearPlan> {
    let current_month = current_month.unwrap_or_else(|| Local::now().date_naive().month());
    if !(1..=12).contains(&current_month) {
        bail!("current month must be between 1 and 12, got {}", current_month);
    }

    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .with_context(|| format!("year {} is out of range", year))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .with_context(|| format!("year {} is out of range", year))?;

    let holidays = holiday.date_set();
    let exclusions = leave.combined_with(&holidays);

    let total_weekdays = count_weekdays(start, end);
    let total_after_holidays = subtract_weekday_exclusions(total_weekdays, &holidays);
    let office_target = office_day_target(total_after_holidays, settings.target_fraction());
    let gap = gap(office_target, settings.days_present);
    let months_remaining = months_remaining(current_month);
    let monthly_target = monthly_target(gap, months_remaining);

    let buckets = month_buckets(year)?;
    let monthly_availability = full_year_availability(&buckets, &exclusions);
    let total_available: i32 = monthly_availability.iter().map(|m| m.available_days).sum();
    let remaining_months = allocate_remaining(&buckets, &exclusions, current_month, monthly_target);
    let total_days_to_go: i32 = remaining_months.iter().map(|m| m.available_days).sum();

    debug!(
        year,
        current_month,
        total_weekdays,
        total_after_holidays,
        office_target,
        gap,
        monthly_target,
        leave_days = leave.len(),
        "year plan evaluated"
    );

    Ok(YearPlan {
        year,
        current_month,
        target_percent: settings.target_percent,
        days_present: settings.days_present,
        total_weekdays,
        total_after_holidays,
        office_target,
        gap,
        days_still_needed: displayed_gap(gap),
        months_remaining,
        monthly_target,
        total_available,
        monthly_availability,
        total_days_to_go,
        remaining_months,
        leave_dates: leave.sorted_dates(),
    })
}
