use crate::calc::{YearPlan, calculate_year_plan};
use crate::data::{AppSettings, HolidayData, LeaveSet, PLAN_YEAR};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

/// Command line overrides for a one-shot evaluation.
#[derive(Debug, Default)]
pub struct PlanOptions {
    pub percent: Option<f64>,
    pub present: Option<u32>,
    pub leave: Vec<NaiveDate>,
    /// Flat list of (start, end) pairs.
    pub ranges: Vec<NaiveDate>,
    pub month: Option<u32>,
    pub json: bool,
}

pub fn run(opts: &PlanOptions) -> Result<()> {
    let settings = AppSettings::load()?;
    let plan = evaluate(settings, opts)?;
    let mut out = std::io::stdout();
    if opts.json {
        write_json(&plan, &mut out)
    } else {
        write_plan(&plan, &mut out)
    }
}

/// Applies the overrides and leave to `settings` and evaluates the year.
pub(crate) fn evaluate(mut settings: AppSettings, opts: &PlanOptions) -> Result<YearPlan> {
    if let Some(p) = opts.percent {
        settings.target_percent = p;
    }
    if let Some(n) = opts.present {
        settings.days_present = n;
    }
    settings.validate()?;

    let mut leave = LeaveSet::new();
    for date in &opts.leave {
        leave.add_date(*date);
    }
    for pair in opts.ranges.chunks(2) {
        if let [start, end] = pair {
            leave
                .add_range(*start, *end)
                .with_context(|| format!("invalid --range {} {}", start, end))?;
        }
    }
    info!(leave_days = leave.len(), "leave collected");

    calculate_year_plan(
        PLAN_YEAR,
        &settings,
        &HolidayData::builtin(),
        &leave,
        opts.month,
    )
}

pub(crate) fn write_json<W: std::io::Write>(plan: &YearPlan, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, plan).context("failed to serialize plan")?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_plan<W: std::io::Write>(plan: &YearPlan, out: &mut W) -> Result<()> {
    writeln!(out, "Work From Office Plan {}", plan.year)?;
    writeln!(out, "---")?;
    writeln!(out, "{:<34} {}", "Total weekdays:", plan.total_weekdays)?;
    writeln!(out, "{:<34} {}", "Total weekdays (no holidays):", plan.total_after_holidays)?;
    writeln!(
        out,
        "{:<34} {}",
        format!("Office target ({}%):", plan.target_percent),
        plan.office_target
    )?;
    writeln!(out, "{:<34} {}", "Office days already present:", plan.days_present)?;
    writeln!(out, "{:<34} {}", "Days still needed:", plan.days_still_needed)?;
    writeln!(out, "{:<34} {}", "Average days/month to reach goal:", plan.monthly_target)?;
    writeln!(out, "---")?;

    writeln!(out, "Working days available (after holidays + leave)")?;
    for m in &plan.monthly_availability {
        writeln!(out, "  {:<12} {}", m.name, m.available_days)?;
    }
    writeln!(
        out,
        "{:<34} {}",
        format!("Total available in {}:", plan.year),
        plan.total_available
    )?;
    writeln!(out, "---")?;

    writeln!(out, "Remaining months")?;
    writeln!(
        out,
        "  {:<12} {:>9} {:>8} {:>15}",
        "Month", "Available", "Must do", "Work from home"
    )?;
    for m in &plan.remaining_months {
        writeln!(
            out,
            "  {:<12} {:>9} {:>8} {:>15}",
            m.name, m.available_days, m.must_do, m.work_from_home
        )?;
    }
    writeln!(out, "{:<34} {}", "Working days to go:", plan.total_days_to_go)?;
    writeln!(out, "---")?;

    writeln!(out, "Leave dates")?;
    if plan.leave_dates.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for date in &plan.leave_dates {
        writeln!(out, "  {}", date.format("%Y-%m-%d"))?;
    }
    writeln!(out, "Total: {} leave day(s)", plan.leave_dates.len())?;
    Ok(())
}
