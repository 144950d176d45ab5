use crate::calc::is_workday;
use crate::data::{HolidayData, PLAN_YEAR};
use anyhow::Result;

pub fn run() -> Result<()> {
    write_holidays(&HolidayData::builtin(), &mut std::io::stdout())
}

pub(crate) fn write_holidays<W: std::io::Write>(data: &HolidayData, out: &mut W) -> Result<()> {
    writeln!(out, "Holidays {}", PLAN_YEAR)?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {:<5} {:<26} {}", "Date", "Day", "Name", "Working day")?;
    let mut removed = 0;
    for h in &data.holidays {
        let weekday = is_workday(h.date);
        if weekday {
            removed += 1;
        }
        writeln!(
            out,
            "  {:<14} {:<5} {:<26} {}",
            h.date.format("%Y-%m-%d"),
            h.date.format("%a"),
            h.name,
            if weekday { "Yes" } else { "No" }
        )?;
    }
    writeln!(out, "---")?;
    writeln!(
        out,
        "Total: {} holiday(s), {} on working days",
        data.holidays.len(),
        removed
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::holiday::Holiday;
    use chrono::NaiveDate;

    fn render(data: &HolidayData) -> String {
        let mut buf = Vec::new();
        write_holidays(data, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_holidays_empty() {
        let out = render(&HolidayData::default());
        assert!(out.contains("Total: 0 holiday(s), 0 on working days"));
    }

    #[test]
    fn test_write_holidays_builtin() {
        let out = render(&HolidayData::builtin());
        assert!(out.contains("Christmas Day"));
        assert!(out.contains("2025-12-25"));
        assert!(out.contains("Thu"));
        assert!(out.contains("Total: 11 holiday(s), 11 on working days"));
    }

    #[test]
    fn test_write_holidays_weekend_marked_no() {
        let mut data = HolidayData::default();
        // 2025-01-11 is a Saturday
        data.holidays.push(Holiday::new(
            "Weekend Fair",
            NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
        ));
        let out = render(&data);
        assert!(out.contains("Sat"));
        assert!(out.contains("No"));
        assert!(out.contains("Total: 1 holiday(s), 0 on working days"));
    }
}
