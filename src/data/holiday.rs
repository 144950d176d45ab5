use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The only calendar year the planner covers.
pub const PLAN_YEAR: i32 = 2025;

/// Company holidays for `PLAN_YEAR` as (name, month, day).
const HOLIDAYS_2025: [(&str, u32, u32); 11] = [
    ("New Year's Day", 1, 1),
    ("Holi", 3, 14),
    ("Good Friday", 4, 18),
    ("Maharashtra Day", 5, 1),
    ("Independence Day", 8, 15),
    ("Ganesh Chaturthi", 8, 27),
    ("Gandhi Jayanti", 10, 2),
    ("Diwali (Laxmi Pujan)", 10, 21),
    ("Diwali (Balipratipada)", 10, 22),
    ("Bhai Dooj", 10, 23),
    ("Christmas Day", 12, 25),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate,
}

impl Holiday {
    pub fn new(name: &str, date: NaiveDate) -> Self {
        Holiday {
            name: name.to_string(),
            date,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct HolidayData {
    pub holidays: Vec<Holiday>,
}

impl HolidayData {
    /// The fixed holiday calendar for `PLAN_YEAR`.
    pub fn builtin() -> Self {
        let holidays = HOLIDAYS_2025
            .iter()
            .filter_map(|(name, month, day)| {
                NaiveDate::from_ymd_opt(PLAN_YEAR, *month, *day).map(|date| Holiday::new(name, date))
            })
            .collect();
        HolidayData { holidays }
    }

    pub fn date_set(&self) -> BTreeSet<NaiveDate> {
        self.holidays.iter().map(|h| h.date).collect()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::is_workday;

    #[test]
    fn test_builtin_has_eleven_holidays() {
        let data = HolidayData::builtin();
        assert_eq!(data.holidays.len(), 11);
        assert_eq!(data.date_set().len(), 11);
    }

    #[test]
    fn test_builtin_holidays_are_all_weekdays_in_plan_year() {
        for h in HolidayData::builtin().holidays {
            assert_eq!(chrono::Datelike::year(&h.date), PLAN_YEAR);
            assert!(is_workday(h.date), "{} falls on a weekend", h.date);
        }
    }

    #[test]
    fn test_get_finds_named_holiday() {
        let data = HolidayData::builtin();
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(data.get(christmas).unwrap().name, "Christmas Day");
        let plain = NaiveDate::from_ymd_opt(2025, 12, 26).unwrap();
        assert!(data.get(plain).is_none());
    }

    #[test]
    fn test_default_holiday_data_is_empty() {
        let data = HolidayData::default();
        assert!(data.holidays.is_empty());
        assert!(data.date_set().is_empty());
    }
}
