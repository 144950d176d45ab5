use crate::error::PlannerError;
use chrono::NaiveDate;

/// An inclusive `[start, end]` span of calendar days with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PlannerError> {
        if end < start {
            return Err(PlannerError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Iterates every day from start to end.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_accepts_ordered_range() {
        let r = DateRange::new(d(2025, 2, 1), d(2025, 4, 30)).unwrap();
        assert_eq!(r.start(), d(2025, 2, 1));
        assert_eq!(r.end(), d(2025, 4, 30));
    }

    #[test]
    fn test_new_accepts_single_day() {
        let r = DateRange::new(d(2025, 3, 15), d(2025, 3, 15)).unwrap();
        assert_eq!(r.days().collect::<Vec<_>>(), vec![d(2025, 3, 15)]);
    }

    #[test]
    fn test_new_rejects_reversed_range() {
        let err = DateRange::new(d(2025, 6, 10), d(2025, 6, 9)).unwrap_err();
        assert_eq!(
            err,
            PlannerError::InvalidRange {
                start: d(2025, 6, 10),
                end: d(2025, 6, 9),
            }
        );
    }

    #[test]
    fn test_days_covers_whole_quarter() {
        let r = DateRange::new(d(2025, 2, 1), d(2025, 4, 30)).unwrap();
        let days: Vec<_> = r.days().collect();
        assert_eq!(days.len(), 89);
        assert_eq!(days.first(), Some(&d(2025, 2, 1)));
        assert_eq!(days.last(), Some(&d(2025, 4, 30)));
    }

    #[test]
    fn test_days_iterates_inclusive_across_month_end() {
        let r = DateRange::new(d(2025, 1, 30), d(2025, 2, 2)).unwrap();
        let days: Vec<_> = r.days().collect();
        assert_eq!(
            days,
            vec![d(2025, 1, 30), d(2025, 1, 31), d(2025, 2, 1), d(2025, 2, 2)]
        );
    }
}
