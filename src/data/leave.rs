use crate::data::date_range::DateRange;
use crate::error::PlannerError;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

/// Personal leave days declared during one planning session.
///
/// Leave only grows: dates are added one at a time or as an inclusive
/// range that is expanded immediately. Nothing is ever removed and the set
/// is not persisted.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct LeaveSet {
    dates: BTreeSet<NaiveDate>,
}

impl LeaveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one leave day. Returns false when it was already present.
    pub fn add_date(&mut self, date: NaiveDate) -> bool {
        let inserted = self.dates.insert(date);
        debug!(%date, inserted, "leave date added");
        inserted
    }

    /// Validates `[start, end]` and adds every day in it.
    ///
    /// On `InvalidRange` the set is left untouched. Returns the number of
    /// days that were not already present.
    pub fn add_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<usize, PlannerError> {
        let range = match DateRange::new(start, end) {
            Ok(r) => r,
            Err(e) => {
                debug!(%start, %end, "leave range rejected");
                return Err(e);
            }
        };
        Ok(self.extend(&range))
    }

    /// Adds every day of an already validated range.
    pub fn extend(&mut self, range: &DateRange) -> usize {
        let before = self.dates.len();
        self.dates.extend(range.days());
        let added = self.dates.len() - before;
        debug!(start = %range.start(), end = %range.end(), added, "leave range added");
        added
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// All leave dates in ascending order.
    pub fn sorted_dates(&self) -> Vec<NaiveDate> {
        self.dates.iter().copied().collect()
    }

    /// Holidays plus leave: every date that is not available for office work.
    pub fn combined_with(&self, holidays: &BTreeSet<NaiveDate>) -> BTreeSet<NaiveDate> {
        holidays.union(&self.dates).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_leave_set_is_empty() {
        let leave = LeaveSet::new();
        assert!(leave.is_empty());
        assert!(leave.sorted_dates().is_empty());
    }

    #[test]
    fn test_add_same_date_twice_is_idempotent() {
        let mut leave = LeaveSet::new();
        assert!(leave.add_date(d(2025, 5, 12)));
        assert!(!leave.add_date(d(2025, 5, 12)));
        assert_eq!(leave.len(), 1);
    }

    #[test]
    fn test_add_range_expands_every_day() {
        let mut leave = LeaveSet::new();
        // Friday through Monday, weekend days are stored as well
        let added = leave.add_range(d(2025, 6, 6), d(2025, 6, 9)).unwrap();
        assert_eq!(added, 4);
        let dates = leave.sorted_dates();
        assert!(dates.contains(&d(2025, 6, 7)));
        assert!(dates.contains(&d(2025, 6, 8)));
    }

    #[test]
    fn test_add_range_single_day() {
        let mut leave = LeaveSet::new();
        assert_eq!(leave.add_range(d(2025, 3, 3), d(2025, 3, 3)).unwrap(), 1);
        assert_eq!(leave.sorted_dates(), vec![d(2025, 3, 3)]);
    }

    #[test]
    fn test_add_reversed_range_is_rejected_without_change() {
        let mut leave = LeaveSet::new();
        leave.add_date(d(2025, 2, 3));
        let before = leave.clone();
        let err = leave.add_range(d(2025, 6, 9), d(2025, 6, 6)).unwrap_err();
        assert_eq!(
            err,
            PlannerError::InvalidRange {
                start: d(2025, 6, 9),
                end: d(2025, 6, 6),
            }
        );
        assert_eq!(leave, before);
    }

    #[test]
    fn test_overlapping_ranges_collapse() {
        let mut leave = LeaveSet::new();
        leave.add_range(d(2025, 7, 1), d(2025, 7, 5)).unwrap();
        let added = leave.add_range(d(2025, 7, 4), d(2025, 7, 8)).unwrap();
        assert_eq!(added, 3);
        assert_eq!(leave.len(), 8);
    }

    #[test]
    fn test_sorted_dates_ascending_regardless_of_insert_order() {
        let mut leave = LeaveSet::new();
        leave.add_date(d(2025, 11, 3));
        leave.add_date(d(2025, 1, 15));
        leave.add_date(d(2025, 7, 4));
        assert_eq!(
            leave.sorted_dates(),
            vec![d(2025, 1, 15), d(2025, 7, 4), d(2025, 11, 3)]
        );
    }

    #[test]
    fn test_combined_with_unions_holidays() {
        let mut leave = LeaveSet::new();
        leave.add_date(d(2025, 12, 25));
        leave.add_date(d(2025, 12, 26));
        let holidays: BTreeSet<_> = [d(2025, 1, 1), d(2025, 12, 25)].into_iter().collect();
        let combined = leave.combined_with(&holidays);
        assert_eq!(combined.len(), 3);
        assert!(combined.contains(&d(2025, 1, 1)));
        assert!(combined.contains(&d(2025, 12, 26)));
    }
}
