use chrono::NaiveDate;
use thiserror::Error;

/// Domain errors raised by the planner core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// A date range whose end precedes its start.
    #[error("range end {end} is before range start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
