pub mod app_settings;
pub mod date_range;
pub mod holiday;
pub mod leave;
pub mod persistence;

pub use app_settings::AppSettings;
pub use date_range::DateRange;
pub use holiday::{HolidayData, PLAN_YEAR};
pub use leave::LeaveSet;
