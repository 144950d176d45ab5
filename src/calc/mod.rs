pub mod monthly;
pub mod plan;
pub mod target;
pub mod workday;

pub use plan::{YearPlan, calculate_year_plan};
pub use workday::is_workday;
