/// Products within this many days of a whole number are treated as whole
/// before rounding up, so 200 × 0.65 stays 130 instead of becoming 131.
const ROUNDING_SLACK: f64 = 1e-9;

/// Office days needed to reach `fraction` of the available working days,
/// rounded up.
pub fn office_day_target(total_after_removal: i32, fraction: f64) -> i32 {
    let raw = total_after_removal as f64 * fraction;
    (raw - ROUNDING_SLACK).ceil().max(0.0) as i32
}

/// Office days still missing. Negative once the target is exceeded,
/// saturating at `i32::MIN` for absurd `days_present` values.
pub fn gap(target: i32, days_present: u32) -> i32 {
    let gap = i64::from(target) - i64::from(days_present);
    gap.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// The gap as reported to the user: a met goal shows 0, never a negative.
pub fn displayed_gap(gap: i32) -> i32 {
    gap.max(0)
}

/// Months left after `current_month` (1–12). The current month itself is
/// not counted.
pub fn months_remaining(current_month: u32) -> u32 {
    12u32.saturating_sub(current_month)
}

/// Office days per remaining month, rounded up. With no months remaining the
/// whole gap is returned unchanged.
pub fn monthly_target(gap: i32, months_remaining: u32) -> i32 {
    if months_remaining == 0 {
        return gap;
    }
    (gap as f64 / months_remaining as f64).ceil() as i32
}
