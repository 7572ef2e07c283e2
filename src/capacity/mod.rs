// Capacity engine modules
//
// Pure week-by-week computation of the share of team capacity lost to
// absences and public holidays, plus the async service that feeds it from
// a roster store.

pub mod calculator;
pub mod errors;
pub mod holidays;
pub mod overlap;
pub mod report;
pub mod service;
pub mod week;

/// Weeks reported when no horizon is configured (about six months)
pub const DEFAULT_HORIZON_WEEKS: u32 = 26;

/// Longest horizon accepted, in weeks
pub const MAX_HORIZON_WEEKS: u32 = 520;

/// Default alert threshold, in percent
pub const DEFAULT_ALERT_THRESHOLD: u32 = 50;

// Re-export main types
pub use calculator::{calculate_weekly_capacity, CapacityCalculator, CapacityOptions};
pub use errors::{CapacityError, CapacityResult};
pub use holidays::HolidayCalendar;
pub use report::{group_by_week, CapacityLevel, CapacityReportEntry};
pub use service::CapacityService;
pub use week::{Week, WeekId};
