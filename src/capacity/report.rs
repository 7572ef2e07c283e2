use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::week::WeekId;

/// Percentage above which the band turns from low to medium
pub const MEDIUM_LEVEL_PERCENT: u32 = 25;

/// Rounds a percentage to one decimal place, half away from zero
///
/// `12.25` becomes `12.3` and `12.24` becomes `12.2`, independently of any
/// binary floating point representation.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use team_capacity::capacity::report::round_half_up;
///
/// assert_eq!(round_half_up(Decimal::new(1225, 2)), Decimal::new(123, 1));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `absent / available * 100`, rounded half-up to one decimal
///
/// Zero available days yields zero.
pub fn absence_percentage(absent_days: u32, available_days: u32) -> Decimal {
    if available_days == 0 {
        return Decimal::ZERO;
    }

    let ratio = Decimal::from(absent_days) * Decimal::ONE_HUNDRED / Decimal::from(available_days);
    round_half_up(ratio)
}

/// Severity band of a weekly absence percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityLevel {
    /// Team has no members, so no capacity signal exists
    Unknown,
    /// Up to 25% of capacity lost
    Low,
    /// More than 25% lost, not yet alerting
    Medium,
    /// Alert threshold exceeded
    High,
}

impl CapacityLevel {
    /// Classifies an entry from its member count, percentage and alert flag
    pub fn classify(member_count: usize, percentage: Decimal, alert: bool) -> Self {
        if member_count == 0 {
            CapacityLevel::Unknown
        } else if alert {
            CapacityLevel::High
        } else if percentage > Decimal::from(MEDIUM_LEVEL_PERCENT) {
            CapacityLevel::Medium
        } else {
            CapacityLevel::Low
        }
    }
}

/// One (team, week) cell of the capacity report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityReportEntry {
    pub team_name: String,
    pub week_id: WeekId,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage_absence: Decimal,
    pub alert: bool,
    pub level: CapacityLevel,
    pub member_count: usize,
    /// Holidays of the week, weekend ones included
    pub holidays: Vec<NaiveDate>,
}

/// Groups report entries by week, keeping their original order within a week
pub fn group_by_week(entries: &[CapacityReportEntry]) -> BTreeMap<WeekId, Vec<&CapacityReportEntry>> {
    let mut grouped: BTreeMap<WeekId, Vec<&CapacityReportEntry>> = BTreeMap::new();
    for entry in entries {
        grouped.entry(entry.week_id).or_default().push(entry);
    }
    grouped
}
