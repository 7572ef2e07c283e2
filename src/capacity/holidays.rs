use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use super::errors::{CapacityError, CapacityResult};

/// Fixed public holidays of the default (Belgian) calendar as `(month, day)`
pub const DEFAULT_FIXED_HOLIDAYS: [(u32, u32); 7] = [
    (1, 1),   // New Year's Day
    (5, 1),   // Labour Day
    (7, 21),  // National Day
    (8, 15),  // Assumption
    (11, 1),  // All Saints' Day
    (11, 11), // Armistice Day
    (12, 25), // Christmas
];

/// Moveable holidays of the default calendar, as day offsets from Easter Sunday
///
/// Easter Sunday, Easter Monday, Ascension, Whit Sunday, Whit Monday.
pub const DEFAULT_EASTER_OFFSETS: [i64; 5] = [0, 1, 39, 49, 50];

/// Regional public holiday calendar
///
/// A calendar is a set of fixed `(month, day)` dates plus a set of day
/// offsets relative to Easter Sunday. It is pure data: computing the
/// holidays of a year never touches any shared state, so callers are free
/// to cache the result per year.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use team_capacity::capacity::holidays::HolidayCalendar;
///
/// let calendar = HolidayCalendar::default();
/// let holidays = calendar.holidays_for_year(2025);
///
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2025, 4, 21).unwrap()));
/// assert_eq!(holidays.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    fixed: Vec<(u32, u32)>,
    easter_offsets: Vec<i64>,
}

impl HolidayCalendar {
    /// Creates a calendar from fixed dates and Easter offsets
    ///
    /// # Returns
    /// * `Err(CapacityError::InvalidConfig)` - If a fixed date does not exist
    ///   in any year, or an offset moves more than a year away from Easter
    pub fn new(fixed: Vec<(u32, u32)>, easter_offsets: Vec<i64>) -> CapacityResult<Self> {
        // 2000 is a leap year, so Feb 29 is accepted here and skipped in other years
        for &(month, day) in &fixed {
            if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                return Err(CapacityError::InvalidConfig(format!(
                    "Invalid fixed holiday: {:02}-{:02}",
                    month, day
                )));
            }
        }

        if let Some(offset) = easter_offsets.iter().find(|o| o.abs() > 365) {
            return Err(CapacityError::InvalidConfig(format!(
                "Easter offset out of range: {}",
                offset
            )));
        }

        Ok(Self {
            fixed,
            easter_offsets,
        })
    }

    /// Returns the fixed `(month, day)` holidays
    pub fn fixed(&self) -> &[(u32, u32)] {
        &self.fixed
    }

    /// Returns the Easter-relative day offsets
    pub fn easter_offsets(&self) -> &[i64] {
        &self.easter_offsets
    }

    /// Returns every holiday of `year`, fixed and moveable
    ///
    /// Moveable holidays are those computed from Easter Sunday; an offset
    /// that lands in a neighbouring year is still reported, since it is a
    /// holiday derived from this year's Easter.
    pub fn holidays_for_year(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut holidays: BTreeSet<NaiveDate> = self
            .fixed
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect();

        if let Some(easter) = easter_sunday(year) {
            holidays.extend(
                self.easter_offsets
                    .iter()
                    .filter_map(|&offset| shift_days(easter, offset)),
            );
        }

        holidays
    }

    /// Returns the holidays falling inside `[start, end]`, both inclusive
    ///
    /// Every calendar year touched by the range is consulted, so a range
    /// crossing Dec 31 sees the holidays of both years. The neighbouring
    /// years are consulted too, since an Easter offset can move a holiday
    /// up to a year away from its Easter.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
        use chrono::Datelike;

        if start > end {
            return BTreeSet::new();
        }

        (start.year().saturating_sub(1)..=end.year().saturating_add(1))
            .flat_map(|year| self.holidays_for_year(year))
            .filter(|day| *day >= start && *day <= end)
            .collect()
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self {
            fixed: DEFAULT_FIXED_HOLIDAYS.to_vec(),
            easter_offsets: DEFAULT_EASTER_OFFSETS.to_vec(),
        }
    }
}

/// Returns the holidays of `year` in the default calendar
pub fn holidays_for_year(year: i32) -> BTreeSet<NaiveDate> {
    HolidayCalendar::default().holidays_for_year(year)
}

/// Computes Easter Sunday for a Gregorian year
///
/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher). Returns `None` for
/// years before the Gregorian reform or outside chrono's range.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn shift_days(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}
