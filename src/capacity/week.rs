use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::domain::absence::DateRange;

/// ISO-8601 week label, rendered as `YYYY-Www`
///
/// Ordering follows `(week-year, week)` and agrees with the string form for
/// four-digit years, so the label can be used directly as a sort or group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId {
    year: i32,
    week: u32,
}

impl WeekId {
    /// Returns the ISO week-year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ISO week number (1-53)
    pub fn week(&self) -> u32 {
        self.week
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid week id: {}", s);

        let (year, week) = s.split_once("-W").ok_or_else(invalid)?;
        if year.len() != 4 || week.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let week: u32 = week.parse().map_err(|_| invalid())?;

        // Reject weeks the ISO calendar does not have for that year
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;

        Ok(Self { year, week })
    }
}

impl Serialize for WeekId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A Monday-to-Sunday calendar week
///
/// Both ends are always representable dates; weeks at the edge of the
/// calendar are never built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    start: NaiveDate,
    end: NaiveDate,
}

impl Week {
    /// Returns the ISO week containing `date`
    ///
    /// `None` when the Monday or Sunday of that week is outside the
    /// representable calendar.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use team_capacity::capacity::week::Week;
    ///
    /// let week = Week::containing(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
    ///
    /// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
    /// assert_eq!(week.id().to_string(), "2025-W01");
    /// ```
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
        date.checked_sub_days(back).and_then(Self::starting_on)
    }

    fn starting_on(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(6))?;
        Some(Self { start, end })
    }

    /// Returns the Monday opening the week
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the Sunday closing the week
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the ISO label of the week
    pub fn id(&self) -> WeekId {
        let iso = self.start.iso_week();
        WeekId {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Returns the week `weeks` weeks after this one
    pub fn plus_weeks(&self, weeks: u32) -> Option<Self> {
        self.start
            .checked_add_days(Days::new(u64::from(weeks) * 7))
            .and_then(Self::starting_on)
    }

    /// Returns the Monday-to-Sunday window as an inclusive range
    pub fn range(&self) -> DateRange {
        DateRange::from_persistence(self.start, self.end)
    }
}

/// Checks whether `date` falls Monday through Friday
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_containing_wednesday_starts_on_monday() {
        let week = Week::containing(date(2025, 3, 5)).unwrap();

        assert_eq!(week.start(), date(2025, 3, 3));
        assert_eq!(week.end(), date(2025, 3, 9));
    }

    #[test]
    fn week_containing_sunday_starts_previous_monday() {
        let week = Week::containing(date(2025, 3, 9)).unwrap();
        assert_eq!(week.start(), date(2025, 3, 3));
    }

    #[test]
    fn reference_2025_01_01_is_week_one() {
        let week = Week::containing(date(2025, 1, 1)).unwrap();
        assert_eq!(week.id().to_string(), "2025-W01");
    }

    #[test]
    fn week_spanning_new_year_belongs_to_old_year() {
        let week = Week::containing(date(2021, 1, 1)).unwrap();

        assert_eq!(week.start(), date(2020, 12, 28));
        assert_eq!(week.id().to_string(), "2020-W53");
    }

    #[test]
    fn week_id_pads_week_number() {
        let week = Week::containing(date(2025, 2, 12)).unwrap();
        assert_eq!(week.id().to_string(), "2025-W07");
    }

    #[test]
    fn plus_weeks_moves_by_seven_days() {
        let week = Week::containing(date(2025, 3, 5)).unwrap().plus_weeks(2).unwrap();
        assert_eq!(week.start(), date(2025, 3, 17));
    }

    #[test]
    fn week_past_end_of_calendar_is_none() {
        // NaiveDate::MAX falls on a Tuesday, so its Sunday does not exist
        assert_eq!(Week::containing(NaiveDate::MAX), None);

        let last = Week::containing(NaiveDate::MAX - Days::new(7)).unwrap();
        assert_eq!(last.plus_weeks(1), None);
    }

    #[test]
    fn weekday_detection() {
        assert!(is_weekday(date(2025, 3, 3)));
        assert!(is_weekday(date(2025, 3, 7)));
        assert!(!is_weekday(date(2025, 3, 8)));
        assert!(!is_weekday(date(2025, 3, 9)));
    }

    #[test]
    fn week_id_parse_and_order() {
        let a: WeekId = "2024-W52".parse().unwrap();
        let b: WeekId = "2025-W01".parse().unwrap();

        assert!(a < b);
        assert_eq!(b.year(), 2025);
        assert_eq!(b.week(), 1);
    }

    #[test]
    fn week_id_parse_rejects_bad_input() {
        assert!("2025-W7".parse::<WeekId>().is_err());
        assert!("2025W07".parse::<WeekId>().is_err());
        assert!("2025-W54".parse::<WeekId>().is_err());
        assert!("2025-W53".parse::<WeekId>().is_err());
        assert!("2020-W53".parse::<WeekId>().is_ok());
    }

    #[test]
    fn week_id_serializes_as_string() {
        let id: WeekId = "2025-W07".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"2025-W07\"");
    }
}
