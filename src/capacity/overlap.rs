use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::week::{is_weekday, Week};
use crate::domain::absence::{Absence, DateRange};

/// Working days in a full week (Monday to Friday)
pub const WORK_DAYS_PER_WEEK: u32 = 5;

/// Counts the working days of `period` that fall inside `week`
///
/// The overlap is inclusive on both ends: an absence ending on a Friday
/// counts that Friday exactly once. Weekend days and dates in `holidays`
/// are skipped. `holidays` must cover every day of the week, including a
/// January 1 when the week crosses a year boundary.
pub fn working_days_absent(
    period: &DateRange,
    week: &Week,
    holidays: &BTreeSet<NaiveDate>,
) -> u32 {
    let Some(overlap) = period.intersection(&week.range()) else {
        return 0;
    };

    overlap
        .days()
        .filter(|day| is_weekday(*day) && !holidays.contains(day))
        .count() as u32
}

/// Sums one member's absent working days for `week`, capped at a full week
///
/// Overlapping absences of the same member are summed before the cap, so
/// duplicates never make a member more than fully absent.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use team_capacity::capacity::overlap::member_absent_days;
/// use team_capacity::capacity::week::Week;
/// use team_capacity::domain::absence::Absence;
/// use uuid::Uuid;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let member = Uuid::new_v4();
/// let absences = vec![
///     Absence::new(member, day(1), day(5)).unwrap(),
///     Absence::new(member, day(4), day(12)).unwrap(),
/// ];
///
/// let week = Week::containing(day(3)).unwrap();
/// assert_eq!(member_absent_days(&absences, &week, &BTreeSet::new()), 5);
/// ```
pub fn member_absent_days<'a, I>(absences: I, week: &Week, holidays: &BTreeSet<NaiveDate>) -> u32
where
    I: IntoIterator<Item = &'a Absence>,
{
    let total: u32 = absences
        .into_iter()
        .map(|absence| working_days_absent(&absence.period(), week, holidays))
        .sum();

    total.min(WORK_DAYS_PER_WEEK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(a: NaiveDate, b: NaiveDate) -> DateRange {
        DateRange::new(a, b).unwrap()
    }

    // 2025-03-03 (Mon) .. 2025-03-09 (Sun), no public holidays
    fn clean_week() -> Week {
        Week::containing(date(2025, 3, 3)).unwrap()
    }

    fn no_holidays() -> BTreeSet<NaiveDate> {
        BTreeSet::new()
    }

    #[test]
    fn full_working_week() {
        let period = range(date(2025, 3, 3), date(2025, 3, 7));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 5);
    }

    #[test]
    fn end_on_friday_counts_friday_once() {
        let period = range(date(2025, 3, 6), date(2025, 3, 7));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 2);
    }

    #[test]
    fn end_on_sunday_adds_nothing_past_friday() {
        let period = range(date(2025, 3, 7), date(2025, 3, 9));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 1);
    }

    #[test]
    fn single_day_absence_on_monday() {
        let day = date(2025, 3, 3);
        assert_eq!(
            working_days_absent(&range(day, day), &clean_week(), &no_holidays()),
            1
        );
    }

    #[test]
    fn single_day_absence_on_next_monday_is_outside() {
        let day = date(2025, 3, 10);
        assert_eq!(
            working_days_absent(&range(day, day), &clean_week(), &no_holidays()),
            0
        );
    }

    #[test]
    fn absence_ending_on_previous_sunday_is_outside() {
        let period = range(date(2025, 2, 24), date(2025, 3, 2));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 0);
    }

    #[test]
    fn weekend_only_absence_counts_zero() {
        let period = range(date(2025, 3, 8), date(2025, 3, 9));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 0);
    }

    #[test]
    fn absence_covering_several_weeks_is_clamped_to_window() {
        let period = range(date(2025, 2, 20), date(2025, 3, 20));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 5);
    }

    #[test]
    fn absence_starting_mid_week() {
        let period = range(date(2025, 3, 5), date(2025, 3, 14));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 3);
    }

    #[test]
    fn holiday_is_not_a_working_day() {
        let week = clean_week();
        let holidays: BTreeSet<_> = [date(2025, 3, 4)].into_iter().collect();
        let period = range(date(2025, 3, 3), date(2025, 3, 7));

        assert_eq!(working_days_absent(&period, &week, &holidays), 4);
    }

    #[test]
    fn new_year_holiday_excluded_across_year_boundary() {
        // 2020-W53 runs Mon 2020-12-28 to Sun 2021-01-03
        let week = Week::containing(date(2020, 12, 30)).unwrap();
        let holidays: BTreeSet<_> = [date(2021, 1, 1)].into_iter().collect();
        let period = range(date(2020, 12, 24), date(2021, 1, 10));

        assert_eq!(working_days_absent(&period, &week, &holidays), 4);
    }

    #[test]
    fn reversed_range_counts_zero() {
        let period = DateRange::from_persistence(date(2025, 3, 7), date(2025, 3, 3));
        assert_eq!(working_days_absent(&period, &clean_week(), &no_holidays()), 0);
    }

    #[test]
    fn member_days_are_summed() {
        let member = Uuid::new_v4();
        let absences = vec![
            Absence::new(member, date(2025, 3, 3), date(2025, 3, 3)).unwrap(),
            Absence::new(member, date(2025, 3, 6), date(2025, 3, 7)).unwrap(),
        ];

        assert_eq!(member_absent_days(&absences, &clean_week(), &no_holidays()), 3);
    }

    #[test]
    fn member_days_are_capped_at_five() {
        let member = Uuid::new_v4();
        let absences = vec![
            Absence::new(member, date(2025, 3, 3), date(2025, 3, 7)).unwrap(),
            Absence::new(member, date(2025, 3, 3), date(2025, 3, 7)).unwrap(),
        ];

        assert_eq!(member_absent_days(&absences, &clean_week(), &no_holidays()), 5);
    }

    #[test]
    fn member_without_absences() {
        let absences: Vec<Absence> = Vec::new();
        assert_eq!(member_absent_days(&absences, &clean_week(), &no_holidays()), 0);
    }
}
