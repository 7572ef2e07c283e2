use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace};
use uuid::Uuid;

use super::errors::{CapacityError, CapacityResult};
use super::holidays::HolidayCalendar;
use super::overlap::{member_absent_days, WORK_DAYS_PER_WEEK};
use super::report::{absence_percentage, CapacityLevel, CapacityReportEntry};
use super::week::{is_weekday, Week};
use super::{DEFAULT_ALERT_THRESHOLD, DEFAULT_HORIZON_WEEKS, MAX_HORIZON_WEEKS};
use crate::domain::absence::Absence;
use crate::domain::member::Member;
use crate::domain::team::Team;

/// Engine-facing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityOptions {
    /// Number of weeks in the report, starting with the reference week
    pub horizon_weeks: u32,
    /// Alert when a rounded percentage is strictly above this value
    pub alert_threshold: Decimal,
    /// Public holidays applied to every team
    pub calendar: HolidayCalendar,
}

impl Default for CapacityOptions {
    fn default() -> Self {
        Self {
            horizon_weeks: DEFAULT_HORIZON_WEEKS,
            alert_threshold: Decimal::from(DEFAULT_ALERT_THRESHOLD),
            calendar: HolidayCalendar::default(),
        }
    }
}

/// Weekly capacity engine
///
/// Pure and stateless: every call works only on the slices it is given,
/// so one calculator can be shared freely between callers.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use team_capacity::capacity::CapacityCalculator;
/// use team_capacity::domain::{absence::Absence, member::Member, team::Team};
///
/// let team = Team::new("Alpha").unwrap();
/// let member = Member::new(team.id(), "Alice").unwrap();
/// let absence = Absence::new(
///     member.id(),
///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
/// ).unwrap();
///
/// let report = CapacityCalculator::default()
///     .calculate(&[team], &[member], &[absence], NaiveDate::from_ymd_opt(2025, 3, 5).unwrap())
///     .unwrap();
///
/// assert_eq!(report.len(), 26);
/// assert_eq!(report[0].week_id.to_string(), "2025-W10");
/// assert!(report[0].alert);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapacityCalculator {
    options: CapacityOptions,
}

impl CapacityCalculator {
    /// Creates a calculator with the given options
    pub fn new(options: CapacityOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use
    pub fn options(&self) -> &CapacityOptions {
        &self.options
    }

    /// Builds the week-by-week, team-by-team report
    ///
    /// Entries come out week-major, then in the order of `teams`. Members
    /// whose team is not in `teams`, and absences of unknown members, are
    /// ignored.
    ///
    /// # Returns
    /// * `Err(CapacityError::InvalidHorizon)` - If the horizon exceeds the maximum
    /// * `Err(CapacityError::DateOutOfRange)` - If a week falls outside the calendar
    pub fn calculate(
        &self,
        teams: &[Team],
        members: &[Member],
        absences: &[Absence],
        reference_date: NaiveDate,
    ) -> CapacityResult<Vec<CapacityReportEntry>> {
        let horizon = self.options.horizon_weeks;
        if horizon > MAX_HORIZON_WEEKS {
            return Err(CapacityError::InvalidHorizon(horizon));
        }

        debug!(
            %reference_date,
            horizon,
            teams = teams.len(),
            members = members.len(),
            absences = absences.len(),
            "Calculating weekly capacity"
        );

        let mut members_by_team: HashMap<Uuid, Vec<&Member>> = HashMap::new();
        for member in members {
            members_by_team.entry(member.team_id()).or_default().push(member);
        }

        let mut absences_by_member: HashMap<Uuid, Vec<&Absence>> = HashMap::new();
        for absence in absences {
            absences_by_member
                .entry(absence.member_id())
                .or_default()
                .push(absence);
        }

        let first_week = Week::containing(reference_date).ok_or(CapacityError::DateOutOfRange {
            reference: reference_date,
            weeks: 0,
        })?;
        let mut report = Vec::with_capacity(horizon as usize * teams.len());

        for offset in 0..horizon {
            let week = first_week
                .plus_weeks(offset)
                .ok_or(CapacityError::DateOutOfRange {
                    reference: reference_date,
                    weeks: offset,
                })?;
            let week_id = week.id();
            let week_holidays = self.options.calendar.holidays_between(week.start(), week.end());
            let weekday_holidays = week_holidays.iter().filter(|day| is_weekday(**day)).count() as u32;
            let holiday_list: Vec<NaiveDate> = week_holidays.iter().copied().collect();

            for team in teams {
                let team_members = members_by_team
                    .get(&team.id())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let member_count = team_members.len();

                if member_count == 0 {
                    report.push(CapacityReportEntry {
                        team_name: team.name().to_string(),
                        week_id,
                        percentage_absence: Decimal::ZERO,
                        alert: false,
                        level: CapacityLevel::Unknown,
                        member_count,
                        holidays: holiday_list.clone(),
                    });
                    continue;
                }

                let personal_days: u32 = team_members
                    .iter()
                    .map(|member| {
                        let own = absences_by_member
                            .get(&member.id())
                            .map(Vec::as_slice)
                            .unwrap_or_default();
                        member_absent_days(own.iter().copied(), &week, &week_holidays)
                    })
                    .sum();

                let member_count_u32 = member_count as u32;
                let total_absent = personal_days + weekday_holidays * member_count_u32;
                let total_available = member_count_u32 * WORK_DAYS_PER_WEEK;

                let percentage_absence = absence_percentage(total_absent, total_available);
                let alert = percentage_absence > self.options.alert_threshold;

                trace!(
                    team = team.name(),
                    week = %week_id,
                    total_absent,
                    total_available,
                    %percentage_absence,
                    alert,
                    "Week capacity computed"
                );

                report.push(CapacityReportEntry {
                    team_name: team.name().to_string(),
                    week_id,
                    percentage_absence,
                    alert,
                    level: CapacityLevel::classify(member_count, percentage_absence, alert),
                    member_count,
                    holidays: holiday_list.clone(),
                });
            }
        }

        Ok(report)
    }
}

/// Builds a capacity report with the given horizon and default settings
///
/// Shorthand for [`CapacityCalculator::calculate`] with the default
/// holiday calendar and a 50% alert threshold.
pub fn calculate_weekly_capacity(
    teams: &[Team],
    members: &[Member],
    absences: &[Absence],
    reference_date: NaiveDate,
    horizon_weeks: u32,
) -> CapacityResult<Vec<CapacityReportEntry>> {
    let options = CapacityOptions {
        horizon_weeks,
        ..CapacityOptions::default()
    };
    CapacityCalculator::new(options).calculate(teams, members, absences, reference_date)
}
