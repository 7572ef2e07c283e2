use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::DateRange;

/// Absence entity
///
/// A member's leave over an inclusive date range.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use team_capacity::domain::absence::Absence;
/// use uuid::Uuid;
///
/// let absence = Absence::new(
///     Uuid::new_v4(),
///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
/// ).expect("valid absence");
///
/// assert_eq!(absence.period().days().count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Absence {
    id: Uuid,
    member_id: Uuid,
    period: DateRange,
}

impl Absence {
    /// Creates a new Absence for `member_id`
    ///
    /// # Returns
    /// * `Err(String)` - If `start` is after `end`
    pub fn new(member_id: Uuid, start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        let period = DateRange::new(start, end)?;

        Ok(Self {
            id: Uuid::new_v4(),
            member_id,
            period,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the ID of the absent member
    pub fn member_id(&self) -> Uuid {
        self.member_id
    }

    pub fn period(&self) -> DateRange {
        self.period
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    /// Replaces the absence period
    pub fn reschedule(&mut self, period: DateRange) {
        self.period = period;
    }

    /// Reconstructs an Absence from stored data
    ///
    /// # Note
    /// The range order is not checked; a reversed range counts as no absence.
    pub fn from_persistence(id: Uuid, member_id: Uuid, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id,
            member_id,
            period: DateRange::from_persistence(start, end),
        }
    }
}

/// Absence joined with its member and team, as served by the roster store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbsenceWithDetails {
    pub id: Uuid,
    pub member_id: Uuid,
    pub member_name: String,
    pub team_id: Uuid,
    pub team_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AbsenceWithDetails {
    /// Returns the bare absence, dropping the joined names
    pub fn to_absence(&self) -> Absence {
        Absence::from_persistence(self.id, self.member_id, self.start_date, self.end_date)
    }
}
