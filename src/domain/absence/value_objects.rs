use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive calendar date range
///
/// # Invariants
/// - `start <= end` when built with [`DateRange::new`]
///
/// Ranges reconstructed from storage skip the check; a reversed range is
/// treated as empty everywhere it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a validated range
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use team_capacity::domain::absence::DateRange;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    ///
    /// assert!(DateRange::new(start, end).is_ok());
    /// assert!(DateRange::new(end, start).is_err());
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if start > end {
            return Err(format!(
                "Start date {} is after end date {}",
                start, end
            ));
        }

        Ok(Self { start, end })
    }

    /// Builds a range without checking the order of its bounds
    pub fn from_persistence(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks whether the range covers no day at all
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns the overlap of two ranges, both ends inclusive
    ///
    /// `None` when either range is empty or they do not touch.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if self.is_empty() || other.is_empty() || start > end {
            None
        } else {
            Some(DateRange { start, end })
        }
    }

    /// Iterates over every day of the range, both ends included
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = if self.is_empty() { None } else { Some(self.start) };

        std::iter::successors(first, move |day| day.succ_opt().filter(|next| *next <= end))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
