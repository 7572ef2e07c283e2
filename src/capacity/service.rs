use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::calculator::CapacityCalculator;
use super::errors::{CapacityError, CapacityResult};
use super::report::CapacityReportEntry;
use crate::domain::absence::Absence;
use crate::domain::repositories::{
    AbsenceRepository, MemberRepository, RosterRepository, TeamRepository,
};

/// Reads a roster snapshot from a store and runs the capacity engine on it
///
/// The store is only read; the engine itself never sees it.
pub struct CapacityService<R: RosterRepository> {
    repository: Arc<R>,
    calculator: CapacityCalculator,
}

impl<R: RosterRepository> CapacityService<R> {
    /// Creates a new CapacityService
    ///
    /// # Arguments
    /// * `repository` - Roster store supplying teams, members and absences
    /// * `calculator` - Configured capacity engine
    pub fn new(repository: Arc<R>, calculator: CapacityCalculator) -> Self {
        Self {
            repository,
            calculator,
        }
    }

    /// Weekly capacity report starting at the week of `reference_date`
    #[tracing::instrument(skip(self))]
    pub async fn weekly_capacity(
        &self,
        reference_date: NaiveDate,
    ) -> CapacityResult<Vec<CapacityReportEntry>> {
        let teams = self
            .repository
            .list_teams()
            .await
            .map_err(CapacityError::Repository)?;

        let mut members = Vec::new();
        for team in &teams {
            let team_members = self
                .repository
                .list_members(team.id())
                .await
                .map_err(CapacityError::Repository)?;
            members.extend(team_members);
        }

        let absences: Vec<Absence> = self
            .repository
            .list_absences_with_details()
            .await
            .map_err(CapacityError::Repository)?
            .iter()
            .map(|details| details.to_absence())
            .collect();

        let report = self
            .calculator
            .calculate(&teams, &members, &absences, reference_date)?;

        let alerts = report.iter().filter(|entry| entry.alert).count();
        info!(
            teams = teams.len(),
            entries = report.len(),
            alerts,
            "Capacity report generated"
        );

        Ok(report)
    }
}
