use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::capacity::errors::{CapacityError, CapacityResult};
use crate::domain::absence::Absence;
use crate::domain::member::Member;
use crate::domain::repositories::{
    AbsenceRepository, MemberRepository, RosterRepository, TeamRepository,
};
use crate::domain::team::{Team, TeamName};

/// Team row of a roster file
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub id: Uuid,
    pub name: TeamName,
}

/// Member row of a roster file
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRecord {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
}

/// Absence row of a roster file; dates stay raw until validated
#[derive(Debug, Clone, Deserialize)]
pub struct AbsenceRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub member_id: Uuid,
    pub start_date: String,
    pub end_date: String,
}

/// JSON roster file: teams, members and absences
///
/// ```json
/// {
///   "teams":    [{ "id": "…", "name": "Alpha" }],
///   "members":  [{ "id": "…", "team_id": "…", "name": "Alice" }],
///   "absences": [{ "member_id": "…", "start_date": "2025-03-03", "end_date": "2025-03-07" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
    #[serde(default)]
    pub absences: Vec<AbsenceRecord>,
}

impl RosterSnapshot {
    /// Parses a roster from JSON text
    pub fn from_json(json: &str) -> CapacityResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a roster file
    pub fn from_path(path: impl AsRef<Path>) -> CapacityResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Validates every absence date up front
    ///
    /// # Returns
    /// * `Err(CapacityError::InvalidDate)` - Naming the first malformed value
    pub fn absences(&self) -> CapacityResult<Vec<Absence>> {
        self.absences
            .iter()
            .map(|record| -> CapacityResult<Absence> {
                let id = record.id.unwrap_or_else(Uuid::new_v4);
                let start = parse_absence_date(id, &record.start_date)?;
                let end = parse_absence_date(id, &record.end_date)?;

                if start > end {
                    warn!(absence_id = %id, %start, %end, "Absence ends before it starts, counted as no absence");
                }

                Ok(Absence::from_persistence(id, record.member_id, start, end))
            })
            .collect()
    }

    /// Builds the roster members, rejecting blank names
    pub fn members(&self) -> CapacityResult<Vec<Member>> {
        self.members
            .iter()
            .map(|record| -> CapacityResult<Member> {
                let name = record.name.trim();
                if name.is_empty() {
                    return Err(CapacityError::InvalidRoster(format!(
                        "Member {} has an empty name",
                        record.id
                    )));
                }

                Ok(Member::from_persistence(record.id, record.team_id, name.to_string()))
            })
            .collect()
    }

    /// Loads the whole roster into a store
    ///
    /// Dates and names are validated before anything is written, so a
    /// malformed file leaves the store untouched.
    pub async fn load_into<R: RosterRepository>(&self, repository: &R) -> CapacityResult<()> {
        let teams: Vec<Team> = self
            .teams
            .iter()
            .map(|record| Team::from_persistence(record.id, record.name.clone()))
            .collect();
        let members = self.members()?;
        let absences = self.absences()?;

        for team in &teams {
            repository
                .add_team(team)
                .await
                .map_err(CapacityError::Repository)?;
        }

        for member in &members {
            repository
                .add_member(member)
                .await
                .map_err(CapacityError::Repository)?;
        }

        for absence in &absences {
            repository
                .add_absence(absence)
                .await
                .map_err(CapacityError::Repository)?;
        }

        info!(
            teams = teams.len(),
            members = members.len(),
            absences = absences.len(),
            "Roster loaded"
        );

        Ok(())
    }
}

/// Parses a `YYYY-MM-DD` absence date
pub fn parse_absence_date(absence_id: Uuid, value: &str) -> CapacityResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CapacityError::InvalidDate {
        absence_id,
        value: value.to_string(),
    })
}
