use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::absence::{Absence, AbsenceWithDetails, DateRange};
use crate::domain::member::Member;
use crate::domain::repositories::{AbsenceRepository, MemberRepository, TeamRepository};
use crate::domain::team::Team;

#[derive(Debug, Default)]
struct RosterState {
    teams: Vec<Team>,
    members: Vec<Member>,
    absences: Vec<Absence>,
}

impl RosterState {
    fn details(&self, absence: &Absence) -> Option<AbsenceWithDetails> {
        let member = self.members.iter().find(|m| m.id() == absence.member_id())?;
        let team = self.teams.iter().find(|t| t.id() == member.team_id())?;

        Some(AbsenceWithDetails {
            id: absence.id(),
            member_id: member.id(),
            member_name: member.name().to_string(),
            team_id: team.id(),
            team_name: team.name().to_string(),
            start_date: absence.start_date(),
            end_date: absence.end_date(),
        })
    }
}

/// In-memory implementation of the roster repositories
///
/// Keeps insertion order for every listing. Deletions cascade the way
/// foreign keys would: a team takes its members with it, a member takes
/// their absences.
#[derive(Debug, Default)]
pub struct InMemoryRosterRepository {
    state: RwLock<RosterState>,
}

impl InMemoryRosterRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryRosterRepository {
    async fn add_team(&self, team: &Team) -> Result<(), String> {
        let mut state = self.state.write().await;

        if state.teams.iter().any(|t| t.name() == team.name()) {
            return Err(format!("Team already exists: {}", team.name()));
        }
        if state.teams.iter().any(|t| t.id() == team.id()) {
            return Err(format!("Team already exists: {}", team.id()));
        }

        state.teams.push(team.clone());
        Ok(())
    }

    async fn list_teams(&self) -> Result<Vec<Team>, String> {
        let state = self.state.read().await;
        Ok(state.teams.clone())
    }

    async fn delete_team(&self, id: Uuid) -> Result<(), String> {
        let mut state = self.state.write().await;

        let before = state.teams.len();
        state.teams.retain(|t| t.id() != id);
        if state.teams.len() == before {
            return Err(format!("Team not found: {}", id));
        }

        let removed: Vec<Uuid> = state
            .members
            .iter()
            .filter(|m| m.team_id() == id)
            .map(|m| m.id())
            .collect();
        state.members.retain(|m| m.team_id() != id);
        state.absences.retain(|a| !removed.contains(&a.member_id()));

        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryRosterRepository {
    async fn add_member(&self, member: &Member) -> Result<(), String> {
        let mut state = self.state.write().await;

        if !state.teams.iter().any(|t| t.id() == member.team_id()) {
            return Err(format!("Team not found: {}", member.team_id()));
        }
        if state.members.iter().any(|m| m.id() == member.id()) {
            return Err(format!("Member already exists: {}", member.id()));
        }

        state.members.push(member.clone());
        Ok(())
    }

    async fn find_member(&self, id: Uuid) -> Result<Option<Member>, String> {
        let state = self.state.read().await;
        Ok(state.members.iter().find(|m| m.id() == id).cloned())
    }

    async fn list_members(&self, team_id: Uuid) -> Result<Vec<Member>, String> {
        let state = self.state.read().await;
        Ok(state
            .members
            .iter()
            .filter(|m| m.team_id() == team_id)
            .cloned()
            .collect())
    }

    async fn delete_member(&self, id: Uuid) -> Result<(), String> {
        let mut state = self.state.write().await;

        let before = state.members.len();
        state.members.retain(|m| m.id() != id);
        if state.members.len() == before {
            return Err(format!("Member not found: {}", id));
        }

        state.absences.retain(|a| a.member_id() != id);
        Ok(())
    }
}

#[async_trait]
impl AbsenceRepository for InMemoryRosterRepository {
    async fn add_absence(&self, absence: &Absence) -> Result<(), String> {
        let mut state = self.state.write().await;

        if !state.members.iter().any(|m| m.id() == absence.member_id()) {
            return Err(format!("Member not found: {}", absence.member_id()));
        }
        if state.absences.iter().any(|a| a.id() == absence.id()) {
            return Err(format!("Absence already exists: {}", absence.id()));
        }

        state.absences.push(absence.clone());
        Ok(())
    }

    async fn update_absence(&self, id: Uuid, period: DateRange) -> Result<(), String> {
        let mut state = self.state.write().await;

        let absence = state
            .absences
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| format!("Absence not found: {}", id))?;

        absence.reschedule(period);
        Ok(())
    }

    async fn find_absence_with_details(
        &self,
        id: Uuid,
    ) -> Result<Option<AbsenceWithDetails>, String> {
        let state = self.state.read().await;
        Ok(state
            .absences
            .iter()
            .find(|a| a.id() == id)
            .and_then(|a| state.details(a)))
    }

    async fn list_absences_with_details(&self) -> Result<Vec<AbsenceWithDetails>, String> {
        let state = self.state.read().await;
        Ok(state
            .absences
            .iter()
            .filter_map(|a| state.details(a))
            .collect())
    }

    async fn delete_absence(&self, id: Uuid) -> Result<(), String> {
        let mut state = self.state.write().await;

        let before = state.absences.len();
        state.absences.retain(|a| a.id() != id);
        if state.absences.len() == before {
            return Err(format!("Absence not found: {}", id));
        }

        Ok(())
    }
}
