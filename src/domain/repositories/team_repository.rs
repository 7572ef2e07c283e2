use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::team::Team;

/// Repository trait for Team entities
///
/// Implementations must keep team names unique and list teams in a
/// stable order, since report entries follow that order.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Add a new team; fails if the name is already taken
    async fn add_team(&self, team: &Team) -> Result<(), String>;

    /// List all teams in insertion order
    async fn list_teams(&self) -> Result<Vec<Team>, String>;

    /// Delete a team by ID, together with its members and their absences
    async fn delete_team(&self, id: Uuid) -> Result<(), String>;
}
