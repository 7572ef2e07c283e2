use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::member::Member;

/// Repository trait for Member entities
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Add a member; fails if the owning team does not exist
    async fn add_member(&self, member: &Member) -> Result<(), String>;

    /// Find a member by ID
    async fn find_member(&self, id: Uuid) -> Result<Option<Member>, String>;

    /// List the members of a team in insertion order
    async fn list_members(&self, team_id: Uuid) -> Result<Vec<Member>, String>;

    /// Delete a member by ID, together with their absences
    async fn delete_member(&self, id: Uuid) -> Result<(), String>;
}
