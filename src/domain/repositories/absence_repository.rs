use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::absence::{Absence, AbsenceWithDetails, DateRange};

/// Repository trait for Absence entities
#[async_trait]
pub trait AbsenceRepository: Send + Sync {
    /// Add an absence; fails if the member does not exist
    async fn add_absence(&self, absence: &Absence) -> Result<(), String>;

    /// Replace the period of an existing absence
    async fn update_absence(&self, id: Uuid, period: DateRange) -> Result<(), String>;

    /// Find one absence joined with its member and team
    async fn find_absence_with_details(&self, id: Uuid)
        -> Result<Option<AbsenceWithDetails>, String>;

    /// List every absence joined with its member and team
    async fn list_absences_with_details(&self) -> Result<Vec<AbsenceWithDetails>, String>;

    /// Delete an absence by ID
    async fn delete_absence(&self, id: Uuid) -> Result<(), String>;
}
