use super::value_objects::TeamName;
use uuid::Uuid;

/// Team entity
///
/// A named group of members whose weekly capacity is reported together.
///
/// # Invariants
/// - Name is a valid [`TeamName`]
/// - Identity never changes after creation
///
/// # Example
/// ```
/// use team_capacity::domain::team::Team;
///
/// let team = Team::new("Alpha").expect("valid team");
/// assert_eq!(team.name(), "Alpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: TeamName,
}

impl Team {
    /// Creates a new Team with a fresh identity
    ///
    /// # Returns
    /// * `Ok(Team)` - New team
    /// * `Err(String)` - If the name is invalid
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = TeamName::new(name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the name value object
    pub fn team_name(&self) -> &TeamName {
        &self.name
    }

    /// Reconstructs a Team from stored data
    ///
    /// # Note
    /// Only to be used by repository implementations and roster loaders.
    pub fn from_persistence(id: Uuid, name: TeamName) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let team = Team::new("Alpha").unwrap();

        assert_eq!(team.name(), "Alpha");
        assert_eq!(team.team_name().as_str(), "Alpha");
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        let result = Team::new("");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn new_teams_get_distinct_ids() {
        let a = Team::new("Alpha").unwrap();
        let b = Team::new("Alpha").unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn from_persistence_keeps_identity() {
        let id = Uuid::new_v4();
        let team = Team::from_persistence(id, TeamName::new("Beta").unwrap());

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "Beta");
    }
}
