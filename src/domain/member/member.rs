use uuid::Uuid;

/// Member entity
///
/// A person on a team roster. A member belongs to exactly one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Uuid,
    team_id: Uuid,
    name: String,
}

impl Member {
    /// Creates a new Member of `team_id`
    ///
    /// # Returns
    /// * `Err(String)` - If the name is empty after trimming
    pub fn new(team_id: Uuid, name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let name = name.trim();

        if name.is_empty() {
            return Err("Member name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            team_id,
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the ID of the owning team
    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Member from stored data
    pub fn from_persistence(id: Uuid, team_id: Uuid, name: String) -> Self {
        Self { id, team_id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_member() {
        let team_id = Uuid::new_v4();
        let member = Member::new(team_id, " Alice ").unwrap();

        assert_eq!(member.team_id(), team_id);
        assert_eq!(member.name(), "Alice");
    }

    #[test]
    fn create_member_with_blank_name_fails() {
        assert!(Member::new(Uuid::new_v4(), "  ").is_err());
    }
}
