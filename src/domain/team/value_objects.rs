use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a team name, in characters
pub const MAX_TEAM_NAME_LEN: usize = 100;

/// Team name value object
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Must not be empty after trimming
/// - At most 100 characters
/// - Is immutable after construction
///
/// Uniqueness across teams is a store concern, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName value object
    ///
    /// # Example
    /// ```
    /// use team_capacity::domain::team::TeamName;
    ///
    /// let name = TeamName::new("  Alpha ").expect("valid name");
    /// assert_eq!(name.as_str(), "Alpha");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if trimmed.chars().count() > MAX_TEAM_NAME_LEN {
            return Err(format!(
                "Team name cannot exceed {} characters",
                MAX_TEAM_NAME_LEN
            ));
        }

        Ok(TeamName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
