use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while building a capacity report
#[derive(Debug, Error)]
pub enum CapacityError {
    #[error("Invalid date '{value}' on absence {absence_id} (expected YYYY-MM-DD)")]
    InvalidDate { absence_id: Uuid, value: String },

    #[error("Week arithmetic out of range: {weeks} weeks from {reference}")]
    DateOutOfRange { reference: NaiveDate, weeks: u32 },

    #[error("Invalid horizon: {0} weeks (maximum is {})", crate::capacity::MAX_HORIZON_WEEKS)]
    InvalidHorizon(u32),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CapacityResult<T> = Result<T, CapacityError>;
