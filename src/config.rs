// Runtime configuration
// Read from the environment, with `.env` support through dotenv

use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::capacity::holidays::{HolidayCalendar, DEFAULT_EASTER_OFFSETS, DEFAULT_FIXED_HOLIDAYS};
use crate::capacity::{CapacityError, CapacityOptions, CapacityResult, DEFAULT_ALERT_THRESHOLD, DEFAULT_HORIZON_WEEKS};
use crate::logging::LogFormat;

pub const DEFAULT_ROSTER_PATH: &str = "data/roster.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Roster file loaded by the runner
    pub roster_path: PathBuf,
    /// First reported week; today when unset
    pub reference_date: Option<NaiveDate>,
    pub log_format: LogFormat,
    pub capacity: CapacityOptions,
}

impl AppConfig {
    /// Reads only `LOG_FORMAT` from the process environment
    ///
    /// Logging has to be installed before the rest of the configuration is
    /// read, otherwise its fallback warnings go nowhere.
    pub fn log_format_from_env() -> LogFormat {
        Self::log_format_from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads only `LOG_FORMAT`, silently falling back to pretty output
    pub fn log_format_from_lookup<F>(lookup: F) -> LogFormat
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("LOG_FORMAT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(LogFormat::Pretty)
    }

    /// Builds the configuration from process environment variables
    pub fn from_env() -> CapacityResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Unparseable values fall back to their default with a warning.
    /// Holiday and threshold values that parse but make no sense are errors.
    pub fn from_lookup<F>(lookup: F) -> CapacityResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roster_path = lookup("ROSTER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_PATH));

        let reference_date = lookup("CAPACITY_REFERENCE_DATE").and_then(|value| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|_| warn!(%value, "CAPACITY_REFERENCE_DATE is not YYYY-MM-DD, using today"))
                .ok()
        });

        let log_format = parse_or_default(&lookup, "LOG_FORMAT", LogFormat::Pretty);
        let horizon_weeks = parse_or_default(&lookup, "CAPACITY_HORIZON_WEEKS", DEFAULT_HORIZON_WEEKS);

        let alert_threshold = parse_or_default(
            &lookup,
            "CAPACITY_ALERT_THRESHOLD",
            Decimal::from(DEFAULT_ALERT_THRESHOLD),
        );
        if alert_threshold < Decimal::ZERO || alert_threshold > Decimal::ONE_HUNDRED {
            return Err(CapacityError::InvalidConfig(format!(
                "Alert threshold must be between 0 and 100: {}",
                alert_threshold
            )));
        }

        let fixed = match lookup("HOLIDAY_FIXED_DATES") {
            Some(value) => parse_fixed_dates(&value)?,
            None => DEFAULT_FIXED_HOLIDAYS.to_vec(),
        };
        let easter_offsets = match lookup("HOLIDAY_EASTER_OFFSETS") {
            Some(value) => parse_easter_offsets(&value)?,
            None => DEFAULT_EASTER_OFFSETS.to_vec(),
        };

        Ok(Self {
            roster_path,
            reference_date,
            log_format,
            capacity: CapacityOptions {
                horizon_weeks,
                alert_threshold,
                calendar: HolidayCalendar::new(fixed, easter_offsets)?,
            },
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, %value, %default, "Invalid configuration value, using default");
            default
        }),
        None => default,
    }
}

/// Parses a comma-separated `MM-DD` list; an empty string means no fixed holidays
fn parse_fixed_dates(value: &str) -> CapacityResult<Vec<(u32, u32)>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| -> CapacityResult<(u32, u32)> {
            let invalid = || CapacityError::InvalidConfig(format!("Invalid holiday date: {}", item));
            let (month, day) = item.split_once('-').ok_or_else(invalid)?;
            let month = month.parse().map_err(|_| invalid())?;
            let day = day.parse().map_err(|_| invalid())?;
            Ok((month, day))
        })
        .collect()
}

/// Parses a comma-separated list of signed day offsets
fn parse_easter_offsets(value: &str) -> CapacityResult<Vec<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse()
                .map_err(|_| CapacityError::InvalidConfig(format!("Invalid Easter offset: {}", item)))
        })
        .collect()
}
