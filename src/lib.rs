//! Team Capacity Library
//!
//! Tracks team-roster absences and reports, per team and per ISO week, the
//! share of working-day capacity lost to absences and public holidays.
//! The capacity engine is pure; the roster store is reached through the
//! repository traits of the domain layer.

pub mod capacity;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
