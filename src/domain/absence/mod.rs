// Absence domain module
// Contains the absence entity, its joined read model and the date range value object

#![allow(clippy::module_inception)]

pub mod absence;
pub mod value_objects;

pub use absence::{Absence, AbsenceWithDetails};
pub use value_objects::DateRange;
