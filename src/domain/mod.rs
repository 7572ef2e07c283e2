// Domain layer module exports
// Entities of the roster and the store contract; no storage or transport concerns

pub mod absence;
pub mod member;
pub mod repositories;
pub mod team;
