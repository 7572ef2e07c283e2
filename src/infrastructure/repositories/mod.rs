// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_roster_repository;
pub mod roster_snapshot;

pub use in_memory_roster_repository::InMemoryRosterRepository;
pub use roster_snapshot::RosterSnapshot;
