// Repository traits (ports)
// The roster store contract consumed by the capacity service

pub mod absence_repository;
pub mod member_repository;
pub mod team_repository;

pub use absence_repository::AbsenceRepository;
pub use member_repository::MemberRepository;
pub use team_repository::TeamRepository;

/// Full roster store: teams, members and absences
///
/// Implemented automatically for any type providing the three repositories.
pub trait RosterRepository: TeamRepository + MemberRepository + AbsenceRepository {}

impl<T> RosterRepository for T where T: TeamRepository + MemberRepository + AbsenceRepository {}
