pub mod ballots;
pub mod matches;
pub mod players;
pub mod pom_standings;
pub mod team_members;
pub mod voting_sessions;

pub use ballots::Entity as Ballots;
pub use ballots::Model as BallotRow;
pub use matches::Entity as Matches;
pub use matches::Model as MatchRow;
pub use players::Entity as Players;
pub use players::Model as PlayerRow;
pub use pom_standings::Entity as PomStandings;
pub use pom_standings::Model as PomStandingRow;
pub use team_members::Entity as TeamMembers;
pub use team_members::Model as TeamMemberRow;
pub use voting_sessions::Entity as VotingSessions;
pub use voting_sessions::Model as VotingSessionRow;
