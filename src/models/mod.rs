//! Data structures for a football tournament: teams, fixtures, results, standings.

mod fixture;
mod schedule;
mod standing;
mod team;
mod tournament;

pub use fixture::{Fixture, MatchResult, MatchStatus, Outcome, Stage};
pub use schedule::ScheduleConfig;
pub use standing::{PointsTable, StandingRow};
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentFormat, TournamentId};
