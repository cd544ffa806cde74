//! Football tournament scheduling: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    bracket_size, compare_rows, first_leg_pairings, generate_knockout_round,
    generate_round_robin, generate_schedule, recompute_standings, record_result,
    refresh_standings, set_match_status, shuffle_seeding, validate_competitors, KickoffClock,
    KnockoutRound, ScheduleError,
};
pub use models::{
    Fixture, MatchResult, MatchStatus, Outcome, PointsTable, ScheduleConfig, Stage, StandingRow,
    Team, TeamId, Tournament, TournamentError, TournamentFormat, TournamentId,
};
