//! Tournament record: roster, fixtures, results and the derived table.

use crate::logic::ScheduleError;
use crate::models::fixture::{Fixture, MatchResult, Stage};
use crate::models::standing::{PointsTable, StandingRow};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The fixture generator rejected the roster or config.
    Schedule(ScheduleError),
    /// Fixtures already exist; reset the schedule before generating again.
    AlreadyScheduled,
    /// The roster cannot change once fixtures exist.
    RosterLocked,
    /// Team not found in the roster.
    TeamNotFound(TeamId),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team names cannot be blank.
    EmptyTeamName,
    /// No fixture at this index.
    FixtureNotFound(usize),
    /// Fixtures are only finished by recording their final score.
    ScoreNotRecorded(usize),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::Schedule(e) => write!(f, "{}", e),
            TournamentError::AlreadyScheduled => write!(f, "Tournament already has fixtures"),
            TournamentError::RosterLocked => {
                write!(f, "Teams cannot be changed after fixtures are generated")
            }
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::EmptyTeamName => write!(f, "Team name cannot be empty"),
            TournamentError::FixtureNotFound(i) => write!(f, "No fixture at index {}", i),
            TournamentError::ScoreNotRecorded(i) => {
                write!(f, "Record the final score to finish fixture {}", i)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<ScheduleError> for TournamentError {
    fn from(e: ScheduleError) -> Self {
        TournamentError::Schedule(e)
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How fixtures are generated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Double round-robin with a league table.
    #[default]
    League,
    /// Single elimination; only the first live round is generated.
    Knockout,
}

/// Full tournament record as the caller holds it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub year: i32,
    pub format: TournamentFormat,
    pub teams: Vec<Team>,
    pub points: PointsTable,
    pub fixtures: Vec<Fixture>,
    /// Recorded results keyed by fixture index.
    pub results: BTreeMap<usize, MatchResult>,
    /// Knockout only: teams advancing without playing round 1.
    pub byes: Vec<TeamId>,
    /// Knockout only: stage of the generated round.
    pub stage: Option<Stage>,
    /// Derived from `results`; replaced wholesale on every recompute.
    pub standings: Vec<StandingRow>,
}

impl Tournament {
    /// Create an empty tournament with default points (3 for a win, 1 for a draw).
    pub fn new(name: impl Into<String>, year: i32, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            year,
            format,
            teams: Vec::new(),
            points: PointsTable::default(),
            fixtures: Vec::new(),
            results: BTreeMap::new(),
            byes: Vec::new(),
            stage: None,
            standings: Vec::new(),
        }
    }

    /// Create a tournament with an initial roster.
    pub fn with_teams(
        name: impl Into<String>,
        year: i32,
        format: TournamentFormat,
        teams: Vec<Team>,
    ) -> Self {
        Self {
            teams,
            ..Self::new(name, year, format)
        }
    }

    /// Team ids in roster order. This order drives fixture generation.
    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn is_scheduled(&self) -> bool {
        !self.fixtures.is_empty()
    }

    /// Add a team (only before scheduling). Names must be unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::RosterLocked);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id (only before scheduling).
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::RosterLocked);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }

    pub fn set_points(&mut self, points: PointsTable) {
        self.points = points;
    }

    /// Recorded results in fixture order.
    pub fn result_list(&self) -> Vec<MatchResult> {
        self.results.values().cloned().collect()
    }

    /// Drop fixtures and everything derived from them. The roster is kept.
    pub fn reset_schedule(&mut self) {
        self.fixtures.clear();
        self.results.clear();
        self.byes.clear();
        self.stage = None;
        self.standings.clear();
    }
}
