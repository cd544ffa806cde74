//! Fixtures, knockout stages and match results.

use crate::models::team::TeamId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a match. Only `Finished` matches feed the standings.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// Named round of a knockout bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Play-in round that trims the field down to a power of two.
    Preliminary,
    /// "Round of n" for brackets of 16 or more.
    RoundOf(usize),
    QuarterFinal,
    SemiFinal,
    Final,
}

impl Stage {
    /// Stage name for a round that starts with `size` teams (a power of two).
    pub fn for_bracket_size(size: usize) -> Self {
        match size {
            2 => Stage::Final,
            4 => Stage::SemiFinal,
            8 => Stage::QuarterFinal,
            n => Stage::RoundOf(n),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Stage::Preliminary => "Preliminary round".to_string(),
            Stage::RoundOf(n) => format!("Round of {}", n),
            Stage::QuarterFinal => "Quarter-final".to_string(),
            Stage::SemiFinal => "Semi-final".to_string(),
            Stage::Final => "Final".to_string(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scheduled pairing: home vs away at a given kickoff.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// 1-indexed matchday, continuous across both legs.
    pub round: u32,
    /// 1 for the first leg, 2 for the return leg.
    pub leg: u32,
    pub home: TeamId,
    pub away: TeamId,
    pub kickoff: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Only set for knockout fixtures.
    pub stage: Option<Stage>,
}

impl Fixture {
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.kickoff + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// The return fixture: venues swapped, placed in `round` of leg 2.
    /// Kickoff is kept and is expected to be re-assigned by the caller.
    pub fn reversed(&self, round: u32) -> Self {
        Self {
            round,
            leg: 2,
            home: self.away,
            away: self.home,
            ..self.clone()
        }
    }
}

/// Outcome of a result from the home side's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// A fixture with its scores and status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
}

impl MatchResult {
    /// A finished result for `fixture`.
    pub fn finished(fixture: Fixture, home_score: u32, away_score: u32) -> Self {
        Self {
            fixture,
            home_score,
            away_score,
            status: MatchStatus::Finished,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn outcome(&self) -> Outcome {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::AwayWin,
        }
    }

    /// Winning team, or None for a draw.
    pub fn winner(&self) -> Option<TeamId> {
        match self.outcome() {
            Outcome::HomeWin => Some(self.fixture.home),
            Outcome::AwayWin => Some(self.fixture.away),
            Outcome::Draw => None,
        }
    }
}
