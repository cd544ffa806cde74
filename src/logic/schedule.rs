//! Shared scheduling utilities: input validation, kickoff time-stepping, seeding shuffle.

use crate::models::{ScheduleConfig, TeamId};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Errors returned by the fixture generators. Retrying with the same input gives the same error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Fewer than two teams, or a zero scheduling parameter.
    InvalidInput(String),
    /// The same team appears twice in the roster.
    DuplicateCompetitor(TeamId),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            ScheduleError::DuplicateCompetitor(id) => {
                write!(f, "Team {} appears more than once", id)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Check the roster before any pairing: duplicates first, then the two-team minimum.
pub fn validate_competitors(teams: &[TeamId]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::with_capacity(teams.len());
    for &id in teams {
        if !seen.insert(id) {
            return Err(ScheduleError::DuplicateCompetitor(id));
        }
    }
    if teams.len() < 2 {
        return Err(ScheduleError::InvalidInput(
            "at least two teams required".to_string(),
        ));
    }
    Ok(())
}

impl ScheduleConfig {
    /// All cadence parameters must be positive.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.interval_days == 0 {
            return Err(ScheduleError::InvalidInput(
                "interval_days must be positive".to_string(),
            ));
        }
        if self.matches_per_day == 0 {
            return Err(ScheduleError::InvalidInput(
                "matches_per_day must be positive".to_string(),
            ));
        }
        if self.match_duration_minutes == 0 {
            return Err(ScheduleError::InvalidInput(
                "match_duration_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hands out kickoff times in order, moving to the next scheduling day
/// every `matches_per_day` fixtures.
#[derive(Clone, Debug)]
pub struct KickoffClock {
    start: DateTime<Utc>,
    interval_days: i64,
    match_duration: Duration,
    matches_per_day: u32,
    scheduled: u32,
}

impl KickoffClock {
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            start: config.start,
            interval_days: i64::from(config.interval_days),
            match_duration: Duration::minutes(i64::from(config.match_duration_minutes)),
            matches_per_day: config.matches_per_day.max(1),
            scheduled: 0,
        }
    }

    /// Kickoff for the next fixture.
    ///
    /// Fails when the kickoff, or the end of that match, falls outside the
    /// representable date range.
    pub fn next_kickoff(&mut self) -> Result<DateTime<Utc>, ScheduleError> {
        let day = i64::from(self.scheduled / self.matches_per_day);
        let kickoff = self
            .interval_days
            .checked_mul(day)
            .and_then(Duration::try_days)
            .and_then(|offset| self.start.checked_add_signed(offset))
            .filter(|k| k.checked_add_signed(self.match_duration).is_some())
            .ok_or_else(|| {
                ScheduleError::InvalidInput(
                    "schedule runs past the supported date range".to_string(),
                )
            })?;
        self.scheduled += 1;
        Ok(kickoff)
    }

    /// Number of kickoffs handed out so far.
    pub fn scheduled(&self) -> u32 {
        self.scheduled
    }
}

/// Randomise seeding before a knockout draw. The generators never shuffle on their own.
pub fn shuffle_seeding<R: Rng + ?Sized>(teams: &mut [TeamId], rng: &mut R) {
    teams.shuffle(rng);
}
