//! Scheduling parameters shared by both fixture generators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When the first match kicks off and how fixtures are spread over the calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub start: DateTime<Utc>,
    /// Days between scheduling days.
    #[serde(default = "default_interval_days")]
    pub interval_days: u32,
    #[serde(default = "default_matches_per_day")]
    pub matches_per_day: u32,
    #[serde(default = "default_match_duration_minutes")]
    pub match_duration_minutes: u32,
}

fn default_interval_days() -> u32 {
    1
}

fn default_matches_per_day() -> u32 {
    1
}

fn default_match_duration_minutes() -> u32 {
    90
}

impl ScheduleConfig {
    /// Config with the default cadence: one 90-minute match per day.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            interval_days: default_interval_days(),
            matches_per_day: default_matches_per_day(),
            match_duration_minutes: default_match_duration_minutes(),
        }
    }
}
