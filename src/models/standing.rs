//! League table rows and the points awarded per result.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Points awarded for a win and a draw. A loss is always worth zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsTable {
    #[serde(default = "default_win_points")]
    pub win: u32,
    #[serde(default = "default_draw_points")]
    pub draw: u32,
}

fn default_win_points() -> u32 {
    3
}

fn default_draw_points() -> u32 {
    1
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            win: default_win_points(),
            draw: default_draw_points(),
        }
    }
}

/// One team's line in the league table. Always derived from results, never edited directly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingRow {
    /// Empty row for a team that has not played yet.
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    // Counters saturate so huge scores cannot wrap or panic.
    pub(crate) fn add_win(&mut self, points: &PointsTable) {
        self.won = self.won.saturating_add(1);
        self.points = self.points.saturating_add(points.win);
    }

    pub(crate) fn add_draw(&mut self, points: &PointsTable) {
        self.drawn = self.drawn.saturating_add(1);
        self.points = self.points.saturating_add(points.draw);
    }

    pub(crate) fn add_loss(&mut self) {
        self.lost = self.lost.saturating_add(1);
    }

    pub(crate) fn add_goals(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
    }
}
