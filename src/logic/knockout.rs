//! Single-elimination bracket: first live round with byes for non-power-of-two fields.

use crate::logic::schedule::{validate_competitors, KickoffClock, ScheduleError};
use crate::models::{Fixture, ScheduleConfig, Stage, TeamId};
use serde::{Deserialize, Serialize};

/// The first playable round of a knockout bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutRound {
    pub fixtures: Vec<Fixture>,
    /// Teams that go straight through to the next round.
    pub byes: Vec<TeamId>,
    pub stage: Stage,
    /// Full bracket size: the smallest power of two that fits every team.
    pub bracket_size: usize,
}

impl KnockoutRound {
    pub fn stage_label(&self) -> String {
        self.stage.label()
    }

    /// Number of teams left once this round is played (always `bracket_size / 2`).
    pub fn survivors(&self) -> usize {
        self.fixtures.len() + self.byes.len()
    }
}

/// Smallest power of two that is at least `teams`.
pub fn bracket_size(teams: usize) -> usize {
    teams.max(1).next_power_of_two()
}

/// Generate round 1 of a knockout bracket.
///
/// With `n` teams and bracket size `p`, `n - p/2` matches are needed so that
/// winners plus byes make exactly `p/2`. The first `2 * matches` teams play in
/// input order (0 v 1, 2 v 3, ...) and the rest get byes, so callers wanting a
/// random draw shuffle beforehand. Later rounds depend on results and are not
/// generated here.
pub fn generate_knockout_round(
    teams: &[TeamId],
    config: &ScheduleConfig,
) -> Result<KnockoutRound, ScheduleError> {
    validate_competitors(teams)?;
    config.validate()?;

    let n = teams.len();
    let size = bracket_size(n);
    let matches = n - size / 2;
    let playing = 2 * matches;

    let stage = if size == n {
        Stage::for_bracket_size(size)
    } else {
        Stage::Preliminary
    };

    let mut clock = KickoffClock::new(config);
    let fixtures = teams[..playing]
        .chunks_exact(2)
        .map(|pair| {
            Ok(Fixture {
                round: 1,
                leg: 1,
                home: pair[0],
                away: pair[1],
                kickoff: clock.next_kickoff()?,
                duration_minutes: config.match_duration_minutes,
                stage: Some(stage),
            })
        })
        .collect::<Result<Vec<Fixture>, ScheduleError>>()?;
    let byes = teams[playing..].to_vec();

    log::debug!(
        "Knockout: {} teams, bracket of {}, {} matches, {} byes ({})",
        n,
        size,
        fixtures.len(),
        byes.len(),
        stage
    );
    Ok(KnockoutRound {
        fixtures,
        byes,
        stage,
        bracket_size: size,
    })
}
