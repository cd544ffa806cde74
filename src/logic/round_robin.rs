//! Double round-robin fixture generation (circle method).

use crate::logic::schedule::{validate_competitors, KickoffClock, ScheduleError};
use crate::models::{Fixture, ScheduleConfig, TeamId};

/// Pairings for the first leg, one `Vec` of `(home, away)` per round.
///
/// 1. Pad an odd roster with a bye slot so the length `m` is even.
/// 2. Keep slot 0 fixed; in each round pair slot `j` with slot `m - 1 - j`.
/// 3. Drop any pair that touches the bye slot (that team sits out).
/// 4. Even rounds: lower slot is home. Odd rounds: swapped.
/// 5. Rotate slots `1..m` right by one before the next round.
///
/// Every unordered pair appears exactly once across the `m - 1` rounds.
pub fn first_leg_pairings(teams: &[TeamId]) -> Vec<Vec<(TeamId, TeamId)>> {
    let mut slots: Vec<Option<TeamId>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let m = slots.len();
    let mut rounds = Vec::with_capacity(m.saturating_sub(1));

    for round in 0..m.saturating_sub(1) {
        let mut pairs = Vec::with_capacity(m / 2);
        for j in 0..m / 2 {
            if let (Some(first), Some(second)) = (slots[j], slots[m - 1 - j]) {
                pairs.push(if round % 2 == 0 {
                    (first, second)
                } else {
                    (second, first)
                });
            }
        }
        rounds.push(pairs);
        slots[1..].rotate_right(1);
    }

    rounds
}

/// Generate a full double round-robin: every pair meets twice, once at each venue.
///
/// The second leg repeats the first leg's rounds in order with venues swapped.
/// Round numbers run on from the first leg (1..=2*(m-1)). Kickoffs come from
/// a [`KickoffClock`], so the output is identical for identical input.
pub fn generate_round_robin(
    teams: &[TeamId],
    config: &ScheduleConfig,
) -> Result<Vec<Fixture>, ScheduleError> {
    validate_competitors(teams)?;
    config.validate()?;

    let rounds = first_leg_pairings(teams);
    let first_leg_rounds = rounds.len() as u32;
    let mut clock = KickoffClock::new(config);

    let mut first_leg: Vec<Fixture> = Vec::new();
    for (i, pairs) in rounds.iter().enumerate() {
        for &(home, away) in pairs {
            first_leg.push(Fixture {
                round: i as u32 + 1,
                leg: 1,
                home,
                away,
                kickoff: clock.next_kickoff()?,
                duration_minutes: config.match_duration_minutes,
                stage: None,
            });
        }
    }

    let mut fixtures = Vec::with_capacity(first_leg.len() * 2);
    fixtures.extend(first_leg.iter().cloned());
    for f in &first_leg {
        let mut ret = f.reversed(first_leg_rounds + f.round);
        ret.kickoff = clock.next_kickoff()?;
        fixtures.push(ret);
    }

    log::debug!(
        "Round-robin: {} teams, {} rounds, {} fixtures",
        teams.len(),
        first_leg_rounds * 2,
        fixtures.len()
    );
    Ok(fixtures)
}
