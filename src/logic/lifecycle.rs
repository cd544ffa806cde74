//! Tournament lifecycle: schedule once, record results, rebuild the table.

use crate::logic::{generate_knockout_round, generate_round_robin, recompute_standings};
use crate::models::{
    MatchResult, MatchStatus, ScheduleConfig, Tournament, TournamentError, TournamentFormat,
};

/// Generate fixtures for the tournament's format from the current roster.
///
/// Rejected if fixtures already exist; call `reset_schedule` first to regenerate.
pub fn generate_schedule(
    tournament: &mut Tournament,
    config: &ScheduleConfig,
) -> Result<(), TournamentError> {
    if tournament.is_scheduled() {
        return Err(TournamentError::AlreadyScheduled);
    }
    let ids = tournament.team_ids();
    match tournament.format {
        TournamentFormat::League => {
            tournament.fixtures = generate_round_robin(&ids, config)?;
        }
        TournamentFormat::Knockout => {
            let round = generate_knockout_round(&ids, config)?;
            tournament.fixtures = round.fixtures;
            tournament.byes = round.byes;
            tournament.stage = Some(round.stage);
        }
    }
    log::info!(
        "Scheduled {} fixtures for '{}' ({} teams)",
        tournament.fixtures.len(),
        tournament.name,
        ids.len()
    );
    Ok(())
}

/// Record the final score of a fixture. Recording again overwrites the earlier score.
pub fn record_result(
    tournament: &mut Tournament,
    fixture_index: usize,
    home_score: u32,
    away_score: u32,
) -> Result<(), TournamentError> {
    let fixture = tournament
        .fixtures
        .get(fixture_index)
        .cloned()
        .ok_or(TournamentError::FixtureNotFound(fixture_index))?;
    tournament.results.insert(
        fixture_index,
        MatchResult::finished(fixture, home_score, away_score),
    );
    Ok(())
}

/// Move a fixture to `Scheduled` or `Live` without changing its score (0-0 if none
/// recorded yet). Finishing a match goes through [`record_result`] so it always
/// carries a final score.
pub fn set_match_status(
    tournament: &mut Tournament,
    fixture_index: usize,
    status: MatchStatus,
) -> Result<(), TournamentError> {
    if status == MatchStatus::Finished {
        return Err(TournamentError::ScoreNotRecorded(fixture_index));
    }
    let fixture = tournament
        .fixtures
        .get(fixture_index)
        .cloned()
        .ok_or(TournamentError::FixtureNotFound(fixture_index))?;
    tournament
        .results
        .entry(fixture_index)
        .or_insert_with(|| MatchResult {
            fixture,
            home_score: 0,
            away_score: 0,
            status,
        })
        .status = status;
    Ok(())
}

/// Throw away the current table and rebuild it from every recorded result.
pub fn refresh_standings(tournament: &mut Tournament) {
    let ids = tournament.team_ids();
    let results = tournament.result_list();
    tournament.standings = recompute_standings(&ids, &results, tournament.points);
}
