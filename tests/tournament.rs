//! Integration tests for the tournament record: roster, scheduling, results, table.

use chrono::{TimeZone, Utc};
use football_tournament::{
    generate_schedule, record_result, refresh_standings, set_match_status, MatchStatus,
    PointsTable, ScheduleConfig, ScheduleError, Stage, Team, Tournament, TournamentError,
    TournamentFormat,
};

fn config() -> ScheduleConfig {
    ScheduleConfig::starting_at(Utc.with_ymd_and_hms(2025, 8, 9, 16, 0, 0).unwrap())
}

fn tournament_with_teams(n: usize, format: TournamentFormat) -> Tournament {
    let teams: Vec<Team> = (0..n).map(|i| Team::new(format!("Club {i}"))).collect();
    Tournament::with_teams("Cup", 2025, format, teams)
}

#[test]
fn add_team_rejects_duplicates_and_blank_names() {
    let mut t = Tournament::new("League", 2025, TournamentFormat::League);
    t.add_team("Rovers").unwrap();
    assert_eq!(t.add_team(" rovers "), Err(TournamentError::DuplicateTeamName));
    assert_eq!(t.add_team("   "), Err(TournamentError::EmptyTeamName));
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn generate_requires_two_teams() {
    let mut t = tournament_with_teams(1, TournamentFormat::League);
    assert!(matches!(
        generate_schedule(&mut t, &config()),
        Err(TournamentError::Schedule(ScheduleError::InvalidInput(_)))
    ));
    assert!(!t.is_scheduled());
}

#[test]
fn league_schedule_is_generated_once() {
    let mut t = tournament_with_teams(4, TournamentFormat::League);
    generate_schedule(&mut t, &config()).unwrap();
    assert_eq!(t.fixtures.len(), 12);
    assert_eq!(
        generate_schedule(&mut t, &config()),
        Err(TournamentError::AlreadyScheduled)
    );
    assert_eq!(t.add_team("Late FC"), Err(TournamentError::RosterLocked));
    let first = t.teams[0].id;
    assert_eq!(t.remove_team(first), Err(TournamentError::RosterLocked));

    t.reset_schedule();
    assert!(!t.is_scheduled());
    generate_schedule(&mut t, &config()).unwrap();
    assert_eq!(t.fixtures.len(), 12);
}

#[test]
fn knockout_schedule_stores_byes_and_stage() {
    let mut t = tournament_with_teams(6, TournamentFormat::Knockout);
    generate_schedule(&mut t, &config()).unwrap();
    assert_eq!(t.fixtures.len(), 2);
    assert_eq!(t.byes.len(), 2);
    assert_eq!(t.stage, Some(Stage::Preliminary));
}

#[test]
fn results_feed_the_table() {
    let mut t = tournament_with_teams(4, TournamentFormat::League);
    generate_schedule(&mut t, &config()).unwrap();
    let f0 = t.fixtures[0].clone();
    record_result(&mut t, 0, 2, 0).unwrap();
    // Re-recording overwrites.
    record_result(&mut t, 0, 3, 1).unwrap();
    set_match_status(&mut t, 1, MatchStatus::Live).unwrap();
    assert_eq!(
        record_result(&mut t, 99, 1, 1),
        Err(TournamentError::FixtureNotFound(99))
    );

    refresh_standings(&mut t);
    assert_eq!(t.standings.len(), 4);
    let top = &t.standings[0];
    assert_eq!(top.team_id, f0.home);
    assert_eq!((top.played, top.won, top.goals_for, top.goals_against), (1, 1, 3, 1));
    let played: u32 = t.standings.iter().map(|r| r.played).sum();
    assert_eq!(played, 2);

    let before = t.standings.clone();
    refresh_standings(&mut t);
    assert_eq!(t.standings, before);
}

#[test]
fn status_change_keeps_recorded_score() {
    let mut t = tournament_with_teams(2, TournamentFormat::League);
    generate_schedule(&mut t, &config()).unwrap();
    record_result(&mut t, 0, 1, 0).unwrap();
    set_match_status(&mut t, 0, MatchStatus::Live).unwrap();
    let r = &t.results[&0];
    assert_eq!((r.home_score, r.away_score, r.status), (1, 0, MatchStatus::Live));
    refresh_standings(&mut t);
    assert!(t.standings.iter().all(|r| r.played == 0));
}

#[test]
fn custom_points_apply_on_refresh() {
    let mut t = tournament_with_teams(2, TournamentFormat::League);
    t.set_points(PointsTable { win: 2, draw: 1 });
    generate_schedule(&mut t, &config()).unwrap();
    record_result(&mut t, 0, 1, 0).unwrap();
    record_result(&mut t, 1, 1, 1).unwrap();
    refresh_standings(&mut t);
    let points: Vec<u32> = t.standings.iter().map(|r| r.points).collect();
    assert_eq!(points, vec![3, 1]);
}

#[test]
fn finishing_without_a_score_is_rejected() {
    let mut t = tournament_with_teams(2, TournamentFormat::League);
    generate_schedule(&mut t, &config()).unwrap();
    assert_eq!(
        set_match_status(&mut t, 0, MatchStatus::Finished),
        Err(TournamentError::ScoreNotRecorded(0))
    );
    assert!(t.results.is_empty());

    set_match_status(&mut t, 0, MatchStatus::Live).unwrap();
    assert_eq!(
        set_match_status(&mut t, 0, MatchStatus::Finished),
        Err(TournamentError::ScoreNotRecorded(0))
    );

    refresh_standings(&mut t);
    assert!(t.standings.iter().all(|r| r.played == 0));

    record_result(&mut t, 0, 2, 2).unwrap();
    refresh_standings(&mut t);
    assert!(t.standings.iter().all(|r| r.drawn == 1));
}
