//! Command-line front end: reads a roster (and results) from CSV, prints JSON.
//! Run with: cargo run --bin schedule -- <round-robin|knockout|standings> roster.csv [results.csv]
//!
//! Roster CSV columns: `id,name` (blank id gets a fresh one).
//! Results CSV columns: `home,away,home_score,away_score[,status]` (status defaults to finished).
//! Scheduling and points are configured through the environment:
//! START_DATE (RFC 3339), INTERVAL_DAYS, MATCHES_PER_DAY, MATCH_DURATION,
//! WIN_POINTS, DRAW_POINTS, SHUFFLE (knockout draw, "1" or "true").

use chrono::{DateTime, Utc};
use football_tournament::{
    generate_knockout_round, generate_round_robin, recompute_standings, shuffle_seeding, Fixture,
    MatchResult, MatchStatus, PointsTable, ScheduleConfig, Team, TeamId,
};
use serde::Deserialize;
use std::error::Error;
use std::io::Write;
use uuid::Uuid;

#[derive(Deserialize)]
struct RosterRecord {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
}

#[derive(Deserialize)]
struct ResultRecord {
    home: TeamId,
    away: TeamId,
    home_score: u32,
    away_score: u32,
    #[serde(default)]
    status: Option<MatchStatus>,
}

/// Runtime settings read from the environment.
struct Settings {
    schedule: ScheduleConfig,
    points: PointsTable,
    shuffle: bool,
}

/// `key` parsed from the environment, or `default` when unset or malformed.
fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Settings {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        let start = match std::env::var("START_DATE") {
            Ok(s) => DateTime::parse_from_rfc3339(&s)?.with_timezone(&Utc),
            Err(_) => Utc::now(),
        };
        let mut schedule = ScheduleConfig::starting_at(start);
        schedule.interval_days = env_u32("INTERVAL_DAYS", schedule.interval_days);
        schedule.matches_per_day = env_u32("MATCHES_PER_DAY", schedule.matches_per_day);
        schedule.match_duration_minutes =
            env_u32("MATCH_DURATION", schedule.match_duration_minutes);
        let defaults = PointsTable::default();
        let shuffle = std::env::var("SHUFFLE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(Self {
            schedule,
            points: PointsTable {
                win: env_u32("WIN_POINTS", defaults.win),
                draw: env_u32("DRAW_POINTS", defaults.draw),
            },
            shuffle,
        })
    }
}

fn read_roster(path: &str) -> Result<Vec<Team>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut teams = Vec::new();
    for record in reader.deserialize() {
        let record: RosterRecord = record?;
        let mut team = Team::new(record.name.trim());
        if let Some(id) = record.id {
            team.id = id;
        }
        teams.push(team);
    }
    log::info!("Read {} teams from {}", teams.len(), path);
    Ok(teams)
}

fn read_results(path: &str, settings: &Settings) -> Result<Vec<MatchResult>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut results = Vec::new();
    for record in reader.deserialize() {
        let record: ResultRecord = record?;
        let fixture = Fixture {
            round: 0,
            leg: 1,
            home: record.home,
            away: record.away,
            kickoff: settings.schedule.start,
            duration_minutes: settings.schedule.match_duration_minutes,
            stage: None,
        };
        results.push(MatchResult {
            fixture,
            home_score: record.home_score,
            away_score: record.away_score,
            status: record.status.unwrap_or(MatchStatus::Finished),
        });
    }
    log::info!("Read {} results from {}", results.len(), path);
    Ok(results)
}

fn usage() -> String {
    "usage: schedule <round-robin|knockout|standings> <roster.csv> [results.csv]".to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, roster_path) = match (args.first(), args.get(1)) {
        (Some(c), Some(r)) => (c.as_str(), r.as_str()),
        _ => return Err(usage().into()),
    };
    let settings = Settings::from_env()?;
    let teams = read_roster(roster_path)?;
    let mut ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();

    let output = match command {
        "round-robin" => {
            let fixtures = generate_round_robin(&ids, &settings.schedule)?;
            serde_json::json!({ "teams": teams, "fixtures": fixtures })
        }
        "knockout" => {
            if settings.shuffle {
                shuffle_seeding(&mut ids, &mut rand::thread_rng());
            }
            let round = generate_knockout_round(&ids, &settings.schedule)?;
            serde_json::json!({
                "teams": teams,
                "stage": round.stage_label(),
                "bracket_size": round.bracket_size,
                "fixtures": round.fixtures,
                "byes": round.byes,
            })
        }
        "standings" => {
            let results_path = args.get(2).ok_or_else(usage)?;
            let results = read_results(results_path, &settings)?;
            let rows = recompute_standings(&ids, &results, settings.points);
            serde_json::json!({ "teams": teams, "standings": rows })
        }
        other => {
            log::error!("Unknown command '{}'", other);
            return Err(usage().into());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &output)?;
    writeln!(out)?;
    Ok(())
}
