//! Integration tests for knockout round generation.

use chrono::{Duration, TimeZone, Utc};
use football_tournament::{
    generate_knockout_round, shuffle_seeding, ScheduleConfig, ScheduleError, Stage, TeamId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use uuid::Uuid;

fn teams(n: usize) -> Vec<TeamId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

fn config() -> ScheduleConfig {
    ScheduleConfig::starting_at(Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap())
}

#[test]
fn requires_at_least_two_teams() {
    assert!(matches!(
        generate_knockout_round(&teams(1), &config()),
        Err(ScheduleError::InvalidInput(_))
    ));
}

#[test]
fn rejects_duplicate_teams() {
    let mut t = teams(5);
    t[4] = t[0];
    assert_eq!(
        generate_knockout_round(&t, &config()),
        Err(ScheduleError::DuplicateCompetitor(t[0]))
    );
}

#[test]
fn rejects_schedule_past_the_date_range() {
    let mut cfg = config();
    cfg.interval_days = u32::MAX;
    assert!(matches!(
        generate_knockout_round(&teams(4), &cfg),
        Err(ScheduleError::InvalidInput(_))
    ));
}

#[test]
fn twelve_teams_four_matches_four_byes() {
    let t = teams(12);
    let round = generate_knockout_round(&t, &config()).unwrap();
    assert_eq!(round.bracket_size, 16);
    assert_eq!(round.fixtures.len(), 4);
    assert_eq!(round.byes, t[8..].to_vec());
    assert_eq!(round.stage, Stage::Preliminary);
    assert_eq!(round.survivors(), 8);
    // Consecutive pairing in input order.
    for (i, f) in round.fixtures.iter().enumerate() {
        assert_eq!(f.home, t[2 * i]);
        assert_eq!(f.away, t[2 * i + 1]);
        assert_eq!(f.round, 1);
        assert_eq!(f.stage, Some(Stage::Preliminary));
    }
}

#[test]
fn eight_teams_is_a_quarter_final() {
    let round = generate_knockout_round(&teams(8), &config()).unwrap();
    assert_eq!(round.fixtures.len(), 4);
    assert!(round.byes.is_empty());
    assert_eq!(round.stage, Stage::QuarterFinal);
    assert_eq!(round.stage_label(), "Quarter-final");
}

#[test]
fn exact_powers_of_two_use_the_size_table() {
    let cases = [
        (2, "Final"),
        (4, "Semi-final"),
        (8, "Quarter-final"),
        (16, "Round of 16"),
        (32, "Round of 32"),
        (64, "Round of 64"),
    ];
    for (n, label) in cases {
        let round = generate_knockout_round(&teams(n), &config()).unwrap();
        assert_eq!(round.stage_label(), label);
        assert_eq!(round.fixtures.len(), n / 2);
    }
}

#[test]
fn survivors_always_half_the_bracket() {
    for n in 2..=40 {
        let t = teams(n);
        let round = generate_knockout_round(&t, &config()).unwrap();
        assert_eq!(round.survivors(), round.bracket_size / 2, "n = {}", n);
        let mut everyone: HashSet<TeamId> = round.byes.iter().copied().collect();
        for f in &round.fixtures {
            assert!(everyone.insert(f.home));
            assert!(everyone.insert(f.away));
        }
        assert_eq!(everyone.len(), n);
    }
}

#[test]
fn three_teams_one_match_one_bye() {
    let t = teams(3);
    let round = generate_knockout_round(&t, &config()).unwrap();
    assert_eq!(round.bracket_size, 4);
    assert_eq!(round.fixtures.len(), 1);
    assert_eq!(round.byes, vec![t[2]]);
    assert_eq!(round.stage_label(), "Preliminary round");
}

#[test]
fn kickoffs_are_spread_over_days() {
    let mut cfg = config();
    cfg.matches_per_day = 3;
    let round = generate_knockout_round(&teams(16), &cfg).unwrap();
    let kickoffs: Vec<_> = round.fixtures.iter().map(|f| f.kickoff).collect();
    assert_eq!(kickoffs[0], cfg.start);
    assert_eq!(kickoffs[2], cfg.start);
    assert_eq!(kickoffs[3], cfg.start + Duration::days(1));
    assert_eq!(kickoffs[7], cfg.start + Duration::days(2));
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let original = teams(10);
    let mut a = original.clone();
    let mut b = original.clone();
    shuffle_seeding(&mut a, &mut StdRng::seed_from_u64(7));
    shuffle_seeding(&mut b, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    let round_a = generate_knockout_round(&a, &config()).unwrap();
    let round_b = generate_knockout_round(&b, &config()).unwrap();
    assert_eq!(round_a, round_b);
}
