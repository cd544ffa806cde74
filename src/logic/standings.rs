//! League table: fold finished results into one row per team, then rank.

use crate::models::{MatchResult, Outcome, PointsTable, StandingRow, TeamId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranking order: points descending, then goal difference descending.
/// Anything still level compares equal and keeps its existing order under a stable sort.
pub fn compare_rows(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
}

/// Rebuild the whole table from `results`.
///
/// Every team in `teams` gets a row even with no matches. Teams that only show
/// up in results are appended in the order they are first seen. Results that are
/// not finished are ignored. The output depends only on the inputs, so calling
/// this again on the same data gives the same rows.
pub fn recompute_standings(
    teams: &[TeamId],
    results: &[MatchResult],
    points: PointsTable,
) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<TeamId, usize> = HashMap::with_capacity(teams.len());
    for &id in teams {
        row_index(&mut rows, &mut index, id, false);
    }

    for result in results.iter().filter(|r| r.is_completed()) {
        let (home, away) = (result.fixture.home, result.fixture.away);
        if home == away {
            log::warn!("Skipping result where team {} plays itself", home);
            continue;
        }
        let h = row_index(&mut rows, &mut index, home, true);
        let a = row_index(&mut rows, &mut index, away, true);

        rows[h].add_goals(result.home_score, result.away_score);
        rows[a].add_goals(result.away_score, result.home_score);
        match result.outcome() {
            Outcome::HomeWin => {
                rows[h].add_win(&points);
                rows[a].add_loss();
            }
            Outcome::AwayWin => {
                rows[a].add_win(&points);
                rows[h].add_loss();
            }
            Outcome::Draw => {
                rows[h].add_draw(&points);
                rows[a].add_draw(&points);
            }
        }
    }

    rows.sort_by(compare_rows);
    rows
}

/// Position of `id` in `rows`, inserting an empty row first if needed.
fn row_index(
    rows: &mut Vec<StandingRow>,
    index: &mut HashMap<TeamId, usize>,
    id: TeamId,
    from_result: bool,
) -> usize {
    *index.entry(id).or_insert_with(|| {
        if from_result {
            log::warn!("Team {} has results but is not on the roster; adding it", id);
        }
        rows.push(StandingRow::new(id));
        rows.len() - 1
    })
}
