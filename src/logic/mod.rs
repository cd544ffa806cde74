//! Tournament business logic: fixture generation, standings, lifecycle.

mod knockout;
mod lifecycle;
mod round_robin;
mod schedule;
mod standings;

pub use knockout::{bracket_size, generate_knockout_round, KnockoutRound};
pub use lifecycle::{generate_schedule, record_result, refresh_standings, set_match_status};
pub use round_robin::{first_leg_pairings, generate_round_robin};
pub use schedule::{shuffle_seeding, validate_competitors, KickoffClock, ScheduleError};
pub use standings::{compare_rows, recompute_standings};
