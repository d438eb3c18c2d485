pub mod aggregation;
pub mod period;
pub mod profile;
pub mod ranking;
pub mod records;

pub use aggregation::{aggregate_all, aggregate_player, tally_player, PeriodTotals, StreakTracker};
pub use period::Period;
pub use profile::{player_profile, PlayerProfile};
pub use ranking::{leaderboard, rank_players, LeaderboardEntry, Medal, RankedPlayer};
pub use records::{longest_streak_record, merge_records, resolve_holders, RecordRow};
