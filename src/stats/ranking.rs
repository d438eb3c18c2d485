use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use super::aggregation::{aggregate_all, tally_all, PeriodTotals};
use super::period::Period;
use crate::domain::{Dataset, Player};

/// Podium tint for the top three positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// A roster player with the counters of the selected period and a dense rank
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer<'a> {
    pub player: &'a Player,
    pub rank: usize,
    pub period_goals: u32,
    pub period_matches: u32,
    pub max_streak: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry<'a> {
    pub player: &'a Player,
    pub position: usize,
    pub period_goals: u32,
}

impl LeaderboardEntry<'_> {
    pub fn medal(&self) -> Option<Medal> {
        Medal::for_position(self.position)
    }
}

/// Every roster player sorted by period goals, ranked `1..=N`.
///
/// Equal goal counts keep roster order.
pub fn rank_players(dataset: &Dataset, period: Period, today: NaiveDate) -> Vec<RankedPlayer<'_>> {
    let totals = aggregate_all(dataset, period, today);
    let ranked = assign_ranks(dataset.players(), totals);

    debug!("Ranked {} players for period {}", ranked.len(), period.as_str());
    ranked
}

/// Players who scored in the period, most goals first, at most `limit` entries.
///
/// Goals are counted from the match log for every period.
pub fn leaderboard(
    dataset: &Dataset,
    period: Period,
    today: NaiveDate,
    limit: Option<usize>,
) -> Vec<LeaderboardEntry<'_>> {
    let totals = tally_all(dataset, period, today);
    top_scorers(dataset.players(), &totals, limit)
}

pub fn assign_ranks(players: &[Player], totals: Vec<PeriodTotals>) -> Vec<RankedPlayer<'_>> {
    let mut rows: Vec<(&Player, PeriodTotals)> = players.iter().zip(totals).collect();
    rows.sort_by(|a, b| b.1.goals.cmp(&a.1.goals));

    rows.into_iter()
        .enumerate()
        .map(|(idx, (player, totals))| RankedPlayer {
            player,
            rank: idx + 1,
            period_goals: totals.goals,
            period_matches: totals.matches,
            max_streak: totals.max_streak,
        })
        .collect()
}

pub fn top_scorers<'a>(
    players: &'a [Player],
    totals: &[PeriodTotals],
    limit: Option<usize>,
) -> Vec<LeaderboardEntry<'a>> {
    let mut scorers: Vec<(&Player, u32)> = players
        .iter()
        .zip(totals)
        .map(|(player, totals)| (player, totals.goals))
        .filter(|(_, goals)| *goals > 0)
        .collect();
    scorers.sort_by(|a, b| b.1.cmp(&a.1));

    scorers
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(idx, (player, period_goals))| LeaderboardEntry {
            player,
            position: idx + 1,
            period_goals,
        })
        .collect()
}
