use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

use super::period::Period;
use crate::domain::{Dataset, Match, Player};

/// Per-player counters for one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    pub goals: u32,
    /// Matches scored in for `year`/`month`. The log holds no lineups, so
    /// non-scoring appearances cannot be counted.
    pub matches: u32,
    pub max_streak: u32,
    /// Date of the match that completed the longest streak
    pub streak_ended: Option<NaiveDate>,
}

/// Consecutive scoring run over date-ordered matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakTracker {
    current: u32,
    best: u32,
    best_ended: Option<NaiveDate>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, scored: bool, date: NaiveDate) {
        if !scored {
            self.current = 0;
            return;
        }

        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            self.best_ended = Some(date);
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn best_ended(&self) -> Option<NaiveDate> {
        self.best_ended
    }
}

#[derive(Debug, Clone, Default)]
struct Accumulator {
    goals: u32,
    matches: u32,
    streak: StreakTracker,
}

impl Accumulator {
    fn observe(&mut self, goals_in_match: u32, date: NaiveDate) {
        let scored = goals_in_match > 0;
        if scored {
            self.goals += goals_in_match;
            self.matches += 1;
        }
        self.streak.record(scored, date);
    }

    fn finish(self) -> PeriodTotals {
        PeriodTotals {
            goals: self.goals,
            matches: self.matches,
            max_streak: self.streak.best(),
            streak_ended: self.streak.best_ended(),
        }
    }
}

/// Folds a date-ascending match log into counters for one player id.
///
/// Only the log is consulted; the static season totals are not applied.
pub fn tally_player(matches: &[Match], player_id: &str, period: Period, today: NaiveDate) -> PeriodTotals {
    let mut acc = Accumulator::default();

    for m in included(matches, period, today) {
        acc.observe(m.goals_by(player_id), m.date);
    }

    acc.finish()
}

/// Counters for one player, with the static totals taking over for `Period::All`
pub fn aggregate_player(dataset: &Dataset, player: &Player, period: Period, today: NaiveDate) -> PeriodTotals {
    let totals = tally_player(dataset.matches(), &player.id, period, today);
    apply_static_totals(player, totals, period)
}

/// Counters for every roster player in roster order, in a single pass over the log
pub fn aggregate_all(dataset: &Dataset, period: Period, today: NaiveDate) -> Vec<PeriodTotals> {
    let logged = tally_all(dataset, period, today);

    dataset
        .players()
        .iter()
        .zip(logged)
        .map(|(player, totals)| apply_static_totals(player, totals, period))
        .collect()
}

/// Log-derived counters for every roster player, no static override
pub fn tally_all(dataset: &Dataset, period: Period, today: NaiveDate) -> Vec<PeriodTotals> {
    let players = dataset.players();
    let mut accumulators = vec![Accumulator::default(); players.len()];
    let mut observed = 0usize;

    for m in included(dataset.matches(), period, today) {
        let counts = count_scorers(m);
        for (acc, player) in accumulators.iter_mut().zip(players) {
            let goals = counts.get(player.id.as_str()).copied().unwrap_or(0);
            acc.observe(goals, m.date);
        }
        observed += 1;
    }

    debug!(
        "Aggregated {} matches for {} players (period: {})",
        observed,
        players.len(),
        period.as_str()
    );

    accumulators.into_iter().map(Accumulator::finish).collect()
}

fn apply_static_totals(player: &Player, totals: PeriodTotals, period: Period) -> PeriodTotals {
    match period {
        Period::All => PeriodTotals {
            goals: player.stats.goals,
            matches: player.stats.matches,
            ..totals
        },
        Period::Year | Period::Month => totals,
    }
}

fn included(matches: &[Match], period: Period, today: NaiveDate) -> impl Iterator<Item = &Match> {
    matches.iter().filter(move |m| period.includes(m.date, today))
}

fn count_scorers(m: &Match) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for scorer in &m.scorers {
        *counts.entry(scorer.as_str()).or_insert(0) += 1;
    }
    counts
}
