use crate::domain::{Dataset, Player, PlayerStats};

/// Derived figures shown on a player's profile.
///
/// Both ratios are `None` when the player has no recorded matches.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile<'a> {
    pub player: &'a Player,
    /// Goals per match with one decimal, e.g. `"1.3"`
    pub goals_per_match: Option<String>,
    pub win_rate: Option<u32>,
    pub mvp: bool,
}

pub fn player_profile<'a>(dataset: &'a Dataset, id: &str, mvp_goal_threshold: u32) -> Option<PlayerProfile<'a>> {
    let player = dataset.player(id)?;

    Some(PlayerProfile {
        player,
        goals_per_match: format_goals_per_match(&player.stats),
        win_rate: win_rate(&player.stats),
        mvp: is_mvp(&player.stats, mvp_goal_threshold),
    })
}

pub fn goals_per_match(stats: &PlayerStats) -> Option<f64> {
    ratio(stats.goals, stats.matches)
}

/// Goals per match at one decimal.
///
/// The stored `f64` is rounded to the nearest tenth, ties upwards. A tie is
/// only exact when `goals / matches` equals an odd number of twentieths that
/// is also a finite binary fraction (e.g. 5/4); `3/20` is stored just below
/// 0.15 and therefore rounds down.
pub fn format_goals_per_match(stats: &PlayerStats) -> Option<String> {
    let value = goals_per_match(stats)?;

    match exact_half_tenth(stats.goals, stats.matches) {
        Some(twentieths) => {
            let tenths = (twentieths + 1) / 2;
            Some(format!("{}.{}", tenths / 10, tenths % 10))
        }
        None => Some(format!("{:.1}", value)),
    }
}

/// Percentage of matches won, rounded to a whole number
pub fn win_rate(stats: &PlayerStats) -> Option<u32> {
    ratio(stats.wins, stats.matches).map(|r| (r * 100.0).round() as u32)
}

pub fn is_mvp(stats: &PlayerStats, threshold: u32) -> bool {
    stats.goals > threshold
}

/// `goals / matches` in twentieths when it lies exactly halfway between two tenths
fn exact_half_tenth(goals: u32, matches: u32) -> Option<u64> {
    let scaled = u64::from(goals) * 20;
    let matches = u64::from(matches);
    if matches == 0 || scaled % matches != 0 {
        return None;
    }

    let twentieths = scaled / matches;
    (twentieths % 2 == 1 && twentieths % 5 == 0).then_some(twentieths)
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}
