use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

use super::models::{
    HomeView, LeaderboardItem, LeaderboardView, PlayerDetail, PlayerListItem, PlayersView,
    RecordItem, RecordsView,
};
use crate::stats::Medal;

pub const EMPTY_LEADERBOARD: &str = "No goals scored in this period yet.";
pub const MISSING_RATIO: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Text goes through the view's `Display` impl, JSON through serde
pub fn render<V: Serialize + Display>(view: &V, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(view.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(view).context("Failed to serialize view"),
    }
}

fn tint(text: String, medal: Option<Medal>) -> ColoredString {
    match medal {
        Some(Medal::Gold) => text.yellow().bold(),
        Some(Medal::Silver) => text.bright_white().bold(),
        Some(Medal::Bronze) => text.truecolor(234, 88, 12).bold(),
        None => text.dimmed(),
    }
}

fn mvp_badge(mvp: bool) -> ColoredString {
    if mvp { " MVP".cyan().bold() } else { "".normal() }
}

fn format_win_rate(value: Option<u32>) -> String {
    value.map_or_else(|| MISSING_RATIO.to_string(), |v| format!("{}%", v))
}

fn write_leaderboard(f: &mut Formatter<'_>, entries: &[LeaderboardItem]) -> fmt::Result {
    if entries.is_empty() {
        return writeln!(f, "  {}", EMPTY_LEADERBOARD.dimmed());
    }

    for entry in entries {
        writeln!(
            f,
            "  {} {:<24} {:>4} goals  {:>4} matches",
            tint(format!("{:>2}", entry.position), entry.medal),
            entry.name,
            entry.period_goals,
            entry.matches
        )?;
    }
    Ok(())
}

fn write_records(f: &mut Formatter<'_>, records: &[RecordItem]) -> fmt::Result {
    if records.is_empty() {
        return writeln!(f, "  {}", "No records yet.".dimmed());
    }

    for record in records {
        writeln!(
            f,
            "  {:<28} {:<20} {:>10}  {}",
            record.title.bold(),
            record.holder_name,
            record.value.green(),
            record.date.dimmed()
        )?;
    }
    Ok(())
}

fn write_player(f: &mut Formatter<'_>, player: &PlayerListItem) -> fmt::Result {
    writeln!(
        f,
        "  {} {:<24}{:<4} {:>6} {:>8} {:>7} {:>10}",
        tint(format!("{:>3}", player.rank), player.medal),
        player.name,
        mvp_badge(player.mvp),
        player.period_goals,
        player.period_matches,
        player.max_streak,
        player.hat_tricks
    )
}

impl Display for LeaderboardView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", "Top Scorers".bold(), self.period.as_str())?;
        write_leaderboard(f, &self.entries)
    }
}

impl Display for HomeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.leaderboard)?;
        writeln!(f)?;
        writeln!(f, "{}", "Hall of Fame".bold())?;
        write_records(f, &self.records)
    }
}

impl Display for PlayersView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", "Players".bold(), self.period.as_str())?;
        writeln!(
            f,
            "  {:>3} {:<28} {:>6} {:>8} {:>7} {:>10}",
            "#", "Name", "Goals", "Matches", "Streak", "Hat-tricks"
        )?;
        for player in &self.players {
            write_player(f, player)?;
        }
        Ok(())
    }
}

impl Display for PlayerDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", self.name.bold(), mvp_badge(self.mvp))?;

        let rows = [
            ("Goals", self.goals.to_string()),
            ("Matches", self.matches.to_string()),
            ("Wins", self.wins.to_string()),
            ("Assists", self.assists.to_string()),
            ("Hat-tricks", self.hat_tricks.to_string()),
            (
                "Goals / match",
                self.goals_per_match.clone().unwrap_or_else(|| MISSING_RATIO.to_string()),
            ),
            ("Win rate", format_win_rate(self.win_rate)),
        ];
        for (label, value) in rows {
            writeln!(f, "  {:<14} {:>6}", label, value)?;
        }
        Ok(())
    }
}

impl Display for RecordsView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Hall of Fame".bold())?;
        write_records(f, &self.records)
    }
}
