use serde::Serialize;

use crate::domain::Record;
use crate::stats::{LeaderboardEntry, Medal, Period, PlayerProfile, RankedPlayer, RecordRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
    pub position: usize,
    pub player_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub period_goals: u32,
    pub matches: u32,
    pub medal: Option<Medal>,
}

impl From<&LeaderboardEntry<'_>> for LeaderboardItem {
    fn from(entry: &LeaderboardEntry<'_>) -> Self {
        Self {
            position: entry.position,
            player_id: entry.player.id.clone(),
            name: entry.player.name.clone(),
            avatar_url: entry.player.avatar.url().map(str::to_string),
            period_goals: entry.period_goals,
            matches: entry.player.stats.matches,
            medal: entry.medal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListItem {
    pub rank: usize,
    pub player_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub period_goals: u32,
    pub period_matches: u32,
    pub max_streak: u32,
    pub wins: u32,
    pub assists: u32,
    pub hat_tricks: u32,
    pub medal: Option<Medal>,
    pub mvp: bool,
}

impl PlayerListItem {
    pub fn new(ranked: &RankedPlayer<'_>, mvp: bool) -> Self {
        Self {
            rank: ranked.rank,
            player_id: ranked.player.id.clone(),
            name: ranked.player.name.clone(),
            avatar_url: ranked.player.avatar.url().map(str::to_string),
            period_goals: ranked.period_goals,
            period_matches: ranked.period_matches,
            max_streak: ranked.max_streak,
            wins: ranked.player.stats.wins,
            assists: ranked.player.stats.assists,
            hat_tricks: ranked.player.stats.hat_tricks.unwrap_or(0),
            medal: Medal::for_position(ranked.rank),
            mvp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub player_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub goals: u32,
    pub matches: u32,
    pub wins: u32,
    pub assists: u32,
    pub hat_tricks: u32,
    pub goals_per_match: Option<String>,
    pub win_rate: Option<u32>,
    pub mvp: bool,
}

impl From<&PlayerProfile<'_>> for PlayerDetail {
    fn from(profile: &PlayerProfile<'_>) -> Self {
        let player = profile.player;
        Self {
            player_id: player.id.clone(),
            name: player.name.clone(),
            avatar_url: player.avatar.url().map(str::to_string),
            goals: player.stats.goals,
            matches: player.stats.matches,
            wins: player.stats.wins,
            assists: player.stats.assists,
            hat_tricks: player.stats.hat_tricks.unwrap_or(0),
            goals_per_match: profile.goals_per_match.clone(),
            win_rate: profile.win_rate,
            mvp: profile.mvp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordItem {
    pub id: String,
    pub title: String,
    pub value: String,
    pub date: String,
    pub holder_id: String,
    pub holder_name: String,
    pub holder_avatar_url: Option<String>,
}

impl From<&RecordRow<'_>> for RecordItem {
    fn from(row: &RecordRow<'_>) -> Self {
        let Record {
            id,
            title,
            value,
            date,
            holder_id,
        } = row.record;

        Self {
            id: id.clone(),
            title: title.clone(),
            value: value.clone(),
            date: date.clone(),
            holder_id: holder_id.clone(),
            holder_name: row.holder.name.clone(),
            holder_avatar_url: row.holder.avatar.url().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub period: Period,
    pub entries: Vec<LeaderboardItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub leaderboard: LeaderboardView,
    pub records: Vec<RecordItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersView {
    pub period: Period,
    pub players: Vec<PlayerListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsView {
    pub records: Vec<RecordItem>,
}
