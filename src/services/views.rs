use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::debug;

use crate::config::settings::AppConfig;
use crate::domain::Dataset;
use crate::errors::player_not_found;
use crate::loader;
use crate::stats::{self, Period};
use crate::views::{
    HomeView, LeaderboardItem, LeaderboardView, PlayerDetail, PlayerListItem, PlayersView,
    RecordItem, RecordsView,
};

/// Builds the view models of every screen from one loaded dataset
pub struct ViewService {
    config: AppConfig,
    dataset: Dataset,
    today: NaiveDate,
}

impl ViewService {
    pub fn new(config: AppConfig, dataset: Dataset, today: NaiveDate) -> Self {
        Self {
            config,
            dataset,
            today,
        }
    }

    /// Load the dataset named by the config
    pub fn load(config: AppConfig, today: NaiveDate) -> Result<Self> {
        let dataset = loader::load_dataset(&config.data.path)?;
        Ok(Self::new(config, dataset, today))
    }

    pub fn home(&self) -> HomeView {
        let leaderboard = self.leaderboard(Period::All, Some(self.config.views.preview_limit));

        let preview_len = self.config.views.record_preview_limit.min(self.dataset.records().len());
        let preview = &self.dataset.records()[..preview_len];
        let records = stats::resolve_holders(preview, &self.dataset)
            .iter()
            .map(RecordItem::from)
            .collect();

        HomeView { leaderboard, records }
    }

    pub fn leaderboard(&self, period: Period, limit: Option<usize>) -> LeaderboardView {
        let entries: Vec<LeaderboardItem> = stats::leaderboard(&self.dataset, period, self.today, limit)
            .iter()
            .map(LeaderboardItem::from)
            .collect();

        debug!("Leaderboard ({}) has {} entries", period.as_str(), entries.len());
        LeaderboardView { period, entries }
    }

    pub fn players(&self, period: Period) -> PlayersView {
        let threshold = self.config.views.mvp_goal_threshold;
        let players = stats::rank_players(&self.dataset, period, self.today)
            .iter()
            .map(|ranked| {
                PlayerListItem::new(ranked, stats::profile::is_mvp(&ranked.player.stats, threshold))
            })
            .collect();

        PlayersView { period, players }
    }

    pub fn player(&self, id: &str) -> Result<PlayerDetail> {
        stats::player_profile(&self.dataset, id, self.config.views.mvp_goal_threshold)
            .map(|profile| PlayerDetail::from(&profile))
            .ok_or_else(|| anyhow!(player_not_found(id)))
    }

    pub fn records(&self) -> RecordsView {
        let merged = stats::merge_records(&self.dataset, self.today, &self.config.streak_record);
        let records = stats::resolve_holders(&merged, &self.dataset)
            .iter()
            .map(RecordItem::from)
            .collect();

        RecordsView { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, document, match_on, player, record};

    fn service() -> ViewService {
        let mut veteran = player("p2", 25, 20);
        veteran.stats.wins = 11;
        veteran.stats.assists = 6;
        veteran.stats.hat_tricks = Some(2);

        let dataset = Dataset::new(document(
            vec![player("p1", 12, 10), veteran, player("p3", 0, 0)],
            vec![
                match_on("m1", "2024-05-01", &["p1"]),
                match_on("m2", "2024-05-08", &["p1", "p2"]),
                match_on("m3", "2024-05-15", &["p1"]),
            ],
            vec![
                record("r1", "p2"),
                record("r2", "ghost"),
                record("r3", "p1"),
                record("r4", "p1"),
            ],
        ));
        ViewService::new(AppConfig::default(), dataset, date("2024-05-20"))
    }

    #[test]
    fn test_home_previews_three_static_records() {
        let home = service().home();

        let ids: Vec<&str> = home.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
        assert!(home.leaderboard.entries.len() <= 3);
        assert_eq!(home.leaderboard.period, Period::All);
    }

    #[test]
    fn test_players_view_ranks_everyone() {
        let view = service().players(Period::All);

        let ids: Vec<&str> = view.players.iter().map(|p| p.player_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);
        assert!(view.players[0].mvp);
        assert_eq!(view.players[1].max_streak, 3);
    }

    #[test]
    fn test_players_view_carries_season_stats() {
        let view = service().players(Period::Year);
        let json = serde_json::to_value(&view).unwrap();

        let leader = &json["players"][0];
        assert_eq!(leader["playerId"], "p1");
        assert_eq!(leader["hatTricks"], 0);

        let p2 = json["players"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["playerId"] == "p2")
            .unwrap();
        assert_eq!(p2["hatTricks"], 2);
        assert_eq!(p2["wins"], 11);
        assert_eq!(p2["assists"], 6);
    }

    #[test]
    fn test_profile_goals_per_match_is_one_decimal() {
        let detail = service().player("p2").unwrap();
        assert_eq!(detail.goals_per_match.as_deref(), Some("1.3"));
        assert_eq!(detail.win_rate, Some(55));
    }

    #[test]
    fn test_unknown_profile_is_not_found() {
        let err = service().player("nobody").unwrap_err();
        assert_eq!(err.to_string(), player_not_found("nobody"));
    }

    #[test]
    fn test_zero_match_profile_has_no_ratios() {
        let detail = service().player("p3").unwrap();
        assert_eq!(detail.goals_per_match, None);
        assert_eq!(detail.win_rate, None);
    }

    #[test]
    fn test_records_view_appends_streak() {
        let view = service().records();

        let last = view.records.last().unwrap();
        assert_eq!(last.id, "streak-1");
        assert_eq!(last.holder_name, "Player p1");
        assert_eq!(last.value, "3 Games");
        assert_eq!(view.records.len(), 4);
    }
}
