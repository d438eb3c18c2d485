use std::path::PathBuf;

pub const DATA_PATH_ENV: &str = "GOAL_TALLY_DATA";
pub const DEFAULT_DATA_PATH: &str = "data/dataset.json";

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DataSettings {
    pub fn from_env() -> Self {
        std::env::var(DATA_PATH_ENV)
            .map(|path| Self { path: path.into() })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub preview_limit: usize,
    pub record_preview_limit: usize,
    pub mvp_goal_threshold: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            preview_limit: 3,
            record_preview_limit: 3,
            mvp_goal_threshold: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StreakRecordSettings {
    pub id: String,
    pub title: String,
    pub min_streak: u32,
}

impl Default for StreakRecordSettings {
    fn default() -> Self {
        Self {
            id: "streak-1".to_string(),
            title: "Longest Scoring Streak".to_string(),
            min_streak: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub data: DataSettings,
    pub views: ViewSettings,
    pub streak_record: StreakRecordSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::from_env(),
            views: ViewSettings::default(),
            streak_record: StreakRecordSettings::default(),
        }
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data.path = path;
        }
        self
    }
}
