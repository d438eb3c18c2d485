use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Time window applied to the match log before aggregation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    All,
    Year,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::All, Period::Year, Period::Month];

    /// Whether a match played on `match_date` counts for this period as seen from `today`
    pub fn includes(&self, match_date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Year => match_date.year() == today.year(),
            Period::Month => match_date.year() == today.year() && match_date.month() == today.month(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Period::All => "all",
            Period::Year => "year",
            Period::Month => "month",
        }
    }
}
