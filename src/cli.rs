use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::stats::Period;

#[derive(Parser, Debug)]
#[command(author, version, about = "goal_tally - scorer leaderboards and records")]
pub struct Cli {
    /// Path to the dataset JSON (defaults to $GOAL_TALLY_DATA or data/dataset.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Reference date for year/month periods, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Print the view as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Leaderboard preview and the first few records
    Home,
    /// Top scorers for a period
    Leaderboard {
        #[arg(short, long, value_enum, default_value_t = Period::All)]
        period: Period,
        /// Maximum number of entries (unlimited when omitted)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Every player ranked by goals for a period
    Players {
        #[arg(short, long, value_enum, default_value_t = Period::All)]
        period: Period,
    },
    /// Profile of a single player
    Player {
        /// Player id
        id: String,
    },
    /// Static records plus the longest scoring streak
    Records,
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_players_with_period() {
        let cli = Cli::parse_from(["goal_tally", "players", "--period", "month"]);
        assert_eq!(cli.command, Command::Players { period: Period::Month });
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "goal_tally",
            "leaderboard",
            "--limit",
            "3",
            "--today",
            "2024-06-15",
            "--json",
        ]);

        assert_eq!(
            cli.command,
            Command::Leaderboard {
                period: Period::All,
                limit: Some(3)
            }
        );
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_unknown_period() {
        let result = Cli::try_parse_from(["goal_tally", "players", "--period", "week"]);
        assert!(result.is_err());
    }
}
