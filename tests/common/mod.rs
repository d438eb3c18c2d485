//! Fixtures shared by the integration suites

use chrono::NaiveDate;
use std::path::Path;

use goal_tally::domain::{Avatar, Dataset, DatasetDocument, Match, Player, PlayerStats, Record};
use goal_tally::loader::load_dataset;

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn player(id: &str, goals: u32, matches: u32) -> Player {
    Player {
        id: id.to_string(),
        name: id.to_uppercase(),
        avatar: Avatar::None,
        stats: PlayerStats {
            goals,
            matches,
            wins: matches / 2,
            assists: 0,
            hat_tricks: None,
        },
    }
}

pub fn game(id: &str, day: &str, scorers: &[&str]) -> Match {
    Match {
        id: id.to_string(),
        date: date(day),
        scorers: scorers.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn dataset(players: Vec<Player>, matches: Vec<Match>, records: Vec<Record>) -> Dataset {
    Dataset::new(DatasetDocument {
        players,
        matches,
        records,
    })
}

pub fn bundled() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/dataset.json");
    load_dataset(path).unwrap()
}
