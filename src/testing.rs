use chrono::NaiveDate;

use crate::domain::{Avatar, DatasetDocument, Match, Player, PlayerStats, Record};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn player(id: &str, goals: u32, matches: u32) -> Player {
    Player {
        id: id.to_string(),
        name: format!("Player {id}"),
        avatar: Avatar::None,
        stats: PlayerStats {
            goals,
            matches,
            wins: 0,
            assists: 0,
            hat_tricks: None,
        },
    }
}

pub fn match_on(id: &str, day: &str, scorers: &[&str]) -> Match {
    Match {
        id: id.to_string(),
        date: date(day),
        scorers: scorers.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn record(id: &str, holder_id: &str) -> Record {
    Record {
        id: id.to_string(),
        title: format!("Record {id}"),
        holder_id: holder_id.to_string(),
        value: "1 Goal".to_string(),
        date: "2024".to_string(),
    }
}

pub fn document(players: Vec<Player>, matches: Vec<Match>, records: Vec<Record>) -> DatasetDocument {
    DatasetDocument {
        players,
        matches,
        records,
    }
}
