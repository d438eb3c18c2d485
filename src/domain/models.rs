use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PlayerId = String;

/// Sentinel used by the data file for players without a picture
pub const NO_AVATAR: &str = "default";

/// Season-long counters kept alongside each player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub goals: u32,
    pub matches: u32,
    pub wins: u32,
    pub assists: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat_tricks: Option<u32>,
}

/// Picture reference for a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Avatar {
    None,
    Image(String),
}

impl Avatar {
    pub fn url(&self) -> Option<&str> {
        match self {
            Avatar::None => None,
            Avatar::Image(url) => Some(url),
        }
    }
}

impl From<String> for Avatar {
    fn from(value: String) -> Self {
        if value.is_empty() || value == NO_AVATAR {
            Avatar::None
        } else {
            Avatar::Image(value)
        }
    }
}

impl From<Avatar> for String {
    fn from(value: Avatar) -> Self {
        match value {
            Avatar::None => NO_AVATAR.to_string(),
            Avatar::Image(url) => url,
        }
    }
}

/// Player data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: Avatar,
    pub stats: PlayerStats,
}

/// A completed game. One `scorers` entry per goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub date: NaiveDate,
    pub scorers: Vec<PlayerId>,
}

impl Match {
    pub fn goals_by(&self, player_id: &str) -> u32 {
        self.scorers.iter().filter(|id| *id == player_id).count() as u32
    }
}

/// Named superlative held by a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub holder_id: PlayerId,
    pub value: String,
    pub date: String,
}

/// Raw document shape of the bundled data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetDocument {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_sentinel_maps_to_none() {
        let player: Player = serde_json::from_str(
            r#"{"id":"p1","name":"Ana","avatar":"default","stats":{"goals":1,"matches":2,"wins":0,"assists":0}}"#,
        )
        .unwrap();

        assert_eq!(player.avatar, Avatar::None);
        assert_eq!(player.stats.hat_tricks, None);
    }

    #[test]
    fn test_avatar_url_is_kept() {
        let avatar = Avatar::from("https://img.example/ana.png".to_string());
        assert_eq!(avatar.url(), Some("https://img.example/ana.png"));
        assert_eq!(String::from(Avatar::None), NO_AVATAR);
    }

    #[test]
    fn test_goals_by_counts_multiplicity() {
        let m = Match {
            id: "m1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            scorers: vec!["p1".into(), "p2".into(), "p1".into()],
        };

        assert_eq!(m.goals_by("p1"), 2);
        assert_eq!(m.goals_by("p2"), 1);
        assert_eq!(m.goals_by("p3"), 0);
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let record: Record = serde_json::from_str(
            r#"{"id":"r1","title":"Most Goals","holderId":"p1","value":"4 Goals","date":"2024-03-02"}"#,
        )
        .unwrap();

        assert_eq!(record.holder_id, "p1");
    }
}
