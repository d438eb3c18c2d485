use log::warn;
use std::collections::HashMap;

use super::models::{DatasetDocument, Match, Player, Record};

/// Read-only roster, match log and records, indexed by player id.
///
/// The match log is kept sorted ascending by `(date, id)` so every
/// computation sees the same order no matter how the file lists them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    players: Vec<Player>,
    matches: Vec<Match>,
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

/// References in the document that point at no known player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataQuality {
    pub dangling_scorers: usize,
    pub dangling_holders: usize,
    pub duplicate_players: usize,
}

impl DataQuality {
    pub fn is_clean(&self) -> bool {
        self.dangling_scorers == 0 && self.dangling_holders == 0 && self.duplicate_players == 0
    }
}

impl Dataset {
    pub fn new(document: DatasetDocument) -> Self {
        let DatasetDocument {
            players,
            mut matches,
            records,
        } = document;

        let index = build_index(&players);
        matches.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        Self {
            players,
            matches,
            records,
            index,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Matches in ascending date order
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.position(id).map(|idx| &self.players[idx])
    }

    /// Roster position of a player id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn data_quality(&self) -> DataQuality {
        let dangling_scorers = self
            .matches
            .iter()
            .flat_map(|m| m.scorers.iter())
            .filter(|id| !self.index.contains_key(id.as_str()))
            .count();

        let dangling_holders = self
            .records
            .iter()
            .filter(|r| !self.index.contains_key(r.holder_id.as_str()))
            .count();

        DataQuality {
            dangling_scorers,
            dangling_holders,
            duplicate_players: self.players.len() - self.index.len(),
        }
    }

    pub fn report_data_quality(&self) {
        let quality = self.data_quality();
        if quality.is_clean() {
            return;
        }

        if quality.dangling_scorers > 0 {
            warn!(
                "{} scorer entries reference unknown players and will be ignored",
                quality.dangling_scorers
            );
        }
        if quality.dangling_holders > 0 {
            warn!(
                "{} records reference unknown holders and will not be shown",
                quality.dangling_holders
            );
        }
        if quality.duplicate_players > 0 {
            warn!(
                "{} duplicate player ids found, first occurrence wins",
                quality.duplicate_players
            );
        }
    }
}

fn build_index(players: &[Player]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(players.len());
    for (idx, player) in players.iter().enumerate() {
        index.entry(player.id.clone()).or_insert(idx);
    }
    index
}
