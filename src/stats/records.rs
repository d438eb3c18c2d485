use chrono::{Datelike, NaiveDate};
use log::debug;

use super::aggregation::tally_all;
use super::period::Period;
use crate::config::settings::StreakRecordSettings;
use crate::domain::{Dataset, Player, Record};

/// A record joined with its holder
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow<'a> {
    pub record: &'a Record,
    pub holder: &'a Player,
}

/// Synthetic record for the longest scoring streak in the whole match log.
///
/// Only the first player with the strictly greatest streak is credited, and
/// nothing is produced unless that streak reaches `settings.min_streak`.
pub fn longest_streak_record(
    dataset: &Dataset,
    today: NaiveDate,
    settings: &StreakRecordSettings,
) -> Option<Record> {
    let totals = tally_all(dataset, Period::All, today);

    let mut best: Option<(&Player, u32, Option<NaiveDate>)> = None;
    for (player, totals) in dataset.players().iter().zip(&totals) {
        let beats = best.is_none_or(|(_, streak, _)| totals.max_streak > streak);
        if beats {
            best = Some((player, totals.max_streak, totals.streak_ended));
        }
    }

    let (holder, streak, ended) = best.filter(|(_, streak, _)| *streak >= settings.min_streak)?;
    debug!("Longest scoring streak: {} games by {}", streak, holder.id);

    Some(Record {
        id: settings.id.clone(),
        title: settings.title.clone(),
        holder_id: holder.id.clone(),
        value: format!("{} Games", streak),
        date: ended.map(|d| d.year().to_string()).unwrap_or_default(),
    })
}

/// Static records followed by the synthetic streak record, if any.
///
/// No de-duplication against an existing streak record takes place.
pub fn merge_records(dataset: &Dataset, today: NaiveDate, settings: &StreakRecordSettings) -> Vec<Record> {
    let mut merged = dataset.records().to_vec();
    merged.extend(longest_streak_record(dataset, today, settings));
    merged
}

/// Pairs records with their holders, silently skipping unknown holder ids
pub fn resolve_holders<'a>(records: &'a [Record], dataset: &'a Dataset) -> Vec<RecordRow<'a>> {
    records
        .iter()
        .filter_map(|record| {
            dataset
                .player(&record.holder_id)
                .map(|holder| RecordRow { record, holder })
        })
        .collect()
}
