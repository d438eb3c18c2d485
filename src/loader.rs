use anyhow::Result;
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::{Dataset, DatasetDocument};
use crate::errors::{with_parse_context, with_read_context};

/// Load the players, matches and records document from a JSON file
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();

    let json = with_read_context(fs::read_to_string(path), path)?;
    let dataset = parse_dataset(&json, path)?;

    info!(
        "Loaded {} players, {} matches and {} records from {}",
        dataset.players().len(),
        dataset.matches().len(),
        dataset.records().len(),
        path.display()
    );
    dataset.report_data_quality();

    Ok(dataset)
}

/// Parse an in-memory document; `origin` only labels errors
pub fn parse_dataset(json: &str, origin: &Path) -> Result<Dataset> {
    let document: DatasetDocument = with_parse_context(serde_json::from_str(json), origin, json)?;
    Ok(Dataset::new(document))
}
