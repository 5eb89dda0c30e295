use thiserror::Error;

use crate::record::RawEntry;

/// Seed dataset, embedded at compile time. Consumed once at startup.
const CELEBRITIES_JSON: &str = include_str!("../data/celebrities.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse bundled dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse the bundled dataset into raw entries, preserving order.
pub fn bundled() -> Result<Vec<RawEntry>, DatasetError> {
    Ok(serde_json::from_str(CELEBRITIES_JSON)?)
}
