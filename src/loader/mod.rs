use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::{info, warn};

use crate::domain::models::RawGameRow;
use crate::errors::DatasetError;

/// Columns the cleaning stage needs. A dataset whose header lacks any of
/// them is structurally malformed.
const REQUIRED_COLUMNS: [&str; 5] = ["Result", "WhiteElo", "BlackElo", "Opening", "TimeControl"];

/// Raw rows read from disk plus a diagnostic count of rows the CSV decoder
/// could not make sense of.
#[derive(Debug)]
pub struct LoadedDataset {
    pub rows: Vec<RawGameRow>,
    pub unreadable_rows: u64,
}

/// Reads the games CSV into raw rows.
///
/// Individual rows that fail to decode are skipped and logged; only a file
/// that cannot be opened or whose header violates the schema is an error.
pub fn load_games(path: &Path) -> Result<LoadedDataset, DatasetError> {
    info!("Loading games from {}", path.display());

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| unreadable(path, source))?;

    validate_schema(&mut reader, path)?;

    let mut rows: Vec<RawGameRow> = Vec::new();
    let mut unreadable_rows = 0u64;

    for result in reader.deserialize() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                unreadable_rows += 1;
                warn!("Skipping unreadable row: {}", e);
            }
        }
    }

    if unreadable_rows > 0 {
        warn!("{} rows could not be decoded and were skipped", unreadable_rows);
    }

    info!("Loaded {} raw rows", rows.len());
    Ok(LoadedDataset {
        rows,
        unreadable_rows,
    })
}

fn validate_schema(reader: &mut csv::Reader<File>, path: &Path) -> Result<(), DatasetError> {
    let headers = reader
        .headers()
        .map_err(|source| unreadable(path, source))?;

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    Ok(())
}

fn unreadable(path: &Path, source: csv::Error) -> DatasetError {
    DatasetError::Unreadable {
        path: path.display().to_string(),
        source,
    }
}
