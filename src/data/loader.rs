use std::collections::HashSet;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{Catalogue, Record};
use super::normalize::{normalize_csv, normalize_json, CsvRecord};
use crate::error::{CatalogueError, NormalizeError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load at most `limit` records from a catalogue file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ raw record }, ...]` or `{ "results": [{ raw record }, ...] }`
/// * `.csv`  – one record per row, list columns semicolon-separated
///
/// Either every record normalises or the whole load fails.
pub fn load_file(path: &Path, limit: usize) -> Result<Catalogue, CatalogueError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_json(&text, limit)?
        }
        "csv" => {
            let reader = csv::Reader::from_path(path)?;
            parse_csv(reader, limit)?
        }
        other => return Err(CatalogueError::UnsupportedFormat(other.to_string())),
    };

    check_unique(&records)?;
    log::debug!("{} records read from {}", records.len(), path.display());
    Ok(Catalogue::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn parse_json(text: &str, limit: usize) -> Result<Vec<Record>, CatalogueError> {
    let root: JsonValue = serde_json::from_str(text)?;

    let raw = match &root {
        JsonValue::Array(items) => items,
        JsonValue::Object(obj) => obj
            .get("results")
            .and_then(JsonValue::as_array)
            .ok_or(CatalogueError::NotAList)?,
        _ => return Err(CatalogueError::NotAList),
    };

    raw.iter()
        .take(limit)
        .enumerate()
        .map(|(index, rec)| normalize_json(rec).map_err(|source| normalize_failure(index, source)))
        .collect()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

pub fn parse_csv<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    limit: usize,
) -> Result<Vec<Record>, CatalogueError> {
    reader
        .deserialize::<CsvRecord>()
        .take(limit)
        .enumerate()
        .map(|(index, row)| {
            let row = row?;
            normalize_csv(&row).map_err(|source| normalize_failure(index, source))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Batch checks
// ---------------------------------------------------------------------------

fn normalize_failure(index: usize, source: NormalizeError) -> CatalogueError {
    CatalogueError::Normalize { index, source }
}

/// Ids and names identify records within one fetch.
fn check_unique(records: &[Record]) -> Result<(), CatalogueError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for r in records {
        if !ids.insert(r.id) {
            return Err(CatalogueError::DuplicateId(r.id));
        }
        if !names.insert(r.name.as_str()) {
            return Err(CatalogueError::DuplicateName(r.name.clone()));
        }
    }
    Ok(())
}
