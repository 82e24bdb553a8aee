use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Normalisation failures (one raw record)
// ---------------------------------------------------------------------------

/// Why a single raw record could not be shaped into a [`Record`](crate::data::model::Record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' has the wrong shape: expected {expected}")]
    WrongShape {
        field: String,
        expected: &'static str,
    },
    #[error("id must be a positive integer, got {0}")]
    InvalidId(i64),
    #[error("name must not be empty")]
    EmptyName,
    #[error("record has no categories")]
    NoCategories,
    #[error("unknown metric '{0}'")]
    UnknownMetric(String),
    #[error("metric '{0}' appears more than once")]
    DuplicateMetric(&'static str),
    #[error("expected 6 metrics, got {0}")]
    MetricCount(usize),
}

impl NormalizeError {
    pub(crate) fn wrong_shape(field: impl Into<String>, expected: &'static str) -> Self {
        NormalizeError::WrongShape {
            field: field.into(),
            expected,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalogue failures (the whole batch)
// ---------------------------------------------------------------------------

/// A failure to produce the base record set. Any single malformed record
/// aborts the whole batch; callers never see a partial catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),
    #[error("parsing CSV")]
    Csv(#[from] csv::Error),
    #[error("expected a top-level array of records or an object with a 'results' array")]
    NotAList,
    #[error("record {index}: {source}")]
    Normalize {
        index: usize,
        #[source]
        source: NormalizeError,
    },
    #[error("duplicate record id {0}")]
    DuplicateId(u32),
    #[error("duplicate record name '{0}'")]
    DuplicateName(String),
}
