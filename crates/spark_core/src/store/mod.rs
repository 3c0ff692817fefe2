//! Creator persistence.
//!
//! # Responsibility
//! - Define the load/save contract used by the registry service.
//! - Keep the JSON file format details inside the store boundary.
//!
//! # Invariants
//! - `save` always rewrites the full record list; there is no append/merge.
//! - `load` on a missing file seeds the default dataset before reading.
//! - Malformed persisted data is rejected, never silently repaired.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::model::creator::Creator;

mod json_file;
pub mod seed;
mod wire;

pub use json_file::JsonFileStore;
pub use wire::parse_iso_date;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for creator file persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem read/write/rename failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not a JSON array of creator objects.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A required field is absent from the record at `index`.
    MissingField { index: usize, field: &'static str },
    /// A date field does not parse as an ISO date.
    InvalidDate {
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid creator data in {}: {source}", path.display())
            }
            Self::MissingField { index, field } => {
                write!(f, "creator #{index} is missing required field `{field}`")
            }
            Self::InvalidDate {
                index,
                field,
                value,
            } => write!(
                f,
                "creator #{index} has invalid {field} `{value}`; expected YYYY-MM-DD"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::MissingField { .. } | Self::InvalidDate { .. } => None,
        }
    }
}

/// Load/save contract for the full creator list.
pub trait CreatorStore {
    /// Loads every creator in stored order.
    ///
    /// `today` fills in absent date fields.
    fn load(&self, today: NaiveDate) -> StoreResult<Vec<Creator>>;

    /// Replaces the stored list with `creators`.
    fn save(&self, creators: &[Creator]) -> StoreResult<()>;
}
