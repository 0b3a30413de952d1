use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ValidationError;

/// Failure to read a catalog or write a schedule. Callers only ever see
/// "cannot load" or "cannot save"; the underlying cause is kept as the source.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Cannot find file.")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("The file cannot be saved.")]
    Save {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PersistenceError {
    pub fn path(&self) -> &Path {
        match self {
            PersistenceError::Load { path, .. } | PersistenceError::Save { path, .. } => path,
        }
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Why a single catalog line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 6 fields for an arranged course or 8 otherwise, found {0}")]
    FieldCount(usize),
    #[error("{field} must be an integer (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub mod file;

pub use file::{parse_course_record, read_course_records, write_activity_records};
