//! Flat-file persistence for the catalog.
//!
//! # Responsibility
//! - Read the whole catalog from one JSON file into memory.
//! - Write the whole catalog back, replacing prior content.
//!
//! # Invariants
//! - A missing file is an empty catalog, never an error.
//! - A present but unreadable or malformed file is a fatal error.
//! - Writes are full overwrites; there is no atomic rename or locking.

use crate::model::book::BookValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub use json_file::{load_catalog, save_catalog};

pub type StorageResult<T> = Result<T, StorageError>;

/// Fatal storage failure. Callers should surface it and stop the operation.
#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidRecord {
        path: PathBuf,
        source: BookValidationError,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog file `{}` i/o failed: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "catalog file `{}` is malformed: {source}", path.display())
            }
            Self::InvalidRecord { path, source } => write!(
                f,
                "catalog file `{}` holds an invalid record: {source}",
                path.display()
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}
