//! JSON array codec for the catalog file.
//!
//! # Responsibility
//! - Decode and validate the stored array of book objects.
//! - Encode books as human-reviewable UTF-8 JSON.
//!
//! # Invariants
//! - Output is pretty-printed with 4-space indentation and a trailing newline.
//! - Non-ASCII text is written literally, never `\u` escaped.
//! - Record order on disk equals order in memory.

use super::{StorageError, StorageResult};
use crate::model::book::{validate_catalog, Book};
use log::{error, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Indentation unit used for the catalog file.
const CATALOG_INDENT: &[u8] = b"    ";

/// Loads the full catalog stored at `path`.
///
/// # Errors
/// - `StorageError::Io` when the file exists but cannot be read.
/// - `StorageError::Malformed` when content is not a JSON array of books.
/// - `StorageError::InvalidRecord` when a record has id `0` or ids repeat.
pub fn load_catalog(path: &Path) -> StorageResult<Vec<Book>> {
    let started_at = Instant::now();

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("event=catalog_load module=storage status=ok books=0 file_present=false");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=catalog_load module=storage status=error error_code=read_failed error={}",
                err
            );
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let books: Vec<Book> = serde_json::from_str(&text).map_err(|err| {
        error!(
            "event=catalog_load module=storage status=error error_code=malformed line={} column={}",
            err.line(),
            err.column()
        );
        StorageError::Malformed {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    validate_catalog(&books).map_err(|err| {
        error!(
            "event=catalog_load module=storage status=error error_code=invalid_record error={}",
            err
        );
        StorageError::InvalidRecord {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    info!(
        "event=catalog_load module=storage status=ok books={} duration_ms={}",
        books.len(),
        started_at.elapsed().as_millis()
    );
    Ok(books)
}

/// Overwrites the catalog file at `path` with `books`.
///
/// # Side effects
/// - Truncates and rewrites the file; a crash mid-write can corrupt it.
pub fn save_catalog(path: &Path, books: &[Book]) -> StorageResult<()> {
    let started_at = Instant::now();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(CATALOG_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    books
        .serialize(&mut serializer)
        .map_err(|err| StorageError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(err),
        })?;
    buf.push(b'\n');

    if let Err(err) = std::fs::write(path, &buf) {
        error!(
            "event=catalog_save module=storage status=error error_code=write_failed error={}",
            err
        );
        return Err(StorageError::Io {
            path: path.to_path_buf(),
            source: err,
        });
    }

    info!(
        "event=catalog_save module=storage status=ok books={} bytes={} duration_ms={}",
        books.len(),
        buf.len(),
        started_at.elapsed().as_millis()
    );
    Ok(())
}
