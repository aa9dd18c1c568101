//! Book repository contracts and implementations.
//!
//! # Responsibility
//! - Provide whole-catalog read/write over a JSON file.
//! - Provide an in-process double for service tests.
//!
//! # Invariants
//! - `save_all` replaces the full catalog; order is kept as given.

use crate::model::book::{validate_catalog, Book, BookId, BookValidationError};
use crate::storage::{load_catalog, save_catalog, StorageError};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name used when no explicit catalog path is given.
pub const DEFAULT_CATALOG_FILE: &str = "library.json";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for catalog persistence and lookups.
#[derive(Debug)]
pub enum RepoError {
    /// Fatal: catalog file could not be read, parsed or written.
    Storage(StorageError),
    /// Reported: no record has this id.
    NotFound(BookId),
    /// Reported: caller input was rejected before touching storage.
    Validation(BookValidationError),
}

impl RepoError {
    /// Returns whether the failure should abort rather than be shown to the
    /// user as a normal result.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for whole-catalog persistence.
pub trait BookRepository {
    fn load_all(&self) -> RepoResult<Vec<Book>>;
    fn save_all(&self, books: &[Book]) -> RepoResult<()>;
}

/// Catalog stored as one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses [`DEFAULT_CATALOG_FILE`] relative to the working directory.
    pub fn in_current_dir() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load_all(&self) -> RepoResult<Vec<Book>> {
        Ok(load_catalog(&self.path)?)
    }

    fn save_all(&self, books: &[Book]) -> RepoResult<()> {
        Ok(save_catalog(&self.path, books)?)
    }
}

/// Process-local catalog held in memory.
///
/// Hands out clones, so callers still follow load-mutate-save.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RefCell<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository, applying the same checks a file load would.
    pub fn with_books(books: Vec<Book>) -> RepoResult<Self> {
        validate_catalog(&books)?;
        Ok(Self {
            books: RefCell::new(books),
        })
    }
}

impl BookRepository for InMemoryBookRepository {
    fn load_all(&self) -> RepoResult<Vec<Book>> {
        Ok(self.books.borrow().clone())
    }

    fn save_all(&self, books: &[Book]) -> RepoResult<()> {
        *self.books.borrow_mut() = books.to_vec();
        Ok(())
    }
}

impl<R: BookRepository + ?Sized> BookRepository for &R {
    fn load_all(&self) -> RepoResult<Vec<Book>> {
        (**self).load_all()
    }

    fn save_all(&self, books: &[Book]) -> RepoResult<()> {
        (**self).save_all(books)
    }
}
