//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical record stored in the catalog file.
//! - Parse caller-provided status text into a typed lending state.
//!
//! # Invariants
//! - `id` is positive and unique within one catalog.
//! - New ids are derived from current contents as `max(id) + 1`, so the
//!   highest id is reused after that record is deleted.
//! - Legacy status spellings are accepted on input but never written back.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Catalog-local identifier of a book record.
pub type BookId = u64;

/// Lending state of one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// On the shelf.
    #[default]
    #[serde(alias = "в наличии")]
    Available,
    /// Lent out.
    #[serde(alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    /// Canonical wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked_out",
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = BookValidationError;

    /// Parses caller-provided status text.
    ///
    /// Only the exact canonical values are accepted; legacy spellings are
    /// honored when reading stored files, not here.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "available" => Ok(Self::Available),
            "checked_out" => Ok(Self::CheckedOut),
            _ => Err(BookValidationError::InvalidStatus(value.to_string())),
        }
    }
}

/// Validation failures for book input and persisted book data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Status text is neither `available` nor `checked_out`.
    InvalidStatus(String),
    /// Search field name is not one of `title`, `author`, `year`.
    InvalidField(String),
    /// Id `0` is reserved; catalogs start numbering at 1.
    ZeroId,
    /// Two records share one id.
    DuplicateId(BookId),
    /// The largest id in the catalog leaves no room for another one.
    IdExhausted(BookId),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(value) => write!(
                f,
                "invalid status `{value}`; expected `available` or `checked_out`"
            ),
            Self::InvalidField(value) => write!(
                f,
                "invalid search field `{value}`; expected `title`, `author` or `year`"
            ),
            Self::ZeroId => write!(f, "book id must be positive"),
            Self::DuplicateId(id) => write!(f, "duplicate book id {id}"),
            Self::IdExhausted(id) => write!(f, "no book id available after {id}"),
        }
    }
}

impl Error for BookValidationError {}

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Free text; not checked to be numeric.
    pub year: String,
    pub status: BookStatus,
}

impl Book {
    /// Creates an available book with the given id.
    ///
    /// Title, author and year are stored as given, blank values included.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status: BookStatus::Available,
        }
    }

    /// Checks record-local invariants.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.id == 0 {
            return Err(BookValidationError::ZeroId);
        }
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} \"{}\" by {} ({}) [{}]",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Returns the id the next added book receives.
///
/// Recomputed from current contents: `1` for an empty catalog, otherwise the
/// largest existing id plus one.
///
/// Returns `BookValidationError::IdExhausted` when the largest id is
/// `BookId::MAX`.
pub fn next_book_id(books: &[Book]) -> Result<BookId, BookValidationError> {
    let max_id = books.iter().map(|book| book.id).max().unwrap_or(0);
    max_id
        .checked_add(1)
        .ok_or(BookValidationError::IdExhausted(max_id))
}

/// Checks every record and rejects repeated ids.
pub fn validate_catalog(books: &[Book]) -> Result<(), BookValidationError> {
    let mut seen = std::collections::HashSet::with_capacity(books.len());
    for book in books {
        book.validate()?;
        if !seen.insert(book.id) {
            return Err(BookValidationError::DuplicateId(book.id));
        }
    }
    Ok(())
}
