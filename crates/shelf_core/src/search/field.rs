//! Field-scoped substring search.
//!
//! # Invariants
//! - Only `title`, `author` and `year` are searchable; anything else is
//!   rejected while parsing, before a catalog is loaded.
//! - Matching is case-insensitive and keeps catalog order.
//! - An empty query matches every record.

use crate::model::book::{Book, BookValidationError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Book field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [Self::Title, Self::Author, Self::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }

    /// Reads this field from `book`.
    pub fn value(self, book: &Book) -> &str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
            Self::Year => &book.year,
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = BookValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(BookValidationError::InvalidField(value.to_string())),
        }
    }
}

/// Search input for [`filter_books`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    field: SearchField,
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, field: SearchField) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self {
            text,
            field,
            needle,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    /// Returns whether the queried field of `book` contains the query text.
    pub fn matches(&self, book: &Book) -> bool {
        self.field
            .value(book)
            .to_lowercase()
            .contains(self.needle.as_str())
    }
}

/// Keeps the records matching `query`, in their original order.
pub fn filter_books(books: Vec<Book>, query: &SearchQuery) -> Vec<Book> {
    books.into_iter().filter(|book| query.matches(book)).collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_books, SearchField, SearchQuery};
    use crate::model::book::{Book, BookValidationError};

    fn sample() -> Vec<Book> {
        vec![
            Book::new(1, "The Hobbit", "J.R.R. Tolkien", "1937"),
            Book::new(2, "1984", "George Orwell", "1949"),
            Book::new(3, "Война и мир", "Лев Толстой", "1869"),
        ]
    }

    #[test]
    fn parses_known_fields() {
        for field in SearchField::ALL {
            assert_eq!(field.as_str().parse::<SearchField>().unwrap(), field);
        }
        assert_eq!(" Author ".parse::<SearchField>().unwrap(), SearchField::Author);
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "status".parse::<SearchField>().unwrap_err();
        assert_eq!(err, BookValidationError::InvalidField("status".to_string()));
    }

    #[test]
    fn matching_ignores_case() {
        let hits = filter_books(sample(), &SearchQuery::new("HOBBIT", SearchField::Title));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn matching_ignores_case_for_cyrillic() {
        let hits = filter_books(sample(), &SearchQuery::new("ТОЛСТОЙ", SearchField::Author));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn field_scope_is_respected() {
        let by_year = filter_books(sample(), &SearchQuery::new("1984", SearchField::Year));
        assert!(by_year.is_empty());

        let by_title = filter_books(sample(), &SearchQuery::new("1984", SearchField::Title));
        assert_eq!(by_title.len(), 1);
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let hits = filter_books(sample(), &SearchQuery::new("", SearchField::Year));
        let ids: Vec<u64> = hits.iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
