//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide add/delete/search/list/status-change entry points.
//! - Assign ids from current catalog contents.
//!
//! # Invariants
//! - Every call loads the catalog afresh; nothing is cached between calls.
//! - Mutations save the full catalog only when something changed.
//! - Caller input is validated before storage is read.
//! - Load-mutate-save is not atomic; concurrent writers lose updates.

use crate::model::book::{next_book_id, Book, BookId, BookStatus};
use crate::repo::book_repo::{BookRepository, JsonFileBookRepository, RepoError, RepoResult};
use crate::search::field::{filter_books, SearchField, SearchQuery};
use log::{info, warn};
use std::path::PathBuf;

/// Catalog service facade over a repository implementation.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl CatalogService<JsonFileBookRepository> {
    /// Opens a catalog stored at `path`. The file need not exist yet.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileBookRepository::new(path))
    }

    /// Opens `library.json` in the current working directory.
    pub fn open_default() -> Self {
        Self::new(JsonFileBookRepository::in_current_dir())
    }
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Reads the whole catalog in stored order.
    pub fn load(&self) -> RepoResult<Vec<Book>> {
        self.repo.load_all()
    }

    /// Replaces the whole catalog.
    pub fn save(&self, books: &[Book]) -> RepoResult<()> {
        self.repo.save_all(books)
    }

    /// Appends a new available book and returns its id.
    ///
    /// # Contract
    /// - Id is `max(existing) + 1`, or `1` for an empty catalog.
    /// - Title, author and year are stored verbatim, blanks included.
    /// - Returns `RepoError::Validation` without saving when no id is left.
    pub fn add_book(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> RepoResult<BookId> {
        let mut books = self.repo.load_all()?;
        let id = next_book_id(&books).map_err(|err| {
            warn!("event=book_add module=service status=id_exhausted");
            RepoError::from(err)
        })?;
        books.push(Book::new(id, title, author, year));
        self.repo.save_all(&books)?;

        info!(
            "event=book_add module=service status=ok id={} books={}",
            id,
            books.len()
        );
        Ok(id)
    }

    /// Removes the book with `id` and returns it.
    ///
    /// Returns `RepoError::NotFound` without saving when no record matches.
    pub fn delete_book(&self, id: BookId) -> RepoResult<Book> {
        let mut books = self.repo.load_all()?;
        let Some(index) = books.iter().position(|book| book.id == id) else {
            warn!("event=book_delete module=service status=not_found id={}", id);
            return Err(RepoError::NotFound(id));
        };

        let removed = books.remove(index);
        self.repo.save_all(&books)?;

        info!(
            "event=book_delete module=service status=ok id={} books={}",
            id,
            books.len()
        );
        Ok(removed)
    }

    /// Returns books whose `field` contains `query`, ignoring case.
    ///
    /// An empty result is a normal outcome, not an error.
    pub fn search_books(&self, query: &str, field: SearchField) -> RepoResult<Vec<Book>> {
        let query = SearchQuery::new(query, field);
        let hits = filter_books(self.repo.load_all()?, &query);

        info!(
            "event=book_search module=service status=ok field={} hits={}",
            field,
            hits.len()
        );
        Ok(hits)
    }

    /// Returns the whole catalog in stored order.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.load_all()
    }

    /// Looks up one book by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self
            .repo
            .load_all()?
            .into_iter()
            .find(|book| book.id == id))
    }

    /// Sets the lending status from caller text.
    ///
    /// # Contract
    /// - Text other than `available`/`checked_out` returns
    ///   `RepoError::Validation` before the catalog is read.
    /// - Returns `RepoError::NotFound` without saving when no record matches.
    pub fn change_status(&self, id: BookId, new_status: &str) -> RepoResult<Book> {
        let status = new_status.parse::<BookStatus>().map_err(|err| {
            warn!(
                "event=book_status module=service status=invalid_status id={}",
                id
            );
            RepoError::from(err)
        })?;
        self.set_status(id, status)
    }

    /// Sets the lending status of book `id` and returns the updated record.
    pub fn set_status(&self, id: BookId, status: BookStatus) -> RepoResult<Book> {
        let mut books = self.repo.load_all()?;
        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            warn!("event=book_status module=service status=not_found id={}", id);
            return Err(RepoError::NotFound(id));
        };

        book.status = status;
        let updated = book.clone();
        self.repo.save_all(&books)?;

        info!(
            "event=book_status module=service status=ok id={} new_status={}",
            id, status
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogService;
    use crate::model::book::{Book, BookStatus, BookValidationError};
    use crate::repo::book_repo::{BookRepository, InMemoryBookRepository, RepoError, RepoResult};
    use crate::search::field::SearchField;
    use std::cell::Cell;

    /// Counts storage calls to check which paths touch the catalog.
    #[derive(Default)]
    struct CountingRepo {
        inner: InMemoryBookRepository,
        loads: Cell<usize>,
        saves: Cell<usize>,
    }

    impl BookRepository for CountingRepo {
        fn load_all(&self) -> RepoResult<Vec<Book>> {
            self.loads.set(self.loads.get() + 1);
            self.inner.load_all()
        }

        fn save_all(&self, books: &[Book]) -> RepoResult<()> {
            self.saves.set(self.saves.get() + 1);
            self.inner.save_all(books)
        }
    }

    #[test]
    fn invalid_status_never_reads_storage() {
        let service = CatalogService::new(CountingRepo::default());
        service.add_book("Dune", "Herbert", "1965").unwrap();
        let loads_before = service.repo().loads.get();

        let err = service.change_status(1, "borrowed").unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(BookValidationError::InvalidStatus(_))
        ));
        assert_eq!(service.repo().loads.get(), loads_before);
    }

    #[test]
    fn not_found_paths_do_not_save() {
        let service = CatalogService::new(CountingRepo::default());
        service.add_book("Dune", "Herbert", "1965").unwrap();
        assert_eq!(service.repo().saves.get(), 1);

        assert!(matches!(service.delete_book(5), Err(RepoError::NotFound(5))));
        assert!(matches!(
            service.set_status(5, BookStatus::CheckedOut),
            Err(RepoError::NotFound(5))
        ));
        assert_eq!(service.repo().saves.get(), 1);
    }

    #[test]
    fn read_paths_do_not_save() {
        let service = CatalogService::new(CountingRepo::default());
        service.add_book("Dune", "Herbert", "1965").unwrap();

        service.list_books().unwrap();
        service.search_books("dune", SearchField::Title).unwrap();
        service.get_book(1).unwrap();
        assert_eq!(service.repo().saves.get(), 1);
    }

    #[test]
    fn set_status_returns_updated_record() {
        let service = CatalogService::new(InMemoryBookRepository::new());
        let id = service.add_book("Dune", "Herbert", "1965").unwrap();

        let updated = service.change_status(id, "checked_out").unwrap();
        assert_eq!(updated.status, BookStatus::CheckedOut);
        assert!(!service.get_book(id).unwrap().unwrap().is_available());
    }
}
