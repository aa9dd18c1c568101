//! Core catalog logic for a personal book library.
//! The catalog lives in one JSON file; every operation loads it, applies one
//! change and writes it back.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{next_book_id, Book, BookId, BookStatus, BookValidationError};
pub use repo::book_repo::{
    BookRepository, InMemoryBookRepository, JsonFileBookRepository, RepoError, RepoResult,
    DEFAULT_CATALOG_FILE,
};
pub use search::field::{filter_books, SearchField, SearchQuery};
pub use service::catalog_service::CatalogService;
pub use storage::{load_catalog, save_catalog, StorageError, StorageResult};
