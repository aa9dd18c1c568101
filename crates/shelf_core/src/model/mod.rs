//! Catalog domain model.
//!
//! # Responsibility
//! - Define the book record persisted in the catalog file.
//! - Own the lending status vocabulary and id assignment rule.
//!
//! # Invariants
//! - Every record is identified by a positive, catalog-unique `BookId`.
//! - Status is always one of the two lending states.

pub mod book;
