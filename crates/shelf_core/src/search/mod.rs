//! Catalog search by field.
//!
//! # Responsibility
//! - Resolve the searchable field to a typed accessor.
//! - Match records by case-insensitive substring.

pub mod field;
