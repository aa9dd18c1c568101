//! Repository layer over catalog storage.
//!
//! # Responsibility
//! - Define the whole-catalog load/save contract used by services.
//! - Isolate file path and codec details from use-case orchestration.
//!
//! # Invariants
//! - Every load reflects current storage; nothing is cached between calls.
//! - Repository errors separate fatal storage failures from reported
//!   conditions (`NotFound`, validation).

pub mod book_repo;
