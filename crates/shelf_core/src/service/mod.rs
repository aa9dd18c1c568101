//! Core use-case services.
//!
//! # Responsibility
//! - Turn each caller action into one load-mutate-save unit.
//! - Keep callers decoupled from file and codec details.

pub mod catalog_service;
