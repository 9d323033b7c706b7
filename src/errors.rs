//! errors.rs - Custom error types for the casemark library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `casemark` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CasemarkError {
    #[error("Page numbers are 1-based, got {0}")]
    InvalidPageNumber(u32),

    #[error("Page {requested} requested but the item only has {available} rendered page(s)")]
    PageOutOfRange { requested: u32, available: usize },

    #[error("Failed to resolve replacement template: {0}")]
    Template(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
