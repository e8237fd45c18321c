// Copyright (c) 2025 Suffix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the suffix index.

/// Errors that can occur in suffix index operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SuffixIndexError {
    /// An empty word was given to insert or erase.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word is already stored as a complete word.
    #[error("Word '{0}' is already stored")]
    DuplicateWord(String),

    /// The word is not stored as a complete word.
    #[error("Word '{0}' is not stored")]
    UnknownWord(String),

    /// The tree no longer satisfies its structural invariants.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for suffix index operations.
pub type SuffixIndexResult<T> = std::result::Result<T, SuffixIndexError>;
