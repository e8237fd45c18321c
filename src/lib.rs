//! Compressed suffix index library.
//!
//! This library contains the compressed suffix index together with the
//! configuration, error and corpus-loading layers used by the command-line
//! driver. The index itself lives in [`data_structures::suffix_index`] and has
//! no dependency on the other modules.
//!
//! # Architecture
//!
//! - Strict component boundaries
//! - Exclusive ownership of every tree node
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{SuffixIndex, SuffixIndexError, SuffixIndexResult};

/// Version information for the suffix index crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
