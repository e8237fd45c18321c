//! Data structures for the suffix index crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive ownership of every node by its parent
//! - Recursion bounded by word length

pub mod suffix_index;

// Re-export common data structures
pub use suffix_index::{SuffixIndex, SuffixIndexError, SuffixIndexResult};
