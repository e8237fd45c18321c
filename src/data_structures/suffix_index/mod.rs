// Copyright (c) 2025 Suffix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Compressed suffix index.
//!
//! Stores a set of words together with every suffix of every stored word in a
//! path-compressed trie. Each edge carries a label that may span several
//! characters, so memory grows with the number of branching points rather than
//! with the quadratic number of suffixes.
//!
//! # Features
//!
//! - Exact word lookup with [`SuffixIndex::search`].
//! - Suffix lookup with [`SuffixIndex::ends_with`].
//! - Incremental insertion with edge splitting and erasure with pruning and
//!   edge contraction.
//! - Deep copy through [`Clone`] and structural equality through [`PartialEq`].
//!
//! # Example
//!
//! ```
//! use suffix_index_lib::data_structures::suffix_index::SuffixIndex;
//!
//! let mut index = SuffixIndex::new();
//! assert!(index.insert("a"));
//! assert!(index.insert("ab"));
//!
//! assert!(index.search("ab"));
//! assert!(!index.search("b"));
//! assert!(index.ends_with("b"));
//! assert_eq!(index.size(), 3);
//! assert_eq!(index.word_count(), 2);
//! ```
//!
//! # Thread safety
//!
//! The index has no internal synchronization. It is `Send` and `Sync`, so a
//! clone can be handed to another thread, but concurrent mutation of one
//! instance requires an external lock held by the caller.

mod error;
mod node;

use tracing::debug;

pub use error::{SuffixIndexError, SuffixIndexResult};
pub use node::Node;
use node::Termination;

/// A compressed trie of every suffix of every stored word.
///
/// `size` counts the nodes below the root and `word_count` the nodes marking
/// a complete word. Both are maintained incrementally; see
/// [`SuffixIndex::check_invariants`] for a full recount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixIndex {
    size: usize,
    word_count: usize,
    root: Node,
}

impl SuffixIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }

    /// Number of nodes in the tree, excluding the root.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored complete words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Read-only access to the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns `true` if `word` is stored as a complete word.
    ///
    /// A string that only exists as a suffix of some stored word does not
    /// match.
    pub fn search(&self, word: &str) -> bool {
        self.root
            .descend(word)
            .is_some_and(|node| node.is_word_end())
    }

    /// Returns `true` if `suffix` ends at least one stored word in a way that
    /// is not solely the complete spelling of a single stored word.
    ///
    /// The node reached by `suffix` matches when it is not a word end and has
    /// a positive reference count, or when it is a word end and has a
    /// reference count above one.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.root.descend(suffix).is_some_and(|node| {
            if node.is_word_end() {
                node.ref_count() > 1
            } else {
                node.ref_count() > 0
            }
        })
    }

    /// Inserts `word` and all of its suffixes.
    ///
    /// Returns `false` if the word is empty or already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        self.try_insert(word).is_ok()
    }

    /// Inserts `word` and all of its suffixes.
    ///
    /// # Errors
    ///
    /// * [`SuffixIndexError::EmptyWord`] if `word` is empty.
    /// * [`SuffixIndexError::DuplicateWord`] if `word` is already stored.
    ///
    /// The index is unchanged when an error is returned.
    pub fn try_insert(&mut self, word: &str) -> SuffixIndexResult<()> {
        if word.is_empty() {
            debug!("rejected insert of empty word");
            return Err(SuffixIndexError::EmptyWord);
        }

        let Some(created) = self.root.insert_suffix(word, Termination::Word) else {
            debug!(word, "rejected insert of stored word");
            return Err(SuffixIndexError::DuplicateWord(word.to_owned()));
        };
        self.size += created;
        self.word_count += 1;

        for (offset, _) in word.char_indices().skip(1) {
            let suffix = &word[offset..];
            match self.root.insert_suffix(suffix, Termination::Suffix) {
                Some(created) => self.size += created,
                None => panic!("suffix {suffix:?} of {word:?} rejected after the word was inserted"),
            }
        }

        Ok(())
    }

    /// Erases `word` and the suffix occurrences it contributed.
    ///
    /// Returns `false` if the word is empty or not stored.
    pub fn erase(&mut self, word: &str) -> bool {
        self.try_erase(word).is_ok()
    }

    /// Erases `word` and the suffix occurrences it contributed.
    ///
    /// # Errors
    ///
    /// * [`SuffixIndexError::EmptyWord`] if `word` is empty.
    /// * [`SuffixIndexError::UnknownWord`] if `word` is not stored.
    ///
    /// The index is unchanged when an error is returned.
    pub fn try_erase(&mut self, word: &str) -> SuffixIndexResult<()> {
        if word.is_empty() {
            debug!("rejected erase of empty word");
            return Err(SuffixIndexError::EmptyWord);
        }

        let Some(removed) = self.root.erase_suffix(word, Termination::Word) else {
            debug!(word, "rejected erase of unknown word");
            return Err(SuffixIndexError::UnknownWord(word.to_owned()));
        };
        self.size -= removed;
        self.word_count -= 1;

        for (offset, _) in word.char_indices().skip(1) {
            let suffix = &word[offset..];
            match self.root.erase_suffix(suffix, Termination::Suffix) {
                Some(removed) => self.size -= removed,
                None => panic!("suffix {suffix:?} of {word:?} missing after the word was erased"),
            }
        }

        Ok(())
    }

    /// Removes every word, leaving the canonical empty index.
    pub fn clear(&mut self) {
        debug!(size = self.size, words = self.word_count, "clearing suffix index");
        *self = Self::default();
    }

    /// Moves the contents out, leaving this index empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Every stored complete word, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        self.root.collect_words(&mut String::new(), &mut words);
        words.sort_unstable();
        words
    }

    /// Recounts the whole tree and verifies its structural invariants.
    ///
    /// # Errors
    ///
    /// [`SuffixIndexError::InvariantViolation`] describing the first
    /// violation found: a malformed root, a child stored under a key that is
    /// not its label's first character, a word end without a reference, a
    /// non-terminal node with fewer than two children, or a maintained
    /// counter that disagrees with the recount.
    pub fn check_invariants(&self) -> SuffixIndexResult<()> {
        let tally = self.root.check_root()?;

        if tally.nodes != self.size || tally.words != self.word_count {
            return Err(SuffixIndexError::InvariantViolation(format!(
                "counters report size {} and {} words, tree holds {} nodes and {} words",
                self.size, self.word_count, tally.nodes, tally.words
            )));
        }

        Ok(())
    }
}

impl<S: AsRef<str>> Extend<S> for SuffixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuffixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<const N: usize> From<[&str; N]> for SuffixIndex {
    fn from(words: [&str; N]) -> Self {
        words.into_iter().collect()
    }
}
