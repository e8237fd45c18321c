// Copyright (c) 2025 Suffix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the suffix index.
//!
//! A node owns the edge label leading into it from its parent and, through
//! its child map, the whole subtree below it. Children are keyed by the first
//! `char` of their label, so at most one outgoing edge starts with any given
//! character.

use std::collections::hash_map::{self, Entry};

use fnv::FnvHashMap;
use tracing::trace;

use super::error::{SuffixIndexError, SuffixIndexResult};

/// How a suffix pass terminates at its final node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Termination {
    /// The pass spells a complete word.
    Word,
    /// The pass spells a proper suffix of a word.
    Suffix,
}

/// A node in the suffix index.
///
/// Equality is structural: same label, same word-end flag, same reference
/// count and pairwise-equal children under the same keys.
#[derive(Debug, Default)]
pub struct Node {
    /// Edge label from the parent; empty only for the root.
    label: String,

    /// Whether a complete word ends here.
    is_word_end: bool,

    /// Number of word and suffix insertions that end here.
    ref_count: usize,

    /// Children keyed by the first character of their label.
    children: FnvHashMap<char, Node>,
}

/// Node and word counts gathered by a full traversal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Tally {
    pub(super) nodes: usize,
    pub(super) words: usize,
}

impl Node {
    /// The edge label leading into this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a complete word ends at this node.
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Number of word and suffix insertions ending at this node.
    pub fn ref_count(&self) -> usize {
        self.ref_count
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child whose label starts with `first`, if any.
    pub fn child(&self, first: char) -> Option<&Node> {
        self.children.get(&first)
    }

    /// Iterates over the children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.values()
    }

    fn terminal(label: &str, kind: Termination) -> Self {
        Self {
            label: label.to_owned(),
            is_word_end: kind == Termination::Word,
            ref_count: 1,
            children: FnvHashMap::default(),
        }
    }

    /// Finds the child sharing a non-empty prefix with `s`, along with the
    /// byte length of that shared prefix.
    fn find_by_prefix(&self, s: &str) -> Option<(&Node, usize)> {
        let first = s.chars().next()?;
        let child = self.children.get(&first)?;
        Some((child, common_prefix_len(&child.label, s)))
    }

    /// Walks `path` from this node, matching whole edge labels only.
    pub(super) fn descend(&self, path: &str) -> Option<&Node> {
        let mut node = self;
        let mut rest = path;

        while !rest.is_empty() {
            let (child, matched) = node.find_by_prefix(rest)?;
            if matched < child.label.len() {
                return None;
            }
            node = child;
            rest = &rest[matched..];
        }

        Some(node)
    }

    /// Inserts `suffix` below this node.
    ///
    /// Returns the number of nodes created, or `None` when a word pass ends
    /// on a node that already marks a complete word. A rejected pass leaves
    /// the subtree untouched.
    pub(super) fn insert_suffix(&mut self, suffix: &str, kind: Termination) -> Option<usize> {
        let mut node = self;
        let mut rest = suffix;
        let mut created = 0;

        while let Some(first) = rest.chars().next() {
            match node.children.entry(first) {
                Entry::Vacant(slot) => {
                    slot.insert(Node::terminal(rest, kind));
                    return Some(created + 1);
                }
                Entry::Occupied(slot) => {
                    let child = slot.into_mut();
                    let matched = common_prefix_len(&child.label, rest);

                    // A duplicate word always matches whole labels, so a
                    // split never precedes a rejection.
                    if matched < child.label.len() {
                        child.split_at(matched);
                        created += 1;
                    }

                    rest = &rest[matched..];
                    node = child;
                }
            }
        }

        if kind == Termination::Word {
            if node.is_word_end {
                return None;
            }
            node.is_word_end = true;
        }
        node.ref_count += 1;
        Some(created)
    }

    /// Erases `suffix` below this node, then prunes or contracts the nodes
    /// whose shape changed.
    ///
    /// Returns the number of nodes removed, or `None` when the suffix is not
    /// stored (or, for a word pass, does not end on a word). A rejected pass
    /// leaves the subtree untouched.
    pub(super) fn erase_suffix(&mut self, suffix: &str, kind: Termination) -> Option<usize> {
        let keys = self.locate(suffix, kind)?;

        let Some((&last, above)) = keys.split_last() else {
            self.release(kind);
            return Some(0);
        };

        // Only the terminal node and its parent can change shape: a pruned
        // terminal costs its parent one child, and a contraction keeps the
        // child count of the node above it.
        match above.split_last() {
            None => {
                self.children.get_mut(&last)?.release(kind);
                Some(self.settle_child(last))
            }
            Some((&parent_key, rest)) => {
                let grandparent = self.walk_mut(rest)?;
                let parent = grandparent.children.get_mut(&parent_key)?;
                parent.children.get_mut(&last)?.release(kind);

                let removed = parent.settle_child(last);
                Some(removed + grandparent.settle_child(parent_key))
            }
        }
    }

    /// Keys of the path spelling `suffix`, provided it ends on a node the
    /// pass can release.
    fn locate(&self, suffix: &str, kind: Termination) -> Option<Vec<char>> {
        let mut node = self;
        let mut rest = suffix;
        let mut keys = Vec::new();

        while let Some(first) = rest.chars().next() {
            let child = node.children.get(&first)?;
            rest = rest.strip_prefix(child.label.as_str())?;
            keys.push(first);
            node = child;
        }

        let releasable = node.ref_count > 0 && (kind == Termination::Suffix || node.is_word_end);
        releasable.then_some(keys)
    }

    fn walk_mut(&mut self, keys: &[char]) -> Option<&mut Node> {
        let mut node = self;
        for key in keys {
            node = node.children.get_mut(key)?;
        }
        Some(node)
    }

    fn release(&mut self, kind: Termination) {
        if kind == Termination::Word {
            self.is_word_end = false;
        }
        self.ref_count -= 1;
    }

    /// Prunes the child under `key` if it is an unreferenced leaf, or merges
    /// it with its only child if it is an unreferenced pass-through node.
    /// Returns the number of nodes removed.
    fn settle_child(&mut self, key: char) -> usize {
        let Some(child) = self.children.get_mut(&key) else {
            return 0;
        };
        if child.ref_count != 0 {
            return 0;
        }

        match child.children.len() {
            0 => {
                trace!(label = %child.label, "pruning node");
                self.children.remove(&key);
                1
            }
            1 => {
                child.absorb_only_child();
                1
            }
            _ => 0,
        }
    }

    /// Shortens this node's label to its first `at` bytes and pushes the
    /// remainder, along with the counts and children, into a new child.
    fn split_at(&mut self, at: usize) {
        let tail = self.label.split_off(at);
        trace!(prefix = %self.label, tail = %tail, "splitting edge");

        let first = tail
            .chars()
            .next()
            .expect("split point lies inside the label");
        let lower = Node {
            label: tail,
            is_word_end: std::mem::take(&mut self.is_word_end),
            ref_count: std::mem::take(&mut self.ref_count),
            children: std::mem::take(&mut self.children),
        };
        self.children.insert(first, lower);
    }

    /// Merges the single remaining child into this node. The first character
    /// of the label is unchanged, so the parent's key stays valid.
    fn absorb_only_child(&mut self) {
        let Some(mut only) = std::mem::take(&mut self.children).into_values().next() else {
            return;
        };
        trace!(label = %self.label, absorbed = %only.label, "contracting edge");

        self.label.push_str(&only.label);
        self.is_word_end = only.is_word_end;
        self.ref_count = only.ref_count;
        self.children = std::mem::take(&mut only.children);
    }

    /// Appends every complete word at or below this node to `out`, with
    /// `prefix` holding the path spelled so far.
    pub(super) fn collect_words(&self, prefix: &mut String, out: &mut Vec<String>) {
        let start = prefix.len();
        let mut stack = vec![(self, start)];

        while let Some((node, depth)) = stack.pop() {
            prefix.truncate(depth);
            prefix.push_str(&node.label);

            if node.is_word_end {
                out.push(prefix.clone());
            }
            let below = prefix.len();
            stack.extend(node.children.values().map(|child| (child, below)));
        }

        prefix.truncate(start);
    }

    /// Verifies the root's shape and every descendant, counting nodes and
    /// words along the way.
    pub(super) fn check_root(&self) -> SuffixIndexResult<Tally> {
        if !self.label.is_empty() || self.is_word_end || self.ref_count != 0 {
            return Err(SuffixIndexError::InvariantViolation(format!(
                "root must be empty, found label {:?}, word end {}, ref count {}",
                self.label, self.is_word_end, self.ref_count
            )));
        }

        let mut tally = Tally::default();
        let mut path = String::new();
        let mut stack: Vec<_> = self.children.iter().map(|(&key, child)| (key, child, 0)).collect();

        while let Some((key, node, depth)) = stack.pop() {
            path.truncate(depth);
            path.push_str(&node.label);
            node.check(key, &path)?;

            tally.nodes += 1;
            if node.is_word_end {
                tally.words += 1;
            }
            let below = path.len();
            stack.extend(node.children.iter().map(|(&key, child)| (key, child, below)));
        }

        Ok(tally)
    }

    fn check(&self, key: char, path: &str) -> SuffixIndexResult<()> {
        let violation = if self.label.chars().next() != Some(key) {
            Some(format!("label {:?} stored under key {key:?}", self.label))
        } else if self.is_word_end && self.ref_count == 0 {
            Some("word end with zero ref count".to_string())
        } else if self.ref_count == 0 && self.children.len() < 2 {
            Some(format!(
                "non-terminal node with {} children",
                self.children.len()
            ))
        } else {
            None
        };

        match violation {
            Some(message) => Err(SuffixIndexError::InvariantViolation(format!(
                "at {path:?}: {message}"
            ))),
            None => Ok(()),
        }
    }
}

// A tree can be as deep as its longest word is long. The impls below walk
// it with an explicit stack.

impl Drop for Node {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut stack: Vec<Node> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// A node being copied, with the children still to visit and the copies
/// made so far.
struct CloneFrame<'a> {
    key: char,
    source: &'a Node,
    pending: hash_map::Iter<'a, char, Node>,
    copied: FnvHashMap<char, Node>,
}

impl<'a> CloneFrame<'a> {
    fn new(key: char, source: &'a Node) -> Self {
        Self {
            key,
            source,
            pending: source.children.iter(),
            copied: FnvHashMap::with_capacity_and_hasher(
                source.children.len(),
                Default::default(),
            ),
        }
    }

    fn finish(self) -> (char, Node) {
        let node = Node {
            label: self.source.label.clone(),
            is_word_end: self.source.is_word_end,
            ref_count: self.source.ref_count,
            children: self.copied,
        };
        (self.key, node)
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // The root frame's key is never read.
        let mut stack = vec![CloneFrame::new(char::default(), self)];
        let mut copy = None;

        while let Some(mut frame) = stack.pop() {
            if let Some((&key, child)) = frame.pending.next() {
                stack.push(frame);
                stack.push(CloneFrame::new(key, child));
                continue;
            }

            let (key, node) = frame.finish();
            match stack.last_mut() {
                Some(parent) => {
                    parent.copied.insert(key, node);
                }
                None => copy = Some(node),
            }
        }

        copy.unwrap_or_default()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((left, right)) = stack.pop() {
            if left.label != right.label
                || left.is_word_end != right.is_word_end
                || left.ref_count != right.ref_count
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for (key, child) in &left.children {
                match right.children.get(key) {
                    Some(counterpart) => stack.push((child, counterpart)),
                    None => return false,
                }
            }
        }

        true
    }
}

impl Eq for Node {}

/// Byte length of the longest common prefix of `a` and `b`, always on a
/// `char` boundary of both.
pub(super) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, left), right)| left != right)
        .map_or_else(|| a.len().min(b.len()), |((at, _), _)| at)
}
