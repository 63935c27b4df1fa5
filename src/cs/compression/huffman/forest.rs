use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::tree::NodeId;
use crate::error::{Error, Result};

/// A forest member: a subtree root together with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestEntry {
    pub id: NodeId,
    pub weight: usize,
    pub label: String,
}

impl ForestEntry {
    /// Create an entry for subtree `id` with its ordering key.
    pub fn new(id: NodeId, weight: usize, label: impl Into<String>) -> Self {
        ForestEntry {
            id,
            weight,
            label: label.into(),
        }
    }
}

/// Heap wrapper giving the smallest (weight, label) the highest priority.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MinEntry(ForestEntry);

impl Ord for MinEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key: BinaryHeap is a max-heap.
        other
            .0
            .weight
            .cmp(&self.0.weight)
            .then_with(|| other.0.label.cmp(&self.0.label))
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

impl PartialOrd for MinEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Working set of subtrees ordered by weight ascending, then label ascending.
///
/// The node id is a final tie-break so the order is total even if two entries
/// ever shared a label.
#[derive(Debug, Clone, Default)]
pub struct PriorityForest {
    heap: BinaryHeap<MinEntry>,
}

impl PriorityForest {
    /// Create an empty forest.
    pub fn new() -> Self {
        PriorityForest {
            heap: BinaryHeap::new(),
        }
    }

    /// Create an empty forest with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityForest {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Add an entry, placed by its (weight, label) key.
    pub fn insert(&mut self, entry: ForestEntry) {
        self.heap.push(MinEntry(entry));
    }

    /// Removes the smallest entry.
    pub fn pop(&mut self) -> Option<ForestEntry> {
        self.heap.pop().map(|MinEntry(entry)| entry)
    }

    /// Removes the two smallest entries, smallest first.
    ///
    /// Fails without modifying the forest when fewer than two entries remain.
    pub fn take_two_smallest(&mut self) -> Result<(ForestEntry, ForestEntry)> {
        if self.heap.len() < 2 {
            return Err(Error::InsufficientNodes {
                needed: 2,
                available: self.heap.len(),
            });
        }
        match (self.pop(), self.pop()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => unreachable!("length checked above"),
        }
    }

    /// Number of entries in the forest.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when the forest holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
