//! Lazy priority queue for BPE merge candidates.
//!
//! Every count change pushes a fresh candidate; superseded entries stay in
//! the heap and are filtered out when popped. The pair frequency index is
//! the authority on whether an entry is still current.

use crate::core::merges::Pair;
use dary_heap::OctonaryHeap;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of tokens to merge
    pub pair: Pair,
    /// The pair's count when this entry was pushed
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Max-heap by count; equal counts pop the lexicographically smaller pair first.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of merge candidates with lazy deletion.
///
/// Uses an 8-ary heap for better cache locality than a binary heap.
#[derive(Debug, Default)]
pub struct PairPriorityQueue {
    heap: OctonaryHeap<MergeCandidate>,
    /// Stale entries dropped by `pop_current` so far
    stale: u64,
}

impl PairPriorityQueue {
    /// Create a new empty priority queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new priority queue with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: OctonaryHeap::with_capacity(capacity),
            stale: 0,
        }
    }

    /// Push a candidate. Older entries for the same pair are left in place.
    #[inline]
    pub fn push(&mut self, candidate: MergeCandidate) {
        self.heap.push(candidate);
    }

    /// Pop the best entry for which `is_current` holds.
    ///
    /// Entries rejected by `is_current` are stale and dropped for good.
    /// Returns `None` once the heap is exhausted.
    pub fn pop_current<F>(&mut self, mut is_current: F) -> Option<MergeCandidate>
    where
        F: FnMut(&MergeCandidate) -> bool,
    {
        while let Some(candidate) = self.heap.pop() {
            if is_current(&candidate) {
                return Some(candidate);
            }
            self.stale += 1;
        }
        None
    }

    /// Get the number of (potentially stale) entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of stale entries dropped so far.
    #[inline]
    pub fn stale_dropped(&self) -> u64 {
        self.stale
    }
}

impl Extend<MergeCandidate> for PairPriorityQueue {
    fn extend<I: IntoIterator<Item = MergeCandidate>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}
