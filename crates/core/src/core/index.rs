//! Pair frequency index.
//!
//! `PairIndex` is the mutable training context: live pair counts, the lazy
//! candidate queue and the set of pairs that may never be merged. The merge
//! executor keeps it synchronized with the corpus through `update`.

use super::merges::{Line, Pair};
use super::priority::{MergeCandidate, PairPriorityQueue};
use super::vocab::ProtectedTokens;
use ahash::{AHashMap, AHashSet};

/// Live pair counts. A pair is present iff its count is at least one.
pub type PairCounts = AHashMap<Pair, u64>;

/// Count every adjacent pair in `corpus` from scratch, skipping protected pairs.
pub fn count_pairs(corpus: &[Line], protected: &ProtectedTokens) -> PairCounts {
    let mut counts = PairCounts::new();

    for line in corpus {
        for window in line.windows(2) {
            if protected.contains(&window[0]) || protected.contains(&window[1]) {
                continue;
            }
            *counts
                .entry((window[0].clone(), window[1].clone()))
                .or_insert(0) += 1;
        }
    }

    counts
}

/// Pair counts plus the lazy queue over them.
#[derive(Debug, Default)]
pub struct PairIndex {
    counts: PairCounts,
    queue: PairPriorityQueue,
    protected: ProtectedTokens,
    /// Pairs removed for good; treated like protected pairs from then on
    discarded: AHashSet<Pair>,
}

impl PairIndex {
    /// Build the index from the corpus and seed the queue with one entry per pair.
    pub fn build(corpus: &[Line], protected: ProtectedTokens) -> Self {
        let counts = count_pairs(corpus, &protected);

        let mut queue = PairPriorityQueue::with_capacity(counts.len());
        queue.extend(
            counts
                .iter()
                .map(|(pair, &count)| MergeCandidate::new(pair.clone(), count)),
        );

        log::trace!("seeded pair queue with {} entries", queue.len());

        Self {
            counts,
            queue,
            protected,
            discarded: AHashSet::new(),
        }
    }

    /// Whether `pair` can ever be counted.
    #[inline]
    fn is_tracked(&self, pair: &Pair) -> bool {
        !self.protected.touches(pair) && !self.discarded.contains(pair)
    }

    /// Apply `delta` to the count of `pair`.
    ///
    /// Protected and discarded pairs are ignored. A count that drops to zero
    /// or below removes the entry; a positive count pushes a fresh candidate.
    pub fn update(&mut self, pair: Pair, delta: i64) {
        if !self.is_tracked(&pair) {
            return;
        }

        let current = self.counts.get(&pair).copied().unwrap_or(0) as i64;
        let updated = current + delta;

        if updated <= 0 {
            self.counts.remove(&pair);
        } else {
            let updated = updated as u64;
            self.counts.insert(pair.clone(), updated);
            self.queue.push(MergeCandidate::new(pair, updated));
        }
    }

    /// Pop the most frequent pair whose queued count matches its live count.
    ///
    /// Equal counts resolve to the lexicographically smaller pair.
    pub fn pop_best(&mut self) -> Option<MergeCandidate> {
        let counts = &self.counts;
        self.queue
            .pop_current(|candidate| counts.get(&candidate.pair) == Some(&candidate.count))
    }

    /// Remove `pair` and never count it again.
    pub fn discard(&mut self, pair: &Pair) {
        self.counts.remove(pair);
        self.discarded.insert(pair.clone());
    }

    /// Live count of `pair` (0 if absent).
    #[inline]
    pub fn count(&self, pair: &Pair) -> u64 {
        self.counts.get(pair).copied().unwrap_or(0)
    }

    /// Number of pairs with a positive count.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Live counts, for inspection.
    pub fn pairs(&self) -> &PairCounts {
        &self.counts
    }

    /// Whether `pair` has been discarded.
    pub fn is_discarded(&self, pair: &Pair) -> bool {
        self.discarded.contains(pair)
    }

    pub fn protected(&self) -> &ProtectedTokens {
        &self.protected
    }

    /// Entries currently in the queue, stale ones included.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Stale queue entries dropped so far.
    pub fn stale_dropped(&self) -> u64 {
        self.queue.stale_dropped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::merges::Token;

    fn line(tokens: &[&str]) -> Line {
        tokens.iter().map(|&t| Token::from(t)).collect()
    }

    fn pair(a: &str, b: &str) -> Pair {
        (a.into(), b.into())
    }

    #[test]
    fn test_count_pairs() {
        let corpus = vec![line(&["a", "b", "a", "b", "c"]), line(&["b", "c"])];
        let counts = count_pairs(&corpus, &ProtectedTokens::new());

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&pair("a", "b")], 2);
        assert_eq!(counts[&pair("b", "a")], 1);
        assert_eq!(counts[&pair("b", "c")], 2);
    }

    #[test]
    fn test_build_skips_protected() {
        let corpus = vec![line(&["#", "a", "a"])];
        let protected: ProtectedTokens = ["#"].into_iter().collect();
        let index = PairIndex::build(&corpus, protected);

        assert_eq!(index.len(), 1);
        assert_eq!(index.count(&pair("#", "a")), 0);
        assert_eq!(index.count(&pair("a", "a")), 1);
        assert_eq!(index.queue_len(), 1);
    }

    #[test]
    fn test_update_removes_non_positive() {
        let corpus = vec![line(&["a", "b"])];
        let mut index = PairIndex::build(&corpus, ProtectedTokens::new());

        index.update(pair("a", "b"), -1);
        assert_eq!(index.count(&pair("a", "b")), 0);
        assert!(index.is_empty());

        // decrementing an absent pair never leaves a negative entry
        index.update(pair("x", "y"), -1);
        assert!(!index.pairs().contains_key(&pair("x", "y")));
    }

    #[test]
    fn test_update_ignores_protected() {
        let protected: ProtectedTokens = ["#"].into_iter().collect();
        let mut index = PairIndex::build(&[], protected);

        index.update(pair("#", "a"), 1);
        index.update(pair("a", "#"), 3);

        assert!(index.is_empty());
        assert_eq!(index.queue_len(), 0);
    }

    #[test]
    fn test_pop_best_skips_stale() {
        let corpus = vec![line(&["a", "b", "a", "b", "c", "d"])];
        let mut index = PairIndex::build(&corpus, ProtectedTokens::new());

        // (a, b) drops from 2 to 1; its seeded entry becomes stale
        index.update(pair("a", "b"), -1);
        index.update(pair("c", "d"), 2);

        let best = index.pop_best().unwrap();
        assert_eq!(best.pair, pair("c", "d"));
        assert_eq!(best.count, 3);

        // remaining pairs all have count 1: (a,b) < (b,a) < (b,c)
        let next = index.pop_best().unwrap();
        assert_eq!(next.pair, pair("a", "b"));
        assert_eq!(next.count, 1);
        assert!(index.stale_dropped() >= 1);
    }

    #[test]
    fn test_discard_is_permanent() {
        let corpus = vec![line(&["a", "b", "a", "b"])];
        let mut index = PairIndex::build(&corpus, ProtectedTokens::new());

        index.discard(&pair("a", "b"));
        assert_eq!(index.count(&pair("a", "b")), 0);
        assert!(index.is_discarded(&pair("a", "b")));

        index.update(pair("a", "b"), 1);
        assert_eq!(index.count(&pair("a", "b")), 0);

        // the only live pair left is (b, a)
        let best = index.pop_best().unwrap();
        assert_eq!(best.pair, pair("b", "a"));
        assert!(index.pop_best().is_none());
    }

    #[test]
    fn test_empty_corpus() {
        let mut index = PairIndex::build(&[], ProtectedTokens::new());
        assert!(index.is_empty());
        assert!(index.pop_best().is_none());
    }
}
