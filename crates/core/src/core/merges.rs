//! Token pairs and merge history.
//!
//! Tokens are opaque text symbols. A merge joins two adjacent tokens with a
//! separator, so the merged token's text still records its atomic pieces.

use ahash::AHashSet;
use compact_str::CompactString;

/// An atomic or merged symbol.
pub type Token = CompactString;

/// An ordered pair of adjacent tokens.
///
/// Ordering is lexicographic on the two token strings, first by left then by right.
pub type Pair = (Token, Token);

/// One line of the corpus.
pub type Line = Vec<Token>;

/// Build the composite token for `pair`.
pub fn join_pair(pair: &Pair, separator: &str) -> Token {
    let mut token = CompactString::with_capacity(pair.0.len() + separator.len() + pair.1.len());
    token.push_str(&pair.0);
    token.push_str(separator);
    token.push_str(&pair.1);
    token
}

/// Number of atomic sub-tokens in `token` when split on `separator`.
///
/// An empty separator is treated as "no separator": the token counts as one piece.
#[inline]
pub fn sub_token_count(token: &str, separator: &str) -> usize {
    if separator.is_empty() {
        return 1;
    }
    token.matches(separator).count() + 1
}

/// Ordered record of accepted merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeHistory {
    /// Accepted pairs in acceptance order
    merges: Vec<Pair>,
    /// Membership set for `contains`
    seen: AHashSet<Pair>,
}

impl MergeHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted merge.
    ///
    /// Returns its rank (0-based acceptance position).
    pub fn push(&mut self, pair: Pair) -> usize {
        self.seen.insert(pair.clone());
        self.merges.push(pair);
        self.merges.len() - 1
    }

    /// Whether `pair` has already been merged.
    #[inline]
    pub fn contains(&self, pair: &Pair) -> bool {
        self.seen.contains(pair)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Iterate over merges in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.merges.iter()
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.merges
    }
}

impl FromIterator<Pair> for MergeHistory {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        let mut history = Self::new();
        for pair in iter {
            history.push(pair);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> Pair {
        (a.into(), b.into())
    }

    #[test]
    fn test_join_pair() {
        assert_eq!(join_pair(&pair("a", "b"), "_"), "a_b");
        assert_eq!(join_pair(&pair("a&b", "c"), "&"), "a&b&c");
        assert_eq!(join_pair(&pair("x", "y"), ""), "xy");
    }

    #[test]
    fn test_sub_token_count() {
        assert_eq!(sub_token_count("a", "&"), 1);
        assert_eq!(sub_token_count("a&b", "&"), 2);
        assert_eq!(sub_token_count("a&b&c&d", "&"), 4);
        // multi-character separators
        assert_eq!(sub_token_count("a<>b<>c", "<>"), 3);
    }

    #[test]
    fn test_pair_ordering() {
        assert!(pair("a", "z") < pair("b", "a"));
        assert!(pair("a", "b") < pair("a", "c"));
        assert!(pair("a", "b") < pair("a_b", "a"));
    }

    #[test]
    fn test_history() {
        let mut history = MergeHistory::new();
        assert!(history.is_empty());

        assert_eq!(history.push(pair("a", "b")), 0);
        assert_eq!(history.push(pair("a_b", "c")), 1);

        assert!(history.contains(&pair("a", "b")));
        assert!(!history.contains(&pair("b", "a")));
        assert_eq!(history.len(), 2);
        assert_eq!(history.as_slice()[1], pair("a_b", "c"));
    }
}
