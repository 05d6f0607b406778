//! Vocabulary counting and protected tokens.
//!
//! The vocabulary is a plain occurrence count over the current corpus state.
//! It is recomputed from scratch rather than maintained incrementally.

use super::merges::{Line, Pair, Token};
use ahash::{AHashMap, AHashSet};

/// Token occurrence counts, iterated in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Forward mapping: token -> index into `tokens`/`counts`
    index: AHashMap<Token, u32>,
    /// Tokens in first-occurrence order
    tokens: Vec<Token>,
    /// Occurrence count per token
    counts: Vec<u64>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token occurrence across every line.
    pub fn from_corpus(corpus: &[Line]) -> Self {
        let mut vocab = Self::new();
        for line in corpus {
            for token in line {
                vocab.add(token);
            }
        }
        vocab
    }

    /// Record one occurrence of `token`.
    pub fn add(&mut self, token: &Token) {
        match self.index.get(token) {
            Some(&id) => self.counts[id as usize] += 1,
            None => {
                let id = self.tokens.len() as u32;
                self.index.insert(token.clone(), id);
                self.tokens.push(token.clone());
                self.counts.push(1);
            }
        }
    }

    /// Occurrence count of `token` (0 if absent).
    #[inline]
    pub fn count(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map_or(0, |&id| self.counts[id as usize])
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Total number of token occurrences.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.tokens.iter().zip(self.counts.iter().copied())
    }

    /// Tokens sorted by descending count (ties in first-occurrence order).
    pub fn ranked(&self) -> Vec<(&Token, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl PartialEq for Vocabulary {
    /// Two vocabularies are equal when they hold the same counts, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(token, count)| other.count(token) == count)
    }
}

impl Eq for Vocabulary {}

/// Tokens that never take part in a mergeable pair.
#[derive(Debug, Clone, Default)]
pub struct ProtectedTokens {
    tokens: AHashSet<Token>,
}

impl ProtectedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Whether either side of `pair` is protected.
    #[inline]
    pub fn touches(&self, pair: &Pair) -> bool {
        self.contains(&pair.0) || self.contains(&pair.1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ProtectedTokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(|s| Token::from(s.as_ref())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(tokens: &[&str]) -> Line {
        tokens.iter().map(|&t| Token::from(t)).collect()
    }

    #[test]
    fn test_from_corpus() {
        let corpus = vec![line(&["a", "b", "a"]), line(&["c", "a"])];
        let vocab = Vocabulary::from_corpus(&corpus);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.count("a"), 3);
        assert_eq!(vocab.count("b"), 1);
        assert_eq!(vocab.count("c"), 1);
        assert_eq!(vocab.count("z"), 0);
        assert_eq!(vocab.total(), 5);
    }

    #[test]
    fn test_first_occurrence_order() {
        let corpus = vec![line(&["z", "y", "z"]), line(&["x", "y"])];
        let vocab = Vocabulary::from_corpus(&corpus);

        let order: Vec<&str> = vocab.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_ranked() {
        let corpus = vec![line(&["b", "a", "a", "c", "c"])];
        let vocab = Vocabulary::from_corpus(&corpus);

        let ranked: Vec<(&str, u64)> = vocab
            .ranked()
            .into_iter()
            .map(|(t, c)| (t.as_str(), c))
            .collect();
        assert_eq!(ranked, vec![("a", 2), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocabulary::from_corpus(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.total(), 0);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left = Vocabulary::from_corpus(&[line(&["a", "b"])]);
        let right = Vocabulary::from_corpus(&[line(&["b", "a"])]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_protected_tokens() {
        let protected: ProtectedTokens = ["#", "c1"].into_iter().collect();

        assert!(protected.contains("#"));
        assert!(!protected.contains("a"));
        assert!(protected.touches(&("a".into(), "#".into())));
        assert!(protected.touches(&("c1".into(), "a".into())));
        assert!(!protected.touches(&("a".into(), "b".into())));
        assert_eq!(protected.len(), 2);
    }
}
