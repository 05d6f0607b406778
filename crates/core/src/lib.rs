//! symbpe-core - Core data structures for symbol-sequence BPE
//!
//! This crate provides the building blocks for learning a subword vocabulary
//! over sequences of opaque symbols (for example transcription tokens).
//!
//! # Features
//!
//! - Token pairs over compact strings with lexicographic ordering
//! - Vocabulary counting in first-occurrence order
//! - Pair frequency index with a lazily-deleted 8-ary max-heap
//! - Protected tokens that never take part in a merge
//!
//! # Example
//!
//! ```rust
//! use symbpe_core::{PairIndex, ProtectedTokens, Token};
//!
//! let corpus: Vec<Vec<Token>> = vec![
//!     ["a", "b", "a", "b", "c"].iter().map(|&t| Token::from(t)).collect(),
//! ];
//! let mut index = PairIndex::build(&corpus, ProtectedTokens::new());
//!
//! let best = index.pop_best().unwrap();
//! assert_eq!(best.pair, (Token::from("a"), Token::from("b")));
//! assert_eq!(best.count, 2);
//! ```

pub mod error;
pub use error::{BpeError, Result};

pub mod core;
pub use core::{
    count_pairs, join_pair, sub_token_count, Line, MergeCandidate, MergeHistory, Pair, PairCounts,
    PairIndex, PairPriorityQueue, ProtectedTokens, Token, Vocabulary,
};
