//! Core BPE data structures.
//!
//! This module contains the pair/token types, the vocabulary counter and the
//! pair frequency index with its lazy priority queue.

pub mod index;
pub mod merges;
pub mod priority;
pub mod vocab;

pub use index::{count_pairs, PairCounts, PairIndex};
pub use merges::{join_pair, sub_token_count, Line, MergeHistory, Pair, Token};
pub use priority::{MergeCandidate, PairPriorityQueue};
pub use vocab::{ProtectedTokens, Vocabulary};
