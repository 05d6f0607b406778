//! symbpe-training - BPE merge learning
//!
//! This crate learns merge rules over an in-memory corpus of symbol lines by
//! repeatedly merging the most frequent adjacent pair.
//!
//! # Features
//!
//! - Incremental pair counting: merges update the pair index in place
//! - Deterministic selection (count first, then lexicographic pair order)
//! - Protected tokens, minimum frequency and maximum token length
//! - Merge events delivered to a caller-supplied observer
//!
//! # Example
//!
//! ```rust
//! use symbpe_core::Token;
//! use symbpe_training::{BpeTrainer, TrainingConfig};
//!
//! let config = TrainingConfig::builder()
//!     .separator("_")
//!     .min_occ(2)
//!     .max_tknlen(4)
//!     .build()?;
//!
//! let mut corpus: Vec<Vec<Token>> = vec![
//!     ["a", "b", "a", "b", "c"].iter().map(|&t| Token::from(t)).collect(),
//! ];
//! let output = BpeTrainer::new(config)?.train(&mut corpus);
//!
//! assert_eq!(output.merge_count, 1);
//! assert_eq!(output.vocabulary.count("a_b"), 2);
//! # Ok::<(), symbpe_core::BpeError>(())
//! ```

pub use symbpe_core::{BpeError, Result};

pub mod training;
pub use training::{
    merge_pair, BpeTrainer, DiscardReason, HaltReason, MergeEvent, MergeObserver, NoopObserver,
    TrainingConfig, TrainingConfigBuilder, TrainingOutput, Verdict,
};
