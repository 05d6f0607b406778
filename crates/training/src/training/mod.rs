//! Training infrastructure for symbol-sequence BPE.
//!
//! This module provides the configuration, the in-place merge executor and
//! the trainer loop with its stopping policy.

pub mod config;
pub mod events;
pub mod merger;
pub mod trainer;

pub use config::{TrainingConfig, TrainingConfigBuilder};
pub use events::{MergeEvent, MergeObserver, NoopObserver};
pub use merger::merge_pair;
pub use trainer::{BpeTrainer, DiscardReason, HaltReason, TrainingOutput, Verdict};
