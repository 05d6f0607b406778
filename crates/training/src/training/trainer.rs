//! BPE trainer implementation.
//!
//! The trainer repeatedly pops the most frequent live pair, runs it through
//! the stopping policy and, if accepted, merges it across the whole corpus
//! before selecting again.

use super::config::TrainingConfig;
use super::events::{MergeEvent, MergeObserver, NoopObserver};
use super::merger::merge_pair;
use std::fmt;
use symbpe_core::{
    join_pair, sub_token_count, Line, MergeCandidate, MergeHistory, PairIndex, Result, Token,
    Vocabulary,
};

/// Why training stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// No valid candidate left in the queue
    QueueExhausted,
    /// Best remaining pair occurs fewer than `min_occ` times
    BelowMinOccurrences(u64),
    /// Best remaining pair occurs exactly once
    SingleOccurrence,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueExhausted => write!(f, "no candidate pairs left"),
            Self::BelowMinOccurrences(freq) => {
                write!(f, "best pair occurs {} times, below minimum", freq)
            }
            Self::SingleOccurrence => write!(f, "all remaining pairs occur once"),
        }
    }
}

/// Why a candidate was dropped without merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The merged token would exceed `max_tknlen` sub-tokens
    TooLong,
    /// The pair was merged before
    AlreadyMerged,
}

/// Stopping policy outcome for one popped candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Halt(HaltReason),
    Discard(DiscardReason),
    /// Merge the pair into this token
    Merge(Token),
}

/// Result of a training run. The corpus itself is mutated in place.
#[derive(Debug, Clone)]
pub struct TrainingOutput {
    /// Token counts over the final corpus
    pub vocabulary: Vocabulary,
    /// Accepted merges in acceptance order
    pub merges: MergeHistory,
    /// Number of accepted merges
    pub merge_count: usize,
    /// Why training stopped
    pub halt: HaltReason,
}

/// BPE trainer over an in-memory corpus of symbol lines.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a trainer, validating the configuration.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on `corpus`, merging in place.
    pub fn train(&self, corpus: &mut [Line]) -> TrainingOutput {
        self.train_with(corpus, &mut NoopObserver)
    }

    /// Train on `corpus`, reporting each accepted merge to `observer`.
    pub fn train_with<O>(&self, corpus: &mut [Line], observer: &mut O) -> TrainingOutput
    where
        O: MergeObserver + ?Sized,
    {
        let mut vocabulary = Vocabulary::from_corpus(corpus);
        let mut index = PairIndex::build(corpus, self.config.protected());
        let mut merges = MergeHistory::new();

        log::info!(
            "Starting BPE training: {} lines, {} tokens, {} distinct pairs",
            corpus.len(),
            vocabulary.total(),
            index.len()
        );

        let halt = loop {
            let Some(candidate) = index.pop_best() else {
                break HaltReason::QueueExhausted;
            };

            let token = match self.judge(&candidate, &merges) {
                Verdict::Halt(reason) => break reason,
                Verdict::Discard(reason) => {
                    log::debug!(
                        "Discarding ({}, {}): {:?}",
                        candidate.pair.0,
                        candidate.pair.1,
                        reason
                    );
                    index.discard(&candidate.pair);
                    continue;
                }
                Verdict::Merge(token) => token,
            };

            let MergeCandidate { pair, count } = candidate;
            merge_pair(corpus, &pair, &token, &mut index);
            vocabulary = Vocabulary::from_corpus(corpus);
            merges.push(pair.clone());

            let event = MergeEvent {
                index: merges.len(),
                pair,
                token,
                occurrences: count,
            };
            log::debug!(
                "Merge {}: ({}, {}) -> {} (occurrences: {}, vocab: {})",
                event.index,
                event.pair.0,
                event.pair.1,
                event.token,
                event.occurrences,
                vocabulary.len()
            );
            observer.on_merge(&event);
        };

        log::trace!(
            "Dropped {} stale queue entries, {} left",
            index.stale_dropped(),
            index.queue_len()
        );
        log::info!(
            "Finished training: {} merges ({}), vocabulary size {}",
            merges.len(),
            halt,
            vocabulary.len()
        );

        TrainingOutput {
            vocabulary,
            merge_count: merges.len(),
            merges,
            halt,
        }
    }

    /// Apply the stopping policy to a popped candidate.
    ///
    /// An empty queue is handled by the caller as [`HaltReason::QueueExhausted`].
    pub fn judge(&self, candidate: &MergeCandidate, merges: &MergeHistory) -> Verdict {
        if candidate.count < self.config.min_occ {
            return Verdict::Halt(HaltReason::BelowMinOccurrences(candidate.count));
        }
        if candidate.count == 1 {
            return Verdict::Halt(HaltReason::SingleOccurrence);
        }

        let token = join_pair(&candidate.pair, &self.config.separator);
        if sub_token_count(&token, &self.config.separator) > self.config.max_tknlen {
            return Verdict::Discard(DiscardReason::TooLong);
        }
        if merges.contains(&candidate.pair) {
            return Verdict::Discard(DiscardReason::AlreadyMerged);
        }

        Verdict::Merge(token)
    }
}
