//! Merge events reported during training.

use symbpe_core::{Pair, Token};

/// One accepted merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEvent {
    /// 1-based position of the merge in acceptance order
    pub index: usize,
    /// The merged pair
    pub pair: Pair,
    /// The composite token that replaced it
    pub token: Token,
    /// Pair frequency at acceptance time
    pub occurrences: u64,
}

/// Receives merge events as training progresses.
pub trait MergeObserver {
    fn on_merge(&mut self, event: &MergeEvent);
}

impl<F> MergeObserver for F
where
    F: FnMut(&MergeEvent),
{
    fn on_merge(&mut self, event: &MergeEvent) {
        self(event)
    }
}

/// Collects every event in order.
impl MergeObserver for Vec<MergeEvent> {
    fn on_merge(&mut self, event: &MergeEvent) {
        self.push(event.clone());
    }
}

/// Ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {
    fn on_merge(&mut self, _event: &MergeEvent) {}
}
