//! Process-wide hook for observing duplicate passes.
//!
//! A recorder installed with [`set_dedup_metrics`] receives one
//! [`DedupMetrics::record_run`] call at the end of every
//! `Deduplicator::find_duplicates`. With no recorder installed the pass
//! only emits `tracing` events.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Receives a summary of each corpus scan.
pub trait DedupMetrics: Send + Sync {
    /// Called once per scan of `documents` texts.
    ///
    /// `pairs_compared` is `documents * (documents - 1) / 2` and `duplicates`
    /// counts the pairs that went into the report. `latency` spans signing
    /// plus the pair scan.
    fn record_run(
        &self,
        documents: usize,
        pairs_compared: usize,
        duplicates: usize,
        latency: Duration,
    );
}

type RecorderSlot = RwLock<Option<Arc<dyn DedupMetrics>>>;

static RECORDER: OnceCell<RecorderSlot> = OnceCell::new();

fn recorder_slot() -> &'static RecorderSlot {
    RECORDER.get_or_init(RecorderSlot::default)
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn DedupMetrics>> {
    match recorder_slot().read() {
        Ok(slot) => slot.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the recorder seen by every `Deduplicator`. `None` removes it.
pub fn set_dedup_metrics(recorder: Option<Arc<dyn DedupMetrics>>) {
    let mut slot = recorder_slot()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = recorder;
}
