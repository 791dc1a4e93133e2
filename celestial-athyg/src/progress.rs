//! Per-source progress notifications.
//!
//! Observers only watch; they cannot fail a load or change its result. With
//! parallel loading enabled, notifications for different sources may arrive
//! from different threads and in any order.

use std::path::Path;

pub trait ProgressObserver: Send + Sync {
    fn source_started(&self, path: &Path);

    /// Called once the source parsed cleanly. Not called for a failed source.
    fn source_finished(&self, path: &Path, records: usize);
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn source_started(&self, _path: &Path) {}

    fn source_finished(&self, _path: &Path, _records: usize) {}
}

/// Emits an info-level `tracing` event per notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn source_started(&self, path: &Path) {
        tracing::info!(path = %path.display(), "parsing source");
    }

    fn source_finished(&self, path: &Path, records: usize) {
        tracing::info!(path = %path.display(), records, "finished source");
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &O {
    fn source_started(&self, path: &Path) {
        (**self).source_started(path)
    }

    fn source_finished(&self, path: &Path, records: usize) {
        (**self).source_finished(path, records)
    }
}

/// Observer that records every notification as `"start <path>"` or
/// `"done <path> <records>"`.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ProgressObserver for RecordingObserver {
    fn source_started(&self, path: &Path) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {}", path.display()));
    }

    fn source_finished(&self, path: &Path, records: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("done {} {}", path.display(), records));
    }
}
