//! Injectable instrumentation hooks.
//!
//! The store carries no ambient profiling state; callers that want timing
//! or tracing around operations pass an observer in explicitly.

use tracing::debug;

/// Observer notified around engine operations.
///
/// Implementations must tolerate concurrent calls from multiple operations
/// in flight at once.
pub trait StorageObserver: Send + Sync {
    /// An operation began.
    fn started(&self, operation: &str) {
        let _ = operation;
    }

    /// A named step inside an operation completed.
    fn step(&self, operation: &str, detail: &str) {
        let _ = (operation, detail);
    }

    /// The operation finished.
    fn finished(&self, operation: &str) {
        let _ = operation;
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StorageObserver for NoopObserver {}

/// Observer that emits `tracing` debug events for every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StorageObserver for TracingObserver {
    fn started(&self, operation: &str) {
        debug!("{operation} started");
    }

    fn step(&self, operation: &str, detail: &str) {
        debug!("{operation}: {detail}");
    }

    fn finished(&self, operation: &str) {
        debug!("{operation} finished");
    }
}
