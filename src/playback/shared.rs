/*!
 * Shared Engine Handle
 * Serialized access to one engine from many callers
 */

use crate::core::types::{ProcessId, SchedulerResult};
use crate::engine::{Engine, EngineSnapshot, TickOutcome};
use crate::process::ProcessDefinition;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to a single engine
///
/// Every command and query holds the lock for its whole duration, so ticks,
/// resets and edits never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn tick(&self) -> TickOutcome {
        self.inner.lock().tick()
    }

    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    pub fn add_process(&self, definition: ProcessDefinition) -> SchedulerResult<ProcessId> {
        self.inner.lock().add_process(definition)
    }

    pub fn remove_process(&self, id: ProcessId) -> SchedulerResult<()> {
        self.inner.lock().remove_process(id)
    }

    pub fn set_time_quantum(&self, ticks: u64) -> SchedulerResult<()> {
        self.inner.lock().set_time_quantum(ticks)
    }

    pub fn is_complete(&self) -> bool {
        self.inner.lock().is_complete()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run a read-only closure against the engine
    pub fn with<R>(&self, f: impl FnOnce(&Engine) -> R) -> R {
        f(&*self.inner.lock())
    }
}
