/*!
 * Engine State
 * The single owned value every engine operation mutates
 */

use super::records::{CompletedRecord, TraceEntry};
use crate::core::types::{ProcessId, Tick};
use crate::process::Process;
use crate::scheduler::ReadyQueue;
use std::collections::BTreeMap;

/// Complete simulation state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineState {
    pub(super) current_tick: Tick,
    pub(super) running: Option<ProcessId>,
    pub(super) quantum_used: Tick,
    // Length of the quantum the runner started with
    pub(super) slice: Tick,
    pub(super) processes: BTreeMap<ProcessId, Process>,
    pub(super) completed: Vec<CompletedRecord>,
    pub(super) trace: Vec<TraceEntry>,
    pub(super) ready: ReadyQueue,
}

impl EngineState {
    pub(super) fn new(slice: Tick) -> Self {
        Self {
            slice,
            ..Self::default()
        }
    }

    /// Back to tick 0 with every process restored to its full burst
    pub(super) fn reset(&mut self, slice: Tick) {
        for process in self.processes.values_mut() {
            process.restore();
        }
        self.completed.clear();
        self.trace.clear();
        self.ready.clear();
        self.current_tick = 0;
        self.running = None;
        self.quantum_used = 0;
        self.slice = slice;
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn running(&self) -> Option<ProcessId> {
        self.running
    }

    pub fn quantum_used(&self) -> Tick {
        self.quantum_used
    }

    pub fn processes(&self) -> &BTreeMap<ProcessId, Process> {
        &self.processes
    }

    pub fn completed(&self) -> &[CompletedRecord] {
        &self.completed
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn ready(&self) -> &ReadyQueue {
        &self.ready
    }

    /// All processes exist and none has work left
    pub(super) fn all_finished(&self) -> bool {
        !self.processes.is_empty() && self.processes.values().all(Process::is_finished)
    }
}
