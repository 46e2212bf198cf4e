/*!
 * Engine Queries
 * Read-only views for the presentation layer
 */

use super::records::{gantt_segments, CompletedRecord, GanttSegment, TraceEntry};
use super::state::EngineState;
use super::Engine;
use crate::core::types::{ProcessId, Tick};
use crate::process::{Process, ProcessSnapshot};
use crate::scheduler::{EngineStatus, TimeQuantum};
use crate::stats::{self, Statistics};
use serde::{Deserialize, Serialize};

/// Everything a display needs, captured at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub current_tick: Tick,
    pub status: EngineStatus,
    pub quantum: TimeQuantum,
    pub quantum_used: Tick,
    pub running: Option<ProcessId>,
    pub processes: Vec<ProcessSnapshot>,
    pub ready_queue: Vec<ProcessId>,
    pub trace: Vec<TraceEntry>,
    pub completed: Vec<CompletedRecord>,
    pub statistics: Statistics,
}

impl Engine {
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.state.current_tick
    }

    #[inline]
    pub fn running_process(&self) -> Option<ProcessId> {
        self.state.running
    }

    #[inline]
    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Ticks the runner has used of its current slice
    #[inline]
    pub fn quantum_used(&self) -> Tick {
        self.state.quantum_used
    }

    pub fn status(&self) -> EngineStatus {
        if self.state.all_finished() {
            EngineStatus::Completed
        } else if let Some(id) = self.state.running {
            EngineStatus::Running(id)
        } else {
            EngineStatus::Idle
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.all_finished()
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.state.processes.get(&id)
    }

    /// Processes in id order
    pub fn processes(&self) -> impl Iterator<Item = &Process> + '_ {
        self.state.processes.values()
    }

    pub fn process_snapshots(&self) -> Vec<ProcessSnapshot> {
        self.processes().map(Process::snapshot).collect()
    }

    /// Processes waiting in rotation, head first (excludes the runner)
    pub fn ready_queue(&self) -> Vec<ProcessId> {
        self.state.ready.iter().collect()
    }

    /// Processes eligible at `tick`, in the order they would get the CPU
    ///
    /// The runner comes first, then the rotation, then arrivals that have not
    /// been admitted yet ordered by arrival time and id.
    pub fn eligible_at(&self, tick: Tick) -> Vec<ProcessId> {
        let eligible = |id: &ProcessId| {
            self.state
                .processes
                .get(id)
                .is_some_and(|p| p.is_eligible_at(tick))
        };

        let mut order: Vec<ProcessId> = self.state.running.into_iter().filter(eligible).collect();
        order.extend(self.state.ready.iter().filter(eligible));
        order.extend(self.state.ready.pending_arrivals(tick, &self.state.processes));
        order
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.state.trace
    }

    /// Trace merged into contiguous per-process blocks
    pub fn gantt(&self) -> Vec<GanttSegment> {
        gantt_segments(&self.state.trace)
    }

    /// Completion records in completion order
    pub fn completed(&self) -> &[CompletedRecord] {
        &self.state.completed
    }

    pub fn statistics(&self) -> Statistics {
        stats::calculate(&self.state.completed)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current_tick: self.current_tick(),
            status: self.status(),
            quantum: self.quantum,
            quantum_used: self.quantum_used(),
            running: self.running_process(),
            processes: self.process_snapshots(),
            ready_queue: self.ready_queue(),
            trace: self.state.trace.clone(),
            completed: self.state.completed.clone(),
            statistics: self.statistics(),
        }
    }
}
