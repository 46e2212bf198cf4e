/*!
 * Execution Engine
 * Tick-stepping round-robin state machine
 *
 * All state changes happen inside the engine's commands; `tick` is the only
 * operation that advances simulated time or touches a process's remaining
 * burst. The engine owns no timers and performs no I/O.
 */

use crate::config::SimulationConfig;
use crate::core::limits::FIRST_PROCESS_ID;
use crate::core::types::{ProcessId, SchedulerResult};
use crate::process::ProcessDefinition;
use crate::scheduler::TimeQuantum;
use tracing::info;

mod commands;
mod operations;
mod queries;
pub mod records;
pub mod state;

pub use queries::EngineSnapshot;
pub use records::{gantt_segments, CompletedRecord, GanttSegment, TickOutcome, TraceEntry};
pub use state::EngineState;

/// Round-robin execution engine
#[derive(Debug, Clone)]
pub struct Engine {
    state: EngineState,
    quantum: TimeQuantum,
    next_id: ProcessId,
}

impl Engine {
    /// Create an empty engine with the default quantum
    pub fn new() -> Self {
        Self::with_quantum(TimeQuantum::default())
    }

    /// Create an empty engine with a custom quantum
    pub fn with_quantum(quantum: TimeQuantum) -> Self {
        info!(quantum = quantum.ticks(), "Round-robin engine initialized");
        Self {
            state: EngineState::new(quantum.ticks()),
            quantum,
            next_id: FIRST_PROCESS_ID,
        }
    }

    /// Create an engine preloaded with a workload
    ///
    /// Fails on the first invalid definition; ids are assigned in input order.
    pub fn with_processes<I>(quantum: TimeQuantum, definitions: I) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = ProcessDefinition>,
    {
        let mut engine = Self::with_quantum(quantum);
        for definition in definitions {
            engine.add_process(definition)?;
        }
        Ok(engine)
    }

    /// Build an engine from a loaded configuration
    pub fn from_config(config: &SimulationConfig) -> SchedulerResult<Self> {
        let quantum = TimeQuantum::new(config.quantum)?;
        Self::with_processes(quantum, config.processes.iter().cloned())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
