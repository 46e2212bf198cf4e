/*!
 * Engine Commands
 * Add, remove, requantum and reset operations
 */

use super::Engine;
use crate::core::errors::SchedulerError;
use crate::core::types::{ProcessId, SchedulerResult};
use crate::process::validation::validate_definition;
use crate::process::{Process, ProcessDefinition};
use crate::scheduler::TimeQuantum;
use tracing::{info, warn};

impl Engine {
    /// Register a new process and return its id
    ///
    /// The process stays out of the rotation until the tick it arrives, so
    /// adding one never disturbs the current tick or the running quantum.
    pub fn add_process(&mut self, definition: ProcessDefinition) -> SchedulerResult<ProcessId> {
        let valid = validate_definition(&definition).inspect_err(|e| {
            warn!(error = %e, "Rejected process definition");
        })?;

        let id = self.next_id;
        self.next_id += 1;

        info!(
            process = id,
            name = %valid.name,
            burst_time = valid.burst_time,
            arrival_time = valid.arrival_time,
            "Process added"
        );
        self.state.processes.insert(
            id,
            Process::new(id, valid.name, valid.arrival_time, valid.burst_time),
        );
        Ok(id)
    }

    /// Remove a process that is not holding the CPU
    ///
    /// Trace entries and completion records of the process are kept.
    pub fn remove_process(&mut self, id: ProcessId) -> SchedulerResult<()> {
        if self.state.running == Some(id) {
            warn!(process = id, "Refusing to remove the running process");
            return Err(SchedulerError::IllegalRemoval(id));
        }

        if self.state.processes.remove(&id).is_none() {
            return Err(SchedulerError::ProcessNotFound(id));
        }
        self.state.ready.remove(id);

        info!(process = id, "Process removed");
        Ok(())
    }

    /// Change the time quantum
    ///
    /// The slice currently in progress keeps the length it started with; the
    /// new value applies from the next fresh quantum.
    pub fn set_time_quantum(&mut self, ticks: u64) -> SchedulerResult<()> {
        let quantum = TimeQuantum::new(ticks).inspect_err(|e| {
            warn!(error = %e, "Rejected time quantum");
        })?;

        info!(from = %self.quantum, to = %quantum, "Time quantum updated");
        self.quantum = quantum;
        Ok(())
    }

    /// Return to tick 0 with every process restored to its full burst
    ///
    /// Registered processes, their ids and the quantum survive a reset.
    pub fn reset(&mut self) {
        self.state.reset(self.quantum.ticks());
        info!(
            processes = self.state.processes.len(),
            "Simulation reset"
        );
    }
}
