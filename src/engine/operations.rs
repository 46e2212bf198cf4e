/*!
 * Engine Tick Operation
 * Advance simulated time by exactly one tick
 */

use super::records::{CompletedRecord, TickOutcome, TraceEntry};
use super::Engine;
use crate::core::types::{ProcessId, Tick};
use tracing::{debug, info};

impl Engine {
    /// Advance the simulation by one tick
    ///
    /// 1. Terminal state: no-op.
    /// 2. Admit arrivals, keep the current runner or take the rotation head.
    /// 3. Nobody to run: idle tick.
    /// 4. Run the selected process for one tick and record it.
    /// 5. Completion is checked before quantum expiry; either one hands the
    ///    CPU to the next process in rotation.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.all_finished() {
            return TickOutcome::AlreadyComplete;
        }

        let tick = self.state.current_tick;
        self.state.ready.admit(tick, &self.state.processes);

        let runner = match self.state.running.filter(|id| self.is_eligible(*id, tick)) {
            Some(id) => Some(id),
            None => {
                let next = self.state.ready.pop_next();
                self.switch_to(next);
                next
            }
        };

        let Some(id) = runner else {
            self.state.current_tick += 1;
            debug!(tick, "CPU idle");
            return TickOutcome::Idle { tick };
        };

        // A fresh quantum takes its length from the quantum in force right now
        if self.state.quantum_used == 0 {
            self.state.slice = self.quantum.ticks();
        }

        let Some((remaining, finished)) = self.state.processes.get_mut(&id).map(|process| {
            let remaining = process.run_one_tick();
            let record = (remaining == 0).then(|| CompletedRecord::new(process, tick + 1));
            (remaining, record)
        }) else {
            // Unreachable while the runner cannot be removed
            self.switch_to(None);
            self.state.current_tick += 1;
            return TickOutcome::Idle { tick };
        };

        self.state.trace.push(TraceEntry {
            process_id: id,
            tick,
        });
        self.state.quantum_used += 1;
        self.state.current_tick += 1;
        let now = self.state.current_tick;

        debug!(
            tick,
            process = id,
            remaining,
            quantum_used = self.state.quantum_used,
            "Process ran"
        );

        if let Some(record) = finished {
            info!(
                process = id,
                name = %record.name,
                completion_time = record.completion_time,
                turnaround_time = record.turnaround_time,
                waiting_time = record.waiting_time,
                "Process completed"
            );
            self.state.completed.push(record);

            let next = self.state.ready.advance(id, now, &self.state.processes);
            self.switch_to(next);
            if self.state.all_finished() {
                info!(tick = now, "All processes completed");
            }
            return TickOutcome::ProcessCompleted {
                process_id: id,
                tick,
                next,
            };
        }

        if self.state.quantum_used >= self.state.slice {
            let next = self.state.ready.advance(id, now, &self.state.processes);
            debug!(process = id, next = ?next, tick = now, "Quantum expired");
            self.switch_to(next);
            return TickOutcome::Preempted {
                process_id: id,
                tick,
                next,
            };
        }

        TickOutcome::Ran {
            process_id: id,
            tick,
        }
    }

    /// Tick until every process has finished or `max_ticks` ticks have run
    ///
    /// Returns true if the simulation reached its terminal state.
    pub fn run_until_complete(&mut self, max_ticks: Tick) -> bool {
        for _ in 0..max_ticks {
            if self.tick() == TickOutcome::AlreadyComplete {
                return true;
            }
        }
        self.state.all_finished()
    }

    /// Hand the CPU to `next`; its quantum starts on its first tick
    fn switch_to(&mut self, next: Option<ProcessId>) {
        self.state.running = next;
        self.state.quantum_used = 0;
    }

    fn is_eligible(&self, id: ProcessId, tick: Tick) -> bool {
        self.state
            .processes
            .get(&id)
            .is_some_and(|p| p.is_eligible_at(tick))
    }
}
