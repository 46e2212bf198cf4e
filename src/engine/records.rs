/*!
 * Engine Records
 * Trace entries, completion records and per-tick outcomes
 */

use crate::core::types::{ProcessId, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// One tick during which a process held the CPU, covering `[tick, tick + 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub process_id: ProcessId,
    pub tick: Tick,
}

/// Snapshot taken the tick a process finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRecord {
    pub process_id: ProcessId,
    pub name: String,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    /// First tick after the last running tick
    pub completion_time: Tick,
    pub turnaround_time: Tick,
    /// Signed so an accounting defect shows up as a negative value
    pub waiting_time: i64,
}

impl CompletedRecord {
    pub(crate) fn new(process: &Process, completion_time: Tick) -> Self {
        debug_assert!(
            completion_time >= process.arrival_time(),
            "process {} completed at {} before arriving at {}",
            process.id(),
            completion_time,
            process.arrival_time()
        );
        let turnaround_time = completion_time.saturating_sub(process.arrival_time());
        let waiting_time = turnaround_time as i64 - process.burst_time() as i64;
        debug_assert!(
            waiting_time >= 0,
            "process {} completed at {} with negative waiting time",
            process.id(),
            completion_time
        );

        Self {
            process_id: process.id(),
            name: process.name().to_string(),
            arrival_time: process.arrival_time(),
            burst_time: process.burst_time(),
            completion_time,
            turnaround_time,
            waiting_time,
        }
    }
}

/// Consecutive ticks of one process, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub process_id: ProcessId,
    pub start: Tick,
    pub end: Tick,
}

impl GanttSegment {
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Merge a trace into contiguous per-process segments
pub fn gantt_segments(trace: &[TraceEntry]) -> Vec<GanttSegment> {
    let mut segments: Vec<GanttSegment> = Vec::new();
    for entry in trace {
        match segments.last_mut() {
            Some(last) if last.process_id == entry.process_id && last.end == entry.tick => {
                last.end += 1;
            }
            _ => segments.push(GanttSegment {
                process_id: entry.process_id,
                start: entry.tick,
                end: entry.tick + 1,
            }),
        }
    }
    segments
}

/// What a single call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TickOutcome {
    /// No process was eligible during `tick`
    Idle { tick: Tick },
    /// `process_id` ran during `tick` and keeps the CPU
    Ran { process_id: ProcessId, tick: Tick },
    /// `process_id` ran during `tick` and used up its quantum
    Preempted {
        process_id: ProcessId,
        tick: Tick,
        next: Option<ProcessId>,
    },
    /// `process_id` ran its last tick during `tick`
    ProcessCompleted {
        process_id: ProcessId,
        tick: Tick,
        next: Option<ProcessId>,
    },
    /// Every process had already finished; nothing changed
    AlreadyComplete,
}

impl TickOutcome {
    /// Process that ran during this tick, if any
    pub fn ran(&self) -> Option<ProcessId> {
        match *self {
            Self::Ran { process_id, .. }
            | Self::Preempted { process_id, .. }
            | Self::ProcessCompleted { process_id, .. } => Some(process_id),
            Self::Idle { .. } | Self::AlreadyComplete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(process_id: ProcessId, tick: Tick) -> TraceEntry {
        TraceEntry { process_id, tick }
    }

    #[test]
    fn test_completed_record_accounting() {
        let process = Process::new(3, "P3".to_string(), 2, 9);
        let record = CompletedRecord::new(&process, 26);
        assert_eq!(record.turnaround_time, 24);
        assert_eq!(record.waiting_time, 15);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "before arriving")]
    fn test_completion_before_arrival_is_caught() {
        let process = Process::new(1, "P1".to_string(), 5, 1);
        CompletedRecord::new(&process, 3);
    }

    #[test]
    fn test_gantt_merges_contiguous_ticks() {
        let trace = [entry(1, 0), entry(1, 1), entry(2, 2), entry(1, 3)];
        let segments = gantt_segments(&trace);
        assert_eq!(
            segments,
            vec![
                GanttSegment { process_id: 1, start: 0, end: 2 },
                GanttSegment { process_id: 2, start: 2, end: 3 },
                GanttSegment { process_id: 1, start: 3, end: 4 },
            ]
        );
        assert_eq!(segments[0].len(), 2);
    }

    #[test]
    fn test_gantt_splits_on_idle_gap() {
        let trace = [entry(1, 0), entry(1, 3)];
        assert_eq!(gantt_segments(&trace).len(), 2);
    }

    #[test]
    fn test_completed_record_accounting_p4() {
        let process = Process::new(4, "P4".to_string(), 3, 5);
        let record = CompletedRecord::new(&process, 21);
        assert_eq!(record.turnaround_time, 18);
        assert_eq!(record.waiting_time, 13);
    }
}
