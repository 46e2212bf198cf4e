/*!
 * Process Types
 * Process model, external definitions and read-only snapshots
 */

use crate::core::types::{ProcessId, Tick};
use serde::{Deserialize, Serialize};

/// Process definition as supplied by the presentation layer or a config file
///
/// Fields are signed so that out-of-range input reaches validation instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    pub name: String,
    pub burst_time: i64,
    #[serde(default)]
    pub arrival_time: i64,
}

impl ProcessDefinition {
    pub fn new(name: impl Into<String>, burst_time: i64, arrival_time: i64) -> Self {
        Self {
            name: name.into(),
            burst_time,
            arrival_time,
        }
    }
}

/// Simulated process
///
/// `remaining_time` is only ever decremented by the engine's tick and restored
/// by a reset; `0 <= remaining_time <= burst_time` holds throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: ProcessId,
    name: String,
    arrival_time: Tick,
    burst_time: Tick,
    remaining_time: Tick,
}

impl Process {
    pub(crate) fn new(id: ProcessId, name: String, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id,
            name,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
        }
    }

    #[inline]
    pub fn id(&self) -> ProcessId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    /// Arrived by `tick` and still has work left
    #[inline]
    pub fn is_eligible_at(&self, tick: Tick) -> bool {
        self.arrival_time <= tick && self.remaining_time > 0
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Consume one tick of CPU, returns the remaining time afterwards
    pub(crate) fn run_one_tick(&mut self) -> Tick {
        debug_assert!(
            self.remaining_time > 0,
            "process {} ran with no remaining time",
            self.id
        );
        self.remaining_time = self.remaining_time.saturating_sub(1);
        self.remaining_time
    }

    pub(crate) fn restore(&mut self) {
        self.remaining_time = self.burst_time;
    }

    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            id: self.id,
            name: self.name.clone(),
            burst_time: self.burst_time,
            remaining_time: self.remaining_time,
            arrival_time: self.arrival_time,
        }
    }
}

/// Read-only view of a process for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub id: ProcessId,
    pub name: String,
    pub burst_time: Tick,
    pub remaining_time: Tick,
    pub arrival_time: Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_and_restore() {
        let mut process = Process::new(1, "P1".to_string(), 2, 3);
        assert!(!process.is_eligible_at(1));
        assert!(process.is_eligible_at(2));

        assert_eq!(process.run_one_tick(), 2);
        assert_eq!(process.run_one_tick(), 1);
        assert_eq!(process.run_one_tick(), 0);
        assert!(process.is_finished());
        assert!(!process.is_eligible_at(10));

        process.restore();
        assert_eq!(process.remaining_time(), 3);
    }

    #[test]
    fn test_definition_defaults_arrival() {
        let def: ProcessDefinition =
            serde_json::from_str(r#"{"name":"P9","burst_time":4}"#).unwrap();
        assert_eq!(def, ProcessDefinition::new("P9", 4, 0));
    }
}
