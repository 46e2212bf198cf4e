/*!
 * Scheduler Types
 * Domain types for round-robin scheduling
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::{DEFAULT_TIME_QUANTUM, MIN_TIME_QUANTUM};
use crate::core::types::{ProcessId, SchedulerResult, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Time quantum in ticks
///
/// Always at least [`MIN_TIME_QUANTUM`]; the only way to build one is through
/// [`TimeQuantum::new`] (or deserialization, which validates the same way).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Tick) -> SchedulerResult<Self> {
        if ticks < MIN_TIME_QUANTUM {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_TIME_QUANTUM)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

impl Serialize for TimeQuantum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Engine state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "process_id", rename_all = "snake_case")]
pub enum EngineStatus {
    /// No eligible process (nothing arrived yet, or nothing added)
    Idle,
    /// A process holds the CPU
    Running(ProcessId),
    /// Every process has finished; ticking is a no-op
    Completed,
}

impl EngineStatus {
    #[inline]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running(_) => "running",
            Self::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_quantum_validation() {
        assert_eq!(TimeQuantum::new(0), Err(SchedulerError::InvalidQuantum(0)));
        assert_eq!(TimeQuantum::new(1).unwrap().ticks(), 1);
        assert_eq!(TimeQuantum::default().ticks(), DEFAULT_TIME_QUANTUM);
    }

    #[test]
    fn test_time_quantum_deserialize_validates() {
        let quantum: TimeQuantum = serde_json::from_str("4").unwrap();
        assert_eq!(quantum.ticks(), 4);
        assert!(serde_json::from_str::<TimeQuantum>("0").is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&EngineStatus::Running(2)).unwrap();
        assert_eq!(json, r#"{"state":"running","process_id":2}"#);
        let json = serde_json::to_string(&EngineStatus::Idle).unwrap();
        assert_eq!(json, r#"{"state":"idle"}"#);
    }
}
