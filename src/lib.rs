/*!
 * Round-Robin Scheduling Simulator
 * Deterministic tick-by-tick CPU time-sharing simulation exposed as a library
 */

pub mod config;
pub mod core;
pub mod engine;
pub mod monitoring;
pub mod playback;
pub mod process;
pub mod scheduler;
pub mod stats;

// Re-exports
pub use crate::core::{
    ConfigError, PlaybackError, ProcessId, SchedulerError, SchedulerResult, Tick,
};
pub use config::SimulationConfig;
pub use engine::{
    CompletedRecord, Engine, EngineSnapshot, EngineState, GanttSegment, TickOutcome, TraceEntry,
};
pub use monitoring::init_tracing;
pub use playback::{PlaybackCommand, PlaybackHandle, PlaybackStatus, Player, SharedEngine};
pub use process::{Process, ProcessDefinition, ProcessSnapshot};
pub use scheduler::{EngineStatus, ReadyQueue, TimeQuantum};
pub use stats::Statistics;
