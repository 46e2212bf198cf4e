/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier, assigned by the engine starting at 1
pub type ProcessId = u32;

/// Discrete simulated time unit
pub type Tick = u64;

/// Common result type for scheduler commands
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;
