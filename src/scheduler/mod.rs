/*!
 * Scheduler Module
 * Ready-queue rotation and round-robin policy types
 */

pub mod queue;
pub mod types;

// Re-export public API
pub use queue::ReadyQueue;
pub use types::{EngineStatus, TimeQuantum};
