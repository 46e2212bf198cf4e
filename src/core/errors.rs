/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler command errors with serialization support
///
/// Every variant is returned synchronously by the rejected command and leaves
/// the engine state untouched.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process definition: {0}")]
    #[diagnostic(
        code(scheduler::invalid_process_definition),
        help("A process needs a non-empty name, a burst time of at least 1 and a non-negative arrival time.")
    )]
    InvalidProcessDefinition(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The time quantum must be at least 1 tick. The previous quantum is kept.")
    )]
    InvalidQuantum(u64),

    #[error("Process {0} is currently running and cannot be removed")]
    #[diagnostic(
        code(scheduler::illegal_removal),
        help("Wait until the process is preempted or completes, or reset the simulation first.")
    )]
    IllegalRemoval(ProcessId),

    #[error("Process {0} not found")]
    #[diagnostic(
        code(scheduler::process_not_found),
        help("The process may have been removed or never existed. Check the process id.")
    )]
    ProcessNotFound(ProcessId),
}

/// Playback driver errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
pub enum PlaybackError {
    #[error("Playback task has stopped")]
    #[diagnostic(
        code(playback::stopped),
        help("The player was shut down or its task ended. Start a new player.")
    )]
    Stopped,
}

/// Configuration loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    #[diagnostic(
        code(config::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(
        code(config::parse),
        help("The configuration must be a JSON object with quantum, tick_interval_ms and processes.")
    )]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {key}: {reason}")]
    #[diagnostic(code(config::invalid_value))]
    InvalidValue { key: String, reason: String },
}

impl From<SchedulerError> for ConfigError {
    fn from(err: SchedulerError) -> Self {
        let key = match &err {
            SchedulerError::InvalidQuantum(_) => "quantum",
            _ => "processes",
        };
        ConfigError::InvalidValue {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }
}
