/*!
 * Simulation Configuration
 * Workload, quantum and playback cadence loaded from JSON and the environment
 *
 * Environment variables:
 * - RR_SIM_CONFIG: path to a JSON config file (default: built-in workload)
 * - RR_SIM_QUANTUM: time quantum override (ticks)
 * - RR_SIM_TICK_MS: wall-clock milliseconds between ticks while playing
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_TIME_QUANTUM, ENV_CONFIG_PATH, ENV_QUANTUM, ENV_TICK_MS,
};
use crate::process::validation::validate_definition;
use crate::process::ProcessDefinition;
use crate::scheduler::TimeQuantum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub quantum: u64,
    pub tick_interval_ms: u64,
    pub processes: Vec<ProcessDefinition>,
}

impl Default for SimulationConfig {
    /// Four processes with staggered arrivals and a 3-tick quantum
    fn default() -> Self {
        Self {
            quantum: DEFAULT_TIME_QUANTUM,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            processes: vec![
                ProcessDefinition::new("P1", 8, 0),
                ProcessDefinition::new("P2", 4, 1),
                ProcessDefinition::new("P3", 9, 2),
                ProcessDefinition::new("P4", 5, 3),
            ],
        }
    }
}

impl SimulationConfig {
    /// Load and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;

        info!(
            path = %path.display(),
            processes = config.processes.len(),
            "Loaded simulation config"
        );
        Ok(config)
    }

    /// Build a config from the environment
    ///
    /// Starts from `RR_SIM_CONFIG` when set, otherwise from the default
    /// workload, then applies the quantum and tick interval overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Some(quantum) = env_u64(ENV_QUANTUM)? {
            config.quantum = quantum;
        }
        if let Some(interval) = env_u64(ENV_TICK_MS)? {
            config.tick_interval_ms = interval;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the quantum, the tick interval and every process definition
    pub fn validate(&self) -> Result<(), ConfigError> {
        TimeQuantum::new(self.quantum)?;

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_interval_ms".to_string(),
                reason: "must be at least 1 millisecond".to_string(),
            });
        }

        // An empty workload never completes
        if self.processes.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "processes".to_string(),
                reason: "at least one process is required".to_string(),
            });
        }

        for definition in &self.processes {
            validate_definition(definition)?;
        }
        Ok(())
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn env_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
