/*!
 * Process Definition Validation
 * Reject malformed definitions before they reach the engine
 */

use super::types::ProcessDefinition;
use crate::core::errors::SchedulerError;
use crate::core::types::{SchedulerResult, Tick};

/// Validated definition, ready to be turned into a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidDefinition {
    pub name: String,
    pub arrival_time: Tick,
    pub burst_time: Tick,
}

/// Validate a process definition
pub(crate) fn validate_definition(def: &ProcessDefinition) -> SchedulerResult<ValidDefinition> {
    if def.name.is_empty() {
        return Err(SchedulerError::InvalidProcessDefinition(
            "Process name cannot be empty".to_string(),
        ));
    }

    if def.burst_time <= 0 {
        return Err(SchedulerError::InvalidProcessDefinition(format!(
            "Burst time must be positive, got {}",
            def.burst_time
        )));
    }

    if def.arrival_time < 0 {
        return Err(SchedulerError::InvalidProcessDefinition(format!(
            "Arrival time cannot be negative, got {}",
            def.arrival_time
        )));
    }

    Ok(ValidDefinition {
        name: def.name.clone(),
        arrival_time: def.arrival_time as Tick,
        burst_time: def.burst_time as Tick,
    })
}
