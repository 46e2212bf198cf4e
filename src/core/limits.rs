/*!
 * Simulation Limits and Constants
 *
 * Centralized location for defaults and bounds shared by the engine,
 * configuration loading and the playback driver.
 */

// =============================================================================
// SCHEDULING
// =============================================================================

/// Default round-robin time quantum (ticks)
pub const DEFAULT_TIME_QUANTUM: u64 = 3;

/// Smallest accepted time quantum (ticks)
pub const MIN_TIME_QUANTUM: u64 = 1;

/// First id handed out by a fresh engine
pub const FIRST_PROCESS_ID: u32 = 1;

// =============================================================================
// PLAYBACK
// =============================================================================

/// Wall-clock time between ticks while playing (milliseconds)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Tick budget for driving a workload to completion in a single call
pub const DEFAULT_MAX_TICKS: u64 = 1_000_000;

/// Capacity of the playback command channel
pub const PLAYBACK_COMMAND_CAPACITY: usize = 64;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Path to a JSON simulation config
pub const ENV_CONFIG_PATH: &str = "RR_SIM_CONFIG";

/// Time quantum override
pub const ENV_QUANTUM: &str = "RR_SIM_QUANTUM";

/// Tick interval override (milliseconds)
pub const ENV_TICK_MS: &str = "RR_SIM_TICK_MS";

/// Enable JSON log output
pub const ENV_TRACE_JSON: &str = "RR_SIM_TRACE_JSON";
