/*!
 * Process Module
 * Process model and definition validation
 */

pub mod types;
pub(crate) mod validation;

// Re-export for convenience
pub use types::{Process, ProcessDefinition, ProcessSnapshot};
