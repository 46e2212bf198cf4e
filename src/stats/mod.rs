/*!
 * Scheduler Statistics
 * Aggregate turnaround and waiting time over completed processes
 */

use crate::engine::CompletedRecord;
use serde::{Deserialize, Serialize};

/// Averages over the processes completed so far
///
/// Both averages are `0.0` while nothing has completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub completed: usize,
    pub average_turnaround: f64,
    pub average_waiting: f64,
}

impl Statistics {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.completed == 0
    }
}

/// Compute averages from completion records
pub fn calculate(records: &[CompletedRecord]) -> Statistics {
    if records.is_empty() {
        return Statistics::default();
    }

    let count = records.len() as f64;
    let turnaround: u64 = records.iter().map(|r| r.turnaround_time).sum();
    let waiting: i64 = records.iter().map(|r| r.waiting_time).sum();

    Statistics {
        completed: records.len(),
        average_turnaround: turnaround as f64 / count,
        average_waiting: waiting as f64 / count,
    }
}
