/*!
 * Ready Queue
 * Explicit round-robin rotation of arrived, unfinished processes
 */

use crate::core::types::{ProcessId, Tick};
use crate::process::Process;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::debug;

/// Round-robin rotation
///
/// The rotation never holds the running process. Ids enter it in exactly two
/// ways: admission of new arrivals (ordered by arrival time, then id) and
/// re-entry of a preempted runner behind anything admitted at the same switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    rotation: VecDeque<ProcessId>,
    // Ids that have entered the rotation at least once since the last clear
    admitted: BTreeSet<ProcessId>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every not-yet-admitted process that has arrived by `tick`
    ///
    /// Returns the ids admitted by this call, in admission order.
    pub fn admit(&mut self, tick: Tick, processes: &BTreeMap<ProcessId, Process>) -> Vec<ProcessId> {
        let arrivals = self.pending_arrivals(tick, processes);
        for &id in &arrivals {
            self.admitted.insert(id);
            self.rotation.push_back(id);
        }

        if !arrivals.is_empty() {
            debug!(tick, admitted = ?arrivals, "Processes joined the ready queue");
        }
        arrivals
    }

    /// Arrived, unfinished processes not yet admitted, in tie-break order
    pub fn pending_arrivals(
        &self,
        tick: Tick,
        processes: &BTreeMap<ProcessId, Process>,
    ) -> Vec<ProcessId> {
        let mut arrivals: Vec<&Process> = processes
            .values()
            .filter(|p| !self.admitted.contains(&p.id()) && p.is_eligible_at(tick))
            .collect();
        arrivals.sort_by(|a, b| {
            a.arrival_time()
                .cmp(&b.arrival_time())
                .then_with(|| a.id().cmp(&b.id()))
        });
        arrivals.into_iter().map(Process::id).collect()
    }

    /// Pick the next runner after `prev` finished or was preempted at `tick`
    ///
    /// New arrivals are admitted first, so a preempted `prev` re-joins behind
    /// them. Returns `None` when the rotation is empty.
    pub fn advance(
        &mut self,
        prev: ProcessId,
        tick: Tick,
        processes: &BTreeMap<ProcessId, Process>,
    ) -> Option<ProcessId> {
        self.admit(tick, processes);

        if processes.get(&prev).is_some_and(|p| !p.is_finished()) {
            self.rotation.push_back(prev);
        }

        self.pop_next()
    }

    /// Take the head of the rotation
    #[inline]
    pub fn pop_next(&mut self) -> Option<ProcessId> {
        self.rotation.pop_front()
    }

    /// Drop a process from the rotation and forget it was ever admitted
    pub fn remove(&mut self, id: ProcessId) -> bool {
        self.admitted.remove(&id);
        match self.rotation.iter().position(|&queued| queued == id) {
            Some(pos) => {
                self.rotation.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.rotation.clear();
        self.admitted.clear();
    }

    #[inline]
    pub fn contains(&self, id: ProcessId) -> bool {
        self.rotation.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.rotation.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rotation.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rotation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(defs: &[(ProcessId, Tick, Tick)]) -> BTreeMap<ProcessId, Process> {
        defs.iter()
            .map(|&(id, arrival, burst)| (id, Process::new(id, format!("P{id}"), arrival, burst)))
            .collect()
    }

    #[test]
    fn test_admit_orders_by_arrival_then_id() {
        let processes = table(&[(1, 2, 3), (2, 0, 3), (3, 2, 3), (4, 5, 3)]);
        let mut queue = ReadyQueue::new();

        assert_eq!(queue.admit(2, &processes), vec![2, 1, 3]);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 1, 3]);

        // Already admitted ids are never appended twice
        assert!(queue.admit(2, &processes).is_empty());
        assert_eq!(queue.admit(5, &processes), vec![4]);
    }

    #[test]
    fn test_advance_puts_arrivals_before_preempted() {
        let processes = table(&[(1, 0, 8), (2, 1, 4), (3, 2, 9)]);
        let mut queue = ReadyQueue::new();
        queue.admit(0, &processes);
        assert_eq!(queue.pop_next(), Some(1));

        assert_eq!(queue.advance(1, 3, &processes), Some(2));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_advance_single_process_reselects_it() {
        let processes = table(&[(1, 0, 8)]);
        let mut queue = ReadyQueue::new();
        queue.admit(0, &processes);
        assert_eq!(queue.pop_next(), Some(1));
        assert_eq!(queue.advance(1, 3, &processes), Some(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_advance_skips_finished_process() {
        let mut processes = table(&[(1, 0, 1), (2, 0, 2)]);
        let mut queue = ReadyQueue::new();
        queue.admit(0, &processes);
        assert_eq!(queue.pop_next(), Some(1));

        processes.get_mut(&1).unwrap().run_one_tick();
        assert_eq!(queue.advance(1, 1, &processes), Some(2));
        assert!(!queue.contains(1));
        assert_eq!(queue.advance(2, 2, &processes), Some(2));
    }

    #[test]
    fn test_remove_and_readmit() {
        let processes = table(&[(1, 0, 2), (2, 0, 2)]);
        let mut queue = ReadyQueue::new();
        queue.admit(0, &processes);

        assert!(queue.remove(2));
        assert!(!queue.remove(2));
        assert_eq!(queue.len(), 1);

        // Forgotten ids are admitted again if they are still in the table
        assert_eq!(queue.admit(0, &processes), vec![2]);
    }

    #[test]
    fn test_empty_rotation() {
        let processes = table(&[(1, 4, 2)]);
        let mut queue = ReadyQueue::new();
        assert!(queue.admit(3, &processes).is_empty());
        assert_eq!(queue.pop_next(), None);
        assert_eq!(queue.pending_arrivals(4, &processes), vec![1]);
    }
}
