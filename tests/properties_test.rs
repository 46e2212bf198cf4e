/*!
 * Scheduler Property Tests
 * Invariants that must hold for any workload and quantum
 */

use proptest::prelude::*;
use rr_sim::{Engine, EngineStatus, ProcessDefinition, TimeQuantum};
use std::collections::HashSet;

fn workload() -> impl Strategy<Value = (u64, Vec<(i64, i64)>)> {
    (1u64..6, prop::collection::vec((1i64..10, 0i64..15), 1..8))
}

fn build(quantum: u64, defs: &[(i64, i64)]) -> Engine {
    Engine::with_processes(
        TimeQuantum::new(quantum).unwrap(),
        defs.iter()
            .enumerate()
            .map(|(i, &(burst, arrival))| ProcessDefinition::new(format!("P{}", i + 1), burst, arrival)),
    )
    .unwrap()
}

fn budget(defs: &[(i64, i64)]) -> u64 {
    defs.iter().map(|&(burst, arrival)| (burst + arrival) as u64).sum::<u64>() + 1
}

proptest! {
    #[test]
    fn prop_burst_is_conserved_every_tick((quantum, defs) in workload()) {
        let mut engine = build(quantum, &defs);
        let total_burst: u64 = engine.processes().map(|p| p.burst_time()).sum();

        for _ in 0..budget(&defs) {
            engine.tick();
            let remaining: u64 = engine.processes().map(|p| p.remaining_time()).sum();
            prop_assert_eq!(total_burst, remaining + engine.trace().len() as u64);
            for process in engine.processes() {
                prop_assert!(process.remaining_time() <= process.burst_time());
            }
        }
        prop_assert_eq!(engine.status(), EngineStatus::Completed);
    }

    #[test]
    fn prop_each_process_completes_once((quantum, defs) in workload()) {
        let mut engine = build(quantum, &defs);
        prop_assert!(engine.run_until_complete(budget(&defs)));

        let ids: HashSet<u32> = engine.completed().iter().map(|r| r.process_id).collect();
        prop_assert_eq!(ids.len(), defs.len());
        prop_assert_eq!(engine.completed().len(), defs.len());
    }

    #[test]
    fn prop_waiting_time_is_non_negative((quantum, defs) in workload()) {
        let mut engine = build(quantum, &defs);
        engine.run_until_complete(budget(&defs));

        for record in engine.completed() {
            prop_assert!(record.waiting_time >= 0);
            prop_assert_eq!(
                record.turnaround_time,
                record.completion_time - record.arrival_time
            );
        }
    }

    #[test]
    fn prop_trace_is_ordered_and_respects_arrival((quantum, defs) in workload()) {
        let mut engine = build(quantum, &defs);
        engine.run_until_complete(budget(&defs));

        let trace = engine.trace();
        for pair in trace.windows(2) {
            prop_assert!(pair[0].tick < pair[1].tick);
        }
        for entry in trace {
            let process = engine.process(entry.process_id).unwrap();
            prop_assert!(entry.tick >= process.arrival_time());
        }
    }

    #[test]
    fn prop_no_run_exceeds_quantum((quantum, defs) in workload()) {
        let mut engine = build(quantum, &defs);
        engine.run_until_complete(budget(&defs));

        let completion_of = |id: u32| {
            engine
                .completed()
                .iter()
                .find(|r| r.process_id == id)
                .map(|r| r.completion_time)
        };

        let mut streak = 0u64;
        let mut last: Option<(u32, u64)> = None;
        for entry in engine.trace() {
            match last {
                Some((id, tick)) if id == entry.process_id && tick + 1 == entry.tick => streak += 1,
                _ => streak = 1,
            }
            last = Some((entry.process_id, entry.tick));

            // Crossing a slice boundary is only legal when nobody else was waiting
            if streak > quantum && (streak - 1) % quantum == 0 {
                let waiting = defs
                    .iter()
                    .enumerate()
                    .map(|(i, &(_, arrival))| (i as u32 + 1, arrival as u64))
                    .filter(|&(id, arrival)| id != entry.process_id && arrival <= entry.tick)
                    .filter(|&(id, _)| completion_of(id).is_some_and(|done| done > entry.tick))
                    .count();
                prop_assert_eq!(waiting, 0);
            }
        }
    }

    #[test]
    fn prop_reset_replays_identically((quantum, defs) in workload(), partial in 0u64..20) {
        let mut engine = build(quantum, &defs);
        engine.run_until_complete(partial);

        engine.reset();
        let once = engine.state().clone();
        engine.reset();
        prop_assert_eq!(engine.state(), &once);

        let mut fresh = build(quantum, &defs);
        fresh.run_until_complete(budget(&defs));
        engine.run_until_complete(budget(&defs));
        prop_assert_eq!(engine.trace(), fresh.trace());
    }

    #[test]
    fn prop_same_arrival_starts_in_id_order(quantum in 1u64..5, bursts in prop::collection::vec(1i64..6, 2..6)) {
        let defs: Vec<(i64, i64)> = bursts.iter().map(|&b| (b, 0)).collect();
        let mut engine = build(quantum, &defs);
        engine.run_until_complete(budget(&defs));

        let mut first_seen = Vec::new();
        for entry in engine.trace() {
            if !first_seen.contains(&entry.process_id) {
                first_seen.push(entry.process_id);
            }
        }
        let expected: Vec<u32> = (1..=defs.len() as u32).collect();
        prop_assert_eq!(first_seen, expected);
    }
}
