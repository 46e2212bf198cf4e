/*!
 * Round-Robin Simulator - Main Entry Point
 *
 * Loads a workload, plays it back tick by tick and prints the schedule:
 * - Gantt segments
 * - Per-process completion table
 * - Average turnaround and waiting time
 */

use anyhow::Context;
use rr_sim::{init_tracing, Engine, EngineSnapshot, Player, SharedEngine, SimulationConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SimulationConfig::from_env().context("Failed to load simulation config")?;
    info!(
        quantum = config.quantum,
        tick_interval_ms = config.tick_interval_ms,
        processes = config.processes.len(),
        "Simulation configured"
    );

    let engine = Engine::from_config(&config).context("Failed to build engine")?;
    let shared = SharedEngine::new(engine);

    let (player, mut handle) = Player::new(shared.clone(), config.tick_interval());
    let player_task = tokio::spawn(player.run());

    handle.play().await?;
    info!("Playback started, press Ctrl+C to stop");

    tokio::select! {
        finished = handle.wait_until_finished() => {
            let status = finished?;
            info!(tick = status.tick, "Simulation finished");
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, stopping playback");
        }
    }

    handle.shutdown().await?;
    player_task.await.context("Player task panicked")?;

    print_report(&shared.snapshot());
    Ok(())
}

fn print_report(snapshot: &EngineSnapshot) {
    let name_of = |id| {
        snapshot
            .processes
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    };

    println!("Gantt chart (quantum {}):", snapshot.quantum);
    for segment in rr_sim::engine::gantt_segments(&snapshot.trace) {
        println!(
            "  {:>4} - {:<4} {}",
            segment.start,
            segment.end,
            name_of(segment.process_id)
        );
    }

    println!();
    println!(
        "{:<8} {:>8} {:>6} {:>11} {:>11} {:>8}",
        "Process", "Arrival", "Burst", "Completion", "Turnaround", "Waiting"
    );
    for record in &snapshot.completed {
        println!(
            "{:<8} {:>8} {:>6} {:>11} {:>11} {:>8}",
            record.name,
            record.arrival_time,
            record.burst_time,
            record.completion_time,
            record.turnaround_time,
            record.waiting_time
        );
    }

    println!();
    println!(
        "Average turnaround time: {:.2}",
        snapshot.statistics.average_turnaround
    );
    println!(
        "Average waiting time:    {:.2}",
        snapshot.statistics.average_waiting
    );
    if snapshot.completed.len() < snapshot.processes.len() {
        println!(
            "Stopped at tick {} with {} of {} processes completed",
            snapshot.current_tick,
            snapshot.completed.len(),
            snapshot.processes.len()
        );
    }
}
