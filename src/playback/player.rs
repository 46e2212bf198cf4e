/*!
 * Playback Driver
 * Ticks a shared engine on a wall-clock cadence with play/pause/step control
 */

use super::shared::SharedEngine;
use crate::core::errors::PlaybackError;
use crate::core::limits::PLAYBACK_COMMAND_CAPACITY;
use crate::core::types::Tick;
use crate::engine::TickOutcome;
use crate::monitoring::span_playback;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, Instrument};

/// Control commands accepted by a running player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackCommand {
    Play,
    Pause,
    Toggle,
    /// Run exactly one tick, whether playing or paused
    Step,
    /// Pause and reset the engine
    Reset,
    Shutdown,
}

/// Published after every tick and every handled command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub playing: bool,
    pub tick: Tick,
    pub finished: bool,
}

/// Async task that drives the engine
pub struct Player {
    engine: SharedEngine,
    interval: Duration,
    commands: flume::Receiver<PlaybackCommand>,
    status: watch::Sender<PlaybackStatus>,
    playing: bool,
    ticks: u64,
}

/// Caller side of a player: command sender and status receiver
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    commands: flume::Sender<PlaybackCommand>,
    status: watch::Receiver<PlaybackStatus>,
}

impl Player {
    /// Create a paused player and its handle
    pub fn new(engine: SharedEngine, interval: Duration) -> (Self, PlaybackHandle) {
        let (command_tx, command_rx) = flume::bounded(PLAYBACK_COMMAND_CAPACITY);
        let initial = PlaybackStatus {
            playing: false,
            tick: engine.with(|e| e.current_tick()),
            finished: engine.is_complete(),
        };
        let (status_tx, status_rx) = watch::channel(initial);

        let player = Self {
            engine,
            interval,
            commands: command_rx,
            status: status_tx,
            playing: false,
            ticks: 0,
        };
        let handle = PlaybackHandle {
            commands: command_tx,
            status: status_rx,
        };
        (player, handle)
    }

    /// Run until `Shutdown` or until every handle is dropped
    pub async fn run(mut self) {
        let quantum = self.engine.with(|e| e.quantum());
        let span = span_playback(quantum, self.interval);
        self.event_loop().instrument(span.clone()).await;
        span.record("ticks", self.ticks);
    }

    async fn event_loop(&mut self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!("Player ready");

        loop {
            tokio::select! {
                command = self.commands.recv_async() => {
                    let Ok(command) = command else {
                        debug!("All playback handles dropped");
                        break;
                    };
                    if command == PlaybackCommand::Shutdown {
                        info!("Player shutting down");
                        break;
                    }
                    if self.handle(command) {
                        // First tick one full interval after pressing play
                        ticker.reset();
                    }
                }
                _ = ticker.tick(), if self.playing => {
                    self.step();
                }
            }
        }

        self.playing = false;
        self.publish();
    }

    /// Apply a command; returns true when playback (re)started
    fn handle(&mut self, command: PlaybackCommand) -> bool {
        debug!(?command, "Playback command");
        let was_playing = self.playing;

        match command {
            PlaybackCommand::Play => self.playing = !self.engine.is_complete(),
            PlaybackCommand::Pause => self.playing = false,
            PlaybackCommand::Toggle => self.playing = !self.playing && !self.engine.is_complete(),
            PlaybackCommand::Step => self.step(),
            PlaybackCommand::Reset => {
                self.playing = false;
                self.engine.reset();
            }
            PlaybackCommand::Shutdown => self.playing = false,
        }

        self.publish();
        self.playing && !was_playing
    }

    fn step(&mut self) {
        if self.engine.tick() != TickOutcome::AlreadyComplete {
            self.ticks += 1;
        }
        if self.playing && self.engine.is_complete() {
            info!("Simulation complete, pausing playback");
            self.playing = false;
        }
        self.publish();
    }

    fn publish(&self) {
        let status = self.engine.with(|e| PlaybackStatus {
            playing: self.playing,
            tick: e.current_tick(),
            finished: e.is_complete(),
        });
        self.status.send_replace(status);
    }
}

impl PlaybackHandle {
    pub async fn send(&self, command: PlaybackCommand) -> Result<(), PlaybackError> {
        self.commands
            .send_async(command)
            .await
            .map_err(|_| PlaybackError::Stopped)
    }

    pub async fn play(&self) -> Result<(), PlaybackError> {
        self.send(PlaybackCommand::Play).await
    }

    pub async fn pause(&self) -> Result<(), PlaybackError> {
        self.send(PlaybackCommand::Pause).await
    }

    pub async fn toggle(&self) -> Result<(), PlaybackError> {
        self.send(PlaybackCommand::Toggle).await
    }

    pub async fn step(&self) -> Result<(), PlaybackError> {
        self.send(PlaybackCommand::Step).await
    }

    pub async fn reset(&self) -> Result<(), PlaybackError> {
        self.send(PlaybackCommand::Reset).await
    }

    pub async fn shutdown(&self) -> Result<(), PlaybackError> {
        self.send(PlaybackCommand::Shutdown).await
    }

    /// Latest published status
    pub fn status(&self) -> PlaybackStatus {
        *self.status.borrow()
    }

    /// Wait for the next status update
    pub async fn changed(&mut self) -> Result<PlaybackStatus, PlaybackError> {
        self.status
            .changed()
            .await
            .map_err(|_| PlaybackError::Stopped)?;
        Ok(*self.status.borrow_and_update())
    }

    /// Wait until the simulation has completed
    pub async fn wait_until_finished(&mut self) -> Result<PlaybackStatus, PlaybackError> {
        let status = self
            .status
            .wait_for(|status| status.finished)
            .await
            .map_err(|_| PlaybackError::Stopped)?;
        Ok(*status)
    }
}
