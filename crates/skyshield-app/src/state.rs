//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Context};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in a `Mutex` so the state is `Sync`
/// - `Option` covers the time before `start_simulation`
/// - the latest snapshot is `Arc`-shared with the game loop thread
pub struct AppState {
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after every frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if it is not already running.
    pub fn start_simulation(&self, config: SimConfig) -> anyhow::Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!("{e}"))?;
        if *running {
            bail!("simulation already running");
        }

        let cmd_tx = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())
            .context("failed to start game loop")?;

        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> anyhow::Result<()> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Stop the game loop thread. No-op if it was never started.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!("{e}"))?;
        if !*running {
            return Ok(());
        }
        self.send(GameLoopCommand::Shutdown)?;
        *running = false;
        Ok(())
    }

    /// Latest snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> anyhow::Result<Option<GameStateSnapshot>> {
        let lock = self.latest_snapshot.lock().map_err(|e| anyhow!("{e}"))?;
        Ok(lock.clone())
    }

    fn send(&self, command: GameLoopCommand) -> anyhow::Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => bail!("simulation not started"),
        }
    }
}
