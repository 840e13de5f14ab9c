//! Game loop thread: drives the simulation at the display rate and
//! publishes snapshots.
//!
//! The engine is built on the caller's thread so config errors surface
//! before anything is spawned, then moved into the loop. Commands arrive via
//! `mpsc` and are applied immediately, ahead of the next frame. Snapshots are
//! stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Context;

use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::{FrameDriver, SimConfig, SimulationEngine, SystemClock};

use crate::state::GameLoopCommand;

/// Host refresh rate the loop paces itself to.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> anyhow::Result<mpsc::Sender<GameLoopCommand>> {
    let engine = SimulationEngine::new(config).context("invalid simulation config")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skyshield-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .context("failed to spawn game loop thread")?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut driver = FrameDriver::new(SystemClock::new());
    let mut next_frame_time = Instant::now();
    log::info!("game loop started");

    loop {
        // 1. Apply all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    if let Err(e) = engine.apply(cmd) {
                        log::warn!("command rejected: {e}");
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (skipped while paused, in the menu or ended)
        let snapshot = driver
            .frame(&mut engine)
            .unwrap_or_else(|| engine.snapshot());

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset the schedule
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshield_core::commands::PlayerCommand;
    use skyshield_core::enums::GameState;

    fn wait_for<F: Fn(&GameStateSnapshot) -> bool>(
        latest: &Mutex<Option<GameStateSnapshot>>,
        predicate: F,
    ) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if predicate(snap) {
                    return true;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SetPaused {
            paused: true,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::SetPaused { paused: true })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_applies_commands_and_publishes() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::seeded(7), latest.clone()).unwrap();

        assert!(wait_for(&latest, |s| s.state == GameState::Menu));

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        assert!(wait_for(&latest, |s| s.state == GameState::Playing
            && s.time.tick > 2));

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Fire {
            x: 400.0,
            y: 100.0,
        }))
        .unwrap();
        assert!(wait_for(&latest, |s| s.stats.shots_fired == 1));

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
