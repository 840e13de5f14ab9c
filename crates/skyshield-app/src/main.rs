//! Headless SKYSHIELD runner.
//!
//! Plays one session with the autopilot at a fixed 60 Hz step, as fast as
//! possible, and logs the outcome. Useful for balancing the difficulty curve.
//!
//! Usage: `skyshield [config.json]`

use anyhow::Context;

use skyshield_app::autopilot;
use skyshield_core::constants::REFERENCE_FRAME_MS;
use skyshield_sim::{SimConfig, SimulationEngine};

/// Frames between autopilot shots.
const FIRE_COOLDOWN_FRAMES: u32 = 20;

/// Give up after ten simulated minutes.
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => SimConfig::default(),
    };
    log::info!("SKYSHIELD headless run, config {:?}", config);

    let mut engine = SimulationEngine::new(config)?;
    engine.start();

    let mut cooldown = 0u32;
    let mut snapshot = engine.tick(0.0);
    for _ in 0..MAX_FRAMES {
        if snapshot.state.is_terminal() {
            break;
        }
        if cooldown == 0 {
            if let Some(aim) = autopilot::choose_aim(&snapshot) {
                if engine.fire(aim.x(), aim.y()).is_some() {
                    cooldown = FIRE_COOLDOWN_FRAMES;
                }
            }
        } else {
            cooldown -= 1;
        }
        snapshot = engine.tick(REFERENCE_FRAME_MS);
    }

    log::info!(
        "finished: {:?} with score {} after {:.1}s",
        snapshot.state,
        snapshot.score,
        snapshot.time.elapsed_ms / 1000.0
    );
    println!("{}", serde_json::to_string_pretty(&snapshot.stats)?);
    Ok(())
}
