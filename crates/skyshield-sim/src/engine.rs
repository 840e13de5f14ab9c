//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world (the entity registry) and the
//! session, applies player commands immediately, runs the tick pipeline and
//! produces `GameStateSnapshot`s. Completely headless, so tests can drive
//! it with exact frame durations.

use std::path::Path;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::constants::DEFAULT_MAX_FRAME_MS;
use skyshield_core::enums::{BatterySlot, GameState};
use skyshield_core::error::{SimError, SimResult};
use skyshield_core::events::SimEvent;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{PlayField, Position, SimTime};

use crate::session::Session;
use crate::systems;
use crate::world_setup::{self, Layout};

/// Configuration for a simulation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. `None` seeds from entropy, so every run plays differently.
    pub seed: Option<u64>,
    /// Initial play-field width in pixels.
    pub width: f64,
    /// Initial play-field height in pixels.
    pub height: f64,
    /// Longest frame fed into one tick; longer gaps are truncated.
    pub max_frame_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        let field = PlayField::default();
        Self {
            seed: None,
            width: field.width,
            height: field.height,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
        }
    }
}

impl SimConfig {
    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn field(&self) -> PlayField {
        PlayField::new(self.width, self.height)
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.field().is_valid() {
            return Err(SimError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.max_frame_ms.is_finite() && self.max_frame_ms > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "max_frame_ms must be positive, got {}",
                self.max_frame_ms
            )));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    session: Session,
    field: PlayField,
    layout: Layout,
    rng: ChaCha8Rng,
    max_frame_ms: f64,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine in the menu state with the ground layout seeded.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let field = config.field();
        let mut world = World::new();
        let layout = world_setup::setup_session(&mut world, field);

        Ok(Self {
            world,
            time: SimTime::default(),
            session: Session::default(),
            field,
            layout,
            rng,
            max_frame_ms: config.max_frame_ms,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Begin a session. Same as [`restart`](Self::restart).
    pub fn start(&mut self) {
        self.restart();
    }

    /// Reinitialize everything: score 0, projectiles and blasts cleared,
    /// cities and batteries rebuilt from the current play field.
    pub fn restart(&mut self) {
        self.layout = world_setup::setup_session(&mut self.world, self.field);
        self.session = Session::playing();
        self.time = SimTime::default();
        self.events.clear();
        self.events.push(SimEvent::SessionStarted);
        log::info!(
            "session started on {}x{} field",
            self.field.width,
            self.field.height
        );
    }

    /// Launch interceptors at a play-field point from the nearest ready battery.
    ///
    /// Ignored unless playing and unpaused. Returns the battery that fired.
    pub fn fire(&mut self, x: f64, y: f64) -> Option<BatterySlot> {
        if !self.session.is_running() {
            return None;
        }
        systems::fire_control::fire(
            &mut self.world,
            &self.layout,
            &mut self.session,
            &mut self.events,
            Position::new(x, y),
        )
    }

    /// Freeze or resume the pipeline. Only legal while playing; returns
    /// whether the request was applied.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.session.state != GameState::Playing {
            return false;
        }
        self.session.paused = paused;
        true
    }

    /// Recompute the ground layout for new play-field dimensions.
    pub fn resize(&mut self, width: f64, height: f64) -> SimResult<()> {
        let field = PlayField::new(width, height);
        if !field.is_valid() {
            log::warn!("ignoring invalid play-field size {width}x{height}");
            return Err(SimError::InvalidDimensions { width, height });
        }
        self.field = field;
        world_setup::relayout(&mut self.world, &self.layout, field);
        log::info!("play field resized to {width}x{height}");
        Ok(())
    }

    /// Apply a player command immediately.
    pub fn apply(&mut self, command: PlayerCommand) -> SimResult<()> {
        match command {
            PlayerCommand::Start => self.start(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::Fire { x, y } => {
                self.fire(x, y);
            }
            PlayerCommand::SetPaused { paused } => {
                self.set_paused(paused);
            }
            PlayerCommand::Resize { width, height } => self.resize(width, height)?,
        }
        Ok(())
    }

    /// Advance the simulation by `elapsed_ms` and return the resulting snapshot.
    ///
    /// Does nothing but snapshot while not playing or while paused.
    pub fn tick(&mut self, elapsed_ms: f64) -> GameStateSnapshot {
        if self.session.is_running() {
            let elapsed = if elapsed_ms.is_finite() {
                elapsed_ms.clamp(0.0, self.max_frame_ms)
            } else {
                0.0
            };
            self.run_systems(elapsed);
            self.time.advance(elapsed);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.session, self.field, events)
    }

    /// Snapshot without advancing. Pending events are included but not drained.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.session,
            self.field,
            self.events.clone(),
        )
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn is_paused(&self) -> bool {
        self.session.paused
    }

    /// Whether the next tick will advance the pipeline.
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn field(&self) -> PlayField {
        self.field
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Run the pipeline in its fixed order.
    fn run_systems(&mut self, elapsed_ms: f64) {
        // 1. Spawner
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.layout,
            self.field,
            elapsed_ms,
        );
        // 2. Motion
        systems::motion::run(&mut self.world, elapsed_ms);
        // 3. Impacts and interceptor arrivals
        systems::impact::run(
            &mut self.world,
            &self.layout,
            &mut self.session,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::impact::detonate_interceptors(&mut self.world, &mut self.despawn_buffer);
        // 4. Blast lifecycle
        systems::blast::run(&mut self.world, elapsed_ms, &mut self.despawn_buffer);
        // 5. Collisions (may win the session)
        systems::collision::run(
            &mut self.world,
            &mut self.session,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Recoil decay
        systems::recoil::run(&mut self.world, elapsed_ms);
        // 7. Loss check
        self.check_loss();
    }

    fn check_loss(&mut self) {
        if self.session.state == GameState::Playing
            && world_setup::all_batteries_destroyed(&self.world)
        {
            self.session.state = GameState::Lost;
            log::info!("all batteries destroyed, session lost at {}", self.session.score);
            self.events.push(SimEvent::GameLost {
                score: self.session.score,
            });
        }
    }
}
