//! Simulation engine for SKYSHIELD.
//!
//! Owns the hecs ECS world, runs the per-frame systems pipeline,
//! and produces GameStateSnapshots for the presentation layer.

pub mod clock;
pub mod engine;
pub mod rules;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use skyshield_core as core;
pub use clock::{Clock, FrameDriver, ManualClock, SystemClock};
pub use engine::{SimConfig, SimulationEngine};
