//! SKYSHIELD host shell.
//!
//! Wires the simulation into a host: a game-loop thread fed by a command
//! channel, a shared latest-snapshot slot for polling, and a simple
//! autopilot used by the headless runner.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use skyshield_core as core;
