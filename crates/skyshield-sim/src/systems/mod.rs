//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the session. They own no state; run order is fixed by the engine.

pub mod blast;
pub mod collision;
pub mod fire_control;
pub mod impact;
pub mod motion;
pub mod recoil;
pub mod snapshot;
pub mod spawner;
