//! Time sources and the frame driver.
//!
//! The host calls [`FrameDriver::frame`] once per display refresh. The
//! driver measures elapsed time with an injectable [`Clock`], so tests can
//! step the simulation with exact frame durations.

use std::time::Instant;

use skyshield_core::state::GameStateSnapshot;

use crate::engine::SimulationEngine;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-advanced clock for tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now_ms
    }
}

/// Drives one simulation tick per frame from clock deltas.
pub struct FrameDriver<C: Clock> {
    clock: C,
    last_ms: Option<f64>,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_ms: None,
        }
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Run one tick if the session is running.
    ///
    /// Returns `None` when nothing was scheduled (menu, paused or ended).
    /// The first frame after such a gap ticks with zero elapsed time, so
    /// time spent paused never reaches the simulation.
    pub fn frame(&mut self, engine: &mut SimulationEngine) -> Option<GameStateSnapshot> {
        if !engine.is_running() {
            self.last_ms = None;
            return None;
        }

        let now = self.clock.now_ms();
        let elapsed = match self.last_ms {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now);

        Some(engine.tick(elapsed))
    }
}
