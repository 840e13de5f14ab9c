//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_FRAME_MS;

/// 2D position in play-field space (pixels).
/// Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Play-field dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of pipeline ticks run this session.
    pub tick: u64,
    /// Simulated milliseconds elapsed this session (paused time excluded).
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Point at `t` along the segment from `self` to `other`. `t` is not clamped.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        Position(self.0.lerp(other.0, t))
    }

    /// Translate by a fixed offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position(self.0 + DVec2::new(dx, dy))
    }
}

impl PlayField {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_FIELD_WIDTH,
            height: crate::constants::DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl SimTime {
    /// Advance by one tick of `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += elapsed_ms;
    }
}

/// Convert an elapsed wall duration into reference-frame units.
///
/// All per-tick rates are expressed "per reference frame", so apparent
/// speed does not depend on the host's refresh rate.
pub fn time_scale(elapsed_ms: f64) -> f64 {
    elapsed_ms / REFERENCE_FRAME_MS
}
