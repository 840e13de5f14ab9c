//! Per-session bookkeeping that lives outside the ECS world.

use skyshield_core::enums::GameState;
use skyshield_core::state::SessionStats;

/// Mutable session state shared by the tick pipeline.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: GameState,
    /// Freezes the pipeline without touching `state`. Only set while playing.
    pub paused: bool,
    /// Never decreases while playing.
    pub score: u32,
    /// Time accumulated toward the next enemy spawn.
    pub spawn_accumulator_ms: f64,
    pub stats: SessionStats,
}

impl Session {
    /// Fresh playing session.
    pub fn playing() -> Self {
        Self {
            state: GameState::Playing,
            ..Self::default()
        }
    }

    /// Whether the tick pipeline should advance.
    pub fn is_running(&self) -> bool {
        self.state == GameState::Playing && !self.paused
    }
}
