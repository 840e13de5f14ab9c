//! Simple autopilot for headless runs.
//!
//! Aims just ahead of the enemy closest to impact, skipping enemies that are
//! already covered by an interceptor in flight or a live blast.

use skyshield_core::enums::BlastKind;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::Position;

/// Distance within which an enemy counts as already covered.
const COVER_RADIUS: f64 = 60.0;

/// Extra path fraction to lead the target by.
const LEAD_PROGRESS: f64 = 0.04;

/// Pick an aim point, or `None` when every enemy is already handled.
pub fn choose_aim(snapshot: &GameStateSnapshot) -> Option<Position> {
    let covered = |pos: &Position| {
        snapshot
            .interceptors
            .iter()
            .any(|i| i.target.distance_to(pos) < COVER_RADIUS)
            || snapshot
                .blasts
                .iter()
                .filter(|b| b.kind != BlastKind::Secondary)
                .any(|b| b.position.distance_to(pos) < b.max_radius)
    };

    snapshot
        .enemies
        .iter()
        .map(|e| e.start.lerp(&e.target, (e.progress + LEAD_PROGRESS).min(1.0)))
        .filter(|aim| !covered(aim))
        .max_by(|a, b| a.y().total_cmp(&b.y()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshield_core::enums::BlastPhase;
    use skyshield_core::state::{BlastView, ProjectileView};

    fn enemy(id: u64, x: f64, progress: f64) -> ProjectileView {
        let start = Position::new(x, 0.0);
        let target = Position::new(x, 500.0);
        ProjectileView {
            id,
            position: start.lerp(&target, progress),
            start,
            target,
            progress,
        }
    }

    #[test]
    fn test_no_enemies_no_aim() {
        assert!(choose_aim(&GameStateSnapshot::default()).is_none());
    }

    #[test]
    fn test_aims_ahead_of_lowest_enemy() {
        let snapshot = GameStateSnapshot {
            enemies: vec![enemy(1, 100.0, 0.2), enemy(2, 600.0, 0.5)],
            ..Default::default()
        };
        let aim = choose_aim(&snapshot).unwrap();
        assert_eq!(aim.x(), 600.0);
        assert!((aim.y() - 500.0 * (0.5 + LEAD_PROGRESS)).abs() < 1e-9);
    }

    #[test]
    fn test_skips_covered_enemy() {
        let snapshot = GameStateSnapshot {
            enemies: vec![enemy(1, 100.0, 0.2), enemy(2, 600.0, 0.5)],
            blasts: vec![BlastView {
                id: 9,
                position: Position::new(600.0, 270.0),
                kind: BlastKind::Interceptor,
                phase: BlastPhase::Expanding,
                radius: 10.0,
                max_radius: 80.0,
                age_ms: 0.0,
            }],
            ..Default::default()
        };
        let aim = choose_aim(&snapshot).unwrap();
        assert_eq!(aim.x(), 100.0);
    }
}
