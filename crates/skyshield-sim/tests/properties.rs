//! Property tests for the simulation invariants, driven through the public API.

use std::collections::HashMap;

use proptest::prelude::*;

use skyshield_core::enums::GameState;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::{SimConfig, SimulationEngine};

#[derive(Debug, Clone, Copy)]
enum Action {
    Tick(f64),
    Fire(f64, f64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (1.0f64..250.0).prop_map(Action::Tick),
        1 => (0.0f64..800.0, 0.0f64..600.0).prop_map(|(x, y)| Action::Fire(x, y)),
    ]
}

fn check_invariants(snap: &GameStateSnapshot) {
    for battery in &snap.batteries {
        assert!(battery.ammo <= battery.max_ammo);
        assert!((0.0..=1.0).contains(&battery.recoil));
    }
    for blast in &snap.blasts {
        assert!(blast.radius >= 0.0, "negative radius {}", blast.radius);
        assert!(blast.radius <= blast.max_radius);
    }
    let all_destroyed = snap.batteries.iter().all(|b| b.destroyed);
    match snap.state {
        GameState::Lost => assert!(all_destroyed),
        GameState::Playing => assert!(!all_destroyed),
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_over_random_play(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..400)) {
        let mut engine = SimulationEngine::new(SimConfig::seeded(seed)).unwrap();
        engine.start();

        let mut last_score = 0;
        let mut last_progress: HashMap<u64, f64> = HashMap::new();

        for action in actions {
            let snap = match action {
                Action::Tick(ms) => engine.tick(ms),
                Action::Fire(x, y) => {
                    engine.fire(x, y);
                    engine.snapshot()
                }
            };
            check_invariants(&snap);

            if snap.state == GameState::Playing {
                prop_assert!(snap.score >= last_score);
            }
            last_score = snap.score;

            for projectile in snap.enemies.iter().chain(snap.interceptors.iter()) {
                prop_assert!(projectile.progress >= 0.0);
                if let Some(prev) = last_progress.get(&projectile.id) {
                    prop_assert!(projectile.progress >= *prev);
                }
            }
            // Enemies that reached their target never survive a tick.
            if matches!(action, Action::Tick(_)) && snap.state == GameState::Playing {
                prop_assert!(snap.enemies.iter().all(|e| e.progress < 1.0));
            }
            last_progress = snap
                .enemies
                .iter()
                .chain(snap.interceptors.iter())
                .map(|p| (p.id, p.progress))
                .collect();
        }
    }

    #[test]
    fn firing_never_overdraws_ammo(seed in any::<u64>(), shots in prop::collection::vec((0.0f64..800.0, 0.0f64..600.0), 0..60)) {
        let mut engine = SimulationEngine::new(SimConfig::seeded(seed)).unwrap();
        engine.start();
        let total: u32 = engine.snapshot().batteries.iter().map(|b| b.max_ammo).sum();

        let mut fired = 0u32;
        for (x, y) in shots {
            if engine.fire(x, y).is_some() {
                fired += 1;
            }
        }

        let snap = engine.snapshot();
        let remaining: u32 = snap.batteries.iter().map(|b| b.ammo).sum();
        prop_assert_eq!(remaining + fired, total);
        prop_assert_eq!(snap.stats.shots_fired, fired);
    }
}
