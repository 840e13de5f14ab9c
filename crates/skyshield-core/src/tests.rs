use crate::commands::PlayerCommand;
use crate::components::{Battery, Trajectory};
use crate::enums::*;
use crate::events::SimEvent;
use crate::state::GameStateSnapshot;
use crate::types::{time_scale, PlayField, Position, SimTime};

/// Verify all enums round-trip through serde_json.
#[test]
fn test_game_state_serde() {
    let variants = vec![
        GameState::Menu,
        GameState::Playing,
        GameState::Won,
        GameState::Lost,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_blast_kind_serde() {
    for v in [BlastKind::Interceptor, BlastKind::Impact, BlastKind::Secondary] {
        let json = serde_json::to_string(&v).unwrap();
        let back: BlastKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_player_command_tagged_json() {
    let json = r#"{"type":"Fire","x":120.5,"y":40.0}"#;
    let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
    assert_eq!(cmd, PlayerCommand::Fire { x: 120.5, y: 40.0 });

    let json = serde_json::to_string(&PlayerCommand::SetPaused { paused: true }).unwrap();
    assert!(json.contains("\"type\":\"SetPaused\""));
}

#[test]
fn test_sim_event_serde() {
    let event = SimEvent::TargetStruck {
        kind: TargetKind::Battery,
        index: 2,
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = GameStateSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.state, GameState::Menu);
    assert_eq!(back.score, 0);
    assert!(back.enemies.is_empty());
}

#[test]
fn test_terminal_states() {
    assert!(!GameState::Menu.is_terminal());
    assert!(!GameState::Playing.is_terminal());
    assert!(GameState::Won.is_terminal());
    assert!(GameState::Lost.is_terminal());
}

#[test]
fn test_only_secondary_blasts_are_harmless() {
    assert!(BlastKind::Interceptor.is_damaging());
    assert!(BlastKind::Impact.is_damaging());
    assert!(!BlastKind::Secondary.is_damaging());
}

#[test]
fn test_position_distance_and_lerp() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);

    let mid = a.lerp(&b, 0.5);
    assert!((mid.x() - 1.5).abs() < 1e-12);
    assert!((mid.y() - 2.0).abs() < 1e-12);
}

#[test]
fn test_trajectory_position_follows_progress() {
    let mut traj = Trajectory {
        start: Position::new(100.0, 0.0),
        target: Position::new(100.0, 500.0),
        progress: 0.0,
        speed: 0.01,
    };
    assert_eq!(traj.position(), Position::new(100.0, 0.0));
    assert!(!traj.has_arrived());

    traj.progress = 1.0;
    assert_eq!(traj.position(), Position::new(100.0, 500.0));
    assert!(traj.has_arrived());
}

#[test]
fn test_battery_can_fire() {
    let mut battery = Battery {
        slot: BatterySlot::Center,
        destroyed: false,
        ammo: 1,
        max_ammo: 15,
        recoil: 0.0,
    };
    assert!(battery.can_fire());
    battery.ammo = 0;
    assert!(!battery.can_fire());
    battery.ammo = 5;
    battery.destroyed = true;
    assert!(!battery.can_fire());
}

#[test]
fn test_battery_slot_order() {
    let indices: Vec<usize> = BatterySlot::ALL.iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_play_field_validation() {
    assert!(PlayField::new(800.0, 600.0).is_valid());
    assert!(!PlayField::new(0.0, 600.0).is_valid());
    assert!(!PlayField::new(800.0, -1.0).is_valid());
    assert!(!PlayField::new(f64::NAN, 600.0).is_valid());
    assert!(!PlayField::new(f64::INFINITY, 600.0).is_valid());
}

#[test]
fn test_time_scale_reference_frame() {
    assert!((time_scale(1000.0 / 60.0) - 1.0).abs() < 1e-12);
    assert!((time_scale(1000.0 / 30.0) - 2.0).abs() < 1e-12);
    assert_eq!(time_scale(0.0), 0.0);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(16.0);
    time.advance(20.0);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_ms - 36.0).abs() < 1e-12);
}
